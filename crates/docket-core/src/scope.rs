//! Role-scoped visibility — the subset of records a viewer may see.
//!
//! Clients see their own records, attorneys their assigned records, and
//! managers/admins everything. A missing viewer (logged out) always yields
//! the empty set: visibility fails closed rather than falling back to a
//! public view.

use std::collections::HashSet;

use uuid::Uuid;

use crate::{
  appointment::Appointment,
  case::Case,
  document::Document,
  identity::{Identity, Role},
  message::Conversation,
};

/// Implemented by every record kind that is filtered by viewer role.
pub trait RoleScoped {
  fn visible_to(&self, viewer: &Identity) -> bool;
}

/// Scope `records` to an optional viewer. Pure; no side effects.
pub fn scope<'a, T, I>(records: I, viewer: Option<&Identity>) -> Vec<&'a T>
where
  T: RoleScoped,
  I: IntoIterator<Item = &'a T>,
{
  match viewer {
    None => Vec::new(),
    Some(v) => records.into_iter().filter(|r| r.visible_to(v)).collect(),
  }
}

impl RoleScoped for Case {
  fn visible_to(&self, viewer: &Identity) -> bool {
    match viewer.role {
      Role::Client => self.client_name == viewer.name,
      Role::Attorney => {
        self.attorney_name.as_deref() == Some(viewer.name.as_str())
      }
      Role::Manager | Role::Admin => true,
    }
  }
}

impl RoleScoped for Appointment {
  fn visible_to(&self, viewer: &Identity) -> bool {
    viewer.role.sees_all()
      || self.participants.iter().any(|p| *p == viewer.name)
  }
}

impl RoleScoped for Conversation {
  fn visible_to(&self, viewer: &Identity) -> bool {
    match viewer.role {
      Role::Client => self.client_name == viewer.name,
      Role::Attorney => self.attorney_name == viewer.name,
      Role::Manager | Role::Admin => true,
    }
  }
}

impl RoleScoped for Identity {
  /// Directory entries: non-administrative viewers see only themselves.
  fn visible_to(&self, viewer: &Identity) -> bool {
    viewer.role.sees_all() || self.id == viewer.id
  }
}

/// Documents carry no party names of their own; their visibility flows
/// through the owning case.
pub fn scope_documents<'a>(
  documents: &'a [Document],
  cases: &[Case],
  viewer: Option<&Identity>,
) -> Vec<&'a Document> {
  let Some(v) = viewer else {
    return Vec::new();
  };
  if v.role.sees_all() {
    return documents.iter().collect();
  }
  let visible_cases: HashSet<Uuid> = cases
    .iter()
    .filter(|c| c.visible_to(v))
    .map(|c| c.id)
    .collect();
  documents
    .iter()
    .filter(|d| visible_cases.contains(&d.case_id))
    .collect()
}
