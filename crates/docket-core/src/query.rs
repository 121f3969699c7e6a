//! Secondary filter predicates, layered over a role-scoped subset.
//!
//! Every field is optional; an absent field is a no-op and present fields
//! narrow by logical AND. Applying the same query twice therefore yields
//! the same subset as applying it once.

use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;

use crate::{
  appointment::{Appointment, AppointmentKind, AppointmentStatus},
  case::{Case, CaseBaseType, CaseState},
  document::{Document, DocumentStatus},
  identity::{Identity, Role},
  message::Conversation,
};

/// Case-insensitive substring match over a record's nominated fields.
fn matches_text<'a>(
  needle: &str,
  haystacks: impl IntoIterator<Item = &'a str>,
) -> bool {
  let needle = needle.to_lowercase();
  haystacks
    .into_iter()
    .any(|h| h.to_lowercase().contains(&needle))
}

// ─── Cases ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CaseQuery {
  pub state:     Option<CaseState>,
  pub base_type: Option<CaseBaseType>,
  pub subtype:   Option<String>,
  /// Matched against case number, client name, and description.
  pub text:      Option<String>,
}

impl CaseQuery {
  pub fn matches(&self, case: &Case) -> bool {
    self.state.is_none_or(|s| case.state == s)
      && self.base_type.is_none_or(|b| case.base_type == b)
      && self
        .subtype
        .as_deref()
        .is_none_or(|s| case.subtype.as_deref() == Some(s))
      && self.text.as_deref().is_none_or(|t| {
        matches_text(t, [
          case.case_number.as_str(),
          case.client_name.as_str(),
          case.description.as_str(),
        ])
      })
  }

  pub fn apply<'a>(
    &self,
    cases: impl IntoIterator<Item = &'a Case>,
  ) -> Vec<&'a Case> {
    cases.into_iter().filter(|c| self.matches(c)).collect()
  }
}

// ─── Appointments ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppointmentQuery {
  pub status:  Option<AppointmentStatus>,
  pub kind:    Option<AppointmentKind>,
  /// Calendar view: keep only appointments on this exact date.
  pub on_date: Option<NaiveDate>,
  /// Matched against the title.
  pub text:    Option<String>,
}

impl AppointmentQuery {
  pub fn matches(&self, appointment: &Appointment) -> bool {
    self.status.is_none_or(|s| appointment.status == s)
      && self.kind.is_none_or(|k| appointment.kind == k)
      && self.on_date.is_none_or(|d| appointment.date == d)
      && self
        .text
        .as_deref()
        .is_none_or(|t| matches_text(t, [appointment.title.as_str()]))
  }

  pub fn apply<'a>(
    &self,
    appointments: impl IntoIterator<Item = &'a Appointment>,
  ) -> Vec<&'a Appointment> {
    appointments
      .into_iter()
      .filter(|a| self.matches(a))
      .collect()
  }
}

// ─── Documents ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DocumentQuery {
  pub status:  Option<DocumentStatus>,
  pub case_id: Option<Uuid>,
  /// Matched against the document name and the owning case's number.
  pub text:    Option<String>,
}

impl DocumentQuery {
  /// `case_number` is the owning case's number, when the caller has it;
  /// text search covers it alongside the document name.
  pub fn matches(&self, document: &Document, case_number: Option<&str>) -> bool {
    self.status.is_none_or(|s| document.status == s)
      && self.case_id.is_none_or(|id| document.case_id == id)
      && self.text.as_deref().is_none_or(|t| {
        matches_text(
          t,
          std::iter::once(document.name.as_str()).chain(case_number),
        )
      })
  }

  pub fn apply<'a>(
    &self,
    documents: impl IntoIterator<Item = &'a Document>,
    case_number_of: impl Fn(&Document) -> Option<String>,
  ) -> Vec<&'a Document> {
    documents
      .into_iter()
      .filter(|d| self.matches(d, case_number_of(d).as_deref()))
      .collect()
  }
}

// ─── Users ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserQuery {
  pub role:   Option<Role>,
  pub active: Option<bool>,
  /// Matched against name and email.
  pub text:   Option<String>,
}

impl UserQuery {
  pub fn matches(&self, user: &Identity) -> bool {
    self.role.is_none_or(|r| user.role == r)
      && self.active.is_none_or(|a| user.active == a)
      && self.text.as_deref().is_none_or(|t| {
        matches_text(t, [user.name.as_str(), user.email.as_str()])
      })
  }

  pub fn apply<'a>(
    &self,
    users: impl IntoIterator<Item = &'a Identity>,
  ) -> Vec<&'a Identity> {
    users.into_iter().filter(|u| self.matches(u)).collect()
  }
}

// ─── Conversations ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConversationQuery {
  /// Matched against both party names.
  pub text: Option<String>,
}

impl ConversationQuery {
  pub fn matches(&self, conversation: &Conversation) -> bool {
    self.text.as_deref().is_none_or(|t| {
      matches_text(t, [
        conversation.client_name.as_str(),
        conversation.attorney_name.as_str(),
      ])
    })
  }

  pub fn apply<'a>(
    &self,
    conversations: impl IntoIterator<Item = &'a Conversation>,
  ) -> Vec<&'a Conversation> {
    conversations
      .into_iter()
      .filter(|c| self.matches(c))
      .collect()
  }
}
