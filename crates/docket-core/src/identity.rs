//! Identities — entries in the firm's user directory.
//!
//! Identities are created by an external directory; this system treats them
//! as read-only except for the `active` flag, which admins may toggle.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The permission class of a portal user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
  Client,
  Attorney,
  Manager,
  Admin,
}

impl Role {
  /// Managers and admins see every record regardless of ownership.
  pub fn sees_all(self) -> bool {
    matches!(self, Self::Manager | Self::Admin)
  }
}

/// A portal user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Identity {
  pub id:         Uuid,
  pub name:       String,
  pub email:      String,
  pub role:       Role,
  pub avatar_url: Option<String>,
  /// Soft-deactivation flag — identities are never deleted.
  pub active:     bool,
}
