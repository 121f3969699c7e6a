//! Error types for `docket-core`.

use thiserror::Error;
use uuid::Uuid;

use crate::{
  appointment::AppointmentStatus, case::CaseBaseType, document::DocumentStatus,
};

#[derive(Debug, Error)]
pub enum Error {
  #[error("user not found: {0}")]
  UserNotFound(Uuid),

  #[error("case not found: {0}")]
  CaseNotFound(Uuid),

  #[error("appointment not found: {0}")]
  AppointmentNotFound(Uuid),

  #[error("document not found: {0}")]
  DocumentNotFound(Uuid),

  #[error("conversation not found: {0}")]
  ConversationNotFound(Uuid),

  /// The fixed login failure. Deliberately does not distinguish an unknown
  /// email from a deactivated account.
  #[error("invalid credentials")]
  InvalidCredentials,

  #[error("appointment {id} cannot be cancelled from the {status:?} state")]
  CannotCancel {
    id:     Uuid,
    status: AppointmentStatus,
  },

  #[error("document {id} cannot be signed from the {status:?} state")]
  CannotSign {
    id:     Uuid,
    status: DocumentStatus,
  },

  #[error("document {0} cannot be signed without acknowledged consent")]
  ConsentRequired(Uuid),

  #[error("participant {0:?} does not reference a known identity")]
  UnknownParticipant(String),

  #[error("subtype {subtype:?} is not defined for the {base_type:?} base type")]
  UnknownSubtype {
    base_type: CaseBaseType,
    subtype:   String,
  },

  #[error("subtype {name:?} already exists for the {base_type:?} base type")]
  SubtypeExists {
    base_type: CaseBaseType,
    name:      String,
  },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
