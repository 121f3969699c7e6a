//! The `PortalStore` trait — the record store behind the portal.
//!
//! The trait is implemented by storage backends (e.g. `docket-store-mem`).
//! Higher layers (`docket-api`, `docket-server`) depend on this abstraction,
//! not on any concrete backend.
//!
//! Writes are narrow by design: apart from the two upsert paths, every
//! mutation is a named status transition that touches a single record.

use std::future::Future;

use uuid::Uuid;

use crate::{
  appointment::Appointment,
  case::{Case, CaseBaseType},
  document::Document,
  identity::Identity,
  message::{Conversation, Message, NewMessage},
  taxonomy::{CaseTypeCatalog, Subtype},
};

/// Abstraction over a portal record store backend.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait PortalStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Users ─────────────────────────────────────────────────────────────

  fn list_users(
    &self,
  ) -> impl Future<Output = Result<Vec<Identity>, Self::Error>> + Send + '_;

  fn get_user(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<Identity>, Self::Error>> + Send + '_;

  /// The simulated login: resolve an email to an active identity.
  ///
  /// Unknown emails and deactivated accounts both fail with the same
  /// invalid-credentials error.
  fn authenticate<'a>(
    &'a self,
    email: &'a str,
  ) -> impl Future<Output = Result<Identity, Self::Error>> + Send + 'a;

  /// Flip the `active` flag — the only "deletion" users have.
  fn toggle_user_active(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Identity, Self::Error>> + Send + '_;

  // ── Cases ─────────────────────────────────────────────────────────────

  fn list_cases(
    &self,
  ) -> impl Future<Output = Result<Vec<Case>, Self::Error>> + Send + '_;

  fn get_case(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<Case>, Self::Error>> + Send + '_;

  /// Insert if the id is unseen, else replace in place. Validates the
  /// subtype invariant against the taxonomy. There is no delete path.
  fn upsert_case(
    &self,
    case: Case,
  ) -> impl Future<Output = Result<Case, Self::Error>> + Send + '_;

  // ── Appointments ──────────────────────────────────────────────────────

  fn list_appointments(
    &self,
  ) -> impl Future<Output = Result<Vec<Appointment>, Self::Error>> + Send + '_;

  fn get_appointment(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<Appointment>, Self::Error>> + Send + '_;

  /// Insert if the id is unseen, else replace in place — the single
  /// create/update path. Validates that every participant references an
  /// existing identity.
  fn upsert_appointment(
    &self,
    appointment: Appointment,
  ) -> impl Future<Output = Result<Appointment, Self::Error>> + Send + '_;

  /// `Scheduled → Cancelled`. Any other starting state is a rejected
  /// precondition and leaves the record unchanged.
  fn cancel_appointment(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Appointment, Self::Error>> + Send + '_;

  // ── Documents ─────────────────────────────────────────────────────────

  fn list_documents(
    &self,
  ) -> impl Future<Output = Result<Vec<Document>, Self::Error>> + Send + '_;

  fn get_document(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<Document>, Self::Error>> + Send + '_;

  /// `AwaitingSignature → Signed`, gated on the caller having collected an
  /// explicit consent acknowledgment. Without it the document is left in
  /// `AwaitingSignature` and a consent error is returned.
  fn sign_document(
    &self,
    id: Uuid,
    consent_acknowledged: bool,
  ) -> impl Future<Output = Result<Document, Self::Error>> + Send + '_;

  // ── Conversations & messages ──────────────────────────────────────────

  fn list_conversations(
    &self,
  ) -> impl Future<Output = Result<Vec<Conversation>, Self::Error>> + Send + '_;

  fn get_conversation(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<Conversation>, Self::Error>> + Send + '_;

  /// All messages of one conversation, oldest first.
  fn list_messages(
    &self,
    conversation_id: Uuid,
  ) -> impl Future<Output = Result<Vec<Message>, Self::Error>> + Send + '_;

  /// Append a message and update the parent conversation's preview and
  /// timestamp. The message id and timestamp are set by the store.
  fn append_message(
    &self,
    input: NewMessage,
  ) -> impl Future<Output = Result<Message, Self::Error>> + Send + '_;

  // ── Case-type taxonomy ────────────────────────────────────────────────

  fn case_type_catalog(
    &self,
  ) -> impl Future<Output = Result<CaseTypeCatalog, Self::Error>> + Send + '_;

  /// Define a new subtype; its id is generated (`JU-001`, `AD-001`, …).
  fn add_case_subtype(
    &self,
    base_type: CaseBaseType,
    name: String,
  ) -> impl Future<Output = Result<Subtype, Self::Error>> + Send + '_;
}
