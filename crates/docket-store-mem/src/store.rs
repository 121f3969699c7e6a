//! [`MemStore`] — the in-memory implementation of [`PortalStore`].

use std::sync::Arc;

use chrono::Utc;
use parking_lot::RwLock;
use uuid::Uuid;

use docket_core::{
  appointment::{Appointment, AppointmentStatus},
  case::{Case, CaseBaseType},
  document::{Document, DocumentStatus},
  identity::Identity,
  message::{Conversation, Message, NewMessage},
  store::PortalStore,
  taxonomy::{CaseTypeCatalog, Subtype},
};

use crate::{Error, Result, Snapshot};

// ─── State ───────────────────────────────────────────────────────────────────

#[derive(Debug, Default)]
struct State {
  users:         Vec<Identity>,
  cases:         Vec<Case>,
  appointments:  Vec<Appointment>,
  documents:     Vec<Document>,
  conversations: Vec<Conversation>,
  messages:      Vec<Message>,
  catalog:       CaseTypeCatalog,
}

impl State {
  fn check_subtype(&self, case: &Case) -> Result<()> {
    if let Some(subtype) = &case.subtype
      && !self.catalog.is_valid_subtype(case.base_type, subtype)
    {
      return Err(
        docket_core::Error::UnknownSubtype {
          base_type: case.base_type,
          subtype:   subtype.clone(),
        }
        .into(),
      );
    }
    Ok(())
  }

  fn check_participants(&self, appointment: &Appointment) -> Result<()> {
    for participant in &appointment.participants {
      if !self.users.iter().any(|u| u.name == *participant) {
        return Err(
          docket_core::Error::UnknownParticipant(participant.clone()).into(),
        );
      }
    }
    Ok(())
  }
}

// ─── Store ───────────────────────────────────────────────────────────────────

/// A portal store held entirely in process memory.
///
/// Cloning is cheap — the state is reference-counted, so every clone sees
/// the same records.
#[derive(Clone, Debug, Default)]
pub struct MemStore {
  state: Arc<RwLock<State>>,
}

impl MemStore {
  /// An empty store: no records, both base types with no subtypes.
  pub fn new() -> Self {
    Self::default()
  }

  /// Build a store from a seed snapshot, validating the record invariants
  /// (case subtypes against the taxonomy, appointment participants against
  /// the user directory).
  pub fn from_snapshot(snapshot: Snapshot) -> Result<Self> {
    let state = State {
      users:         snapshot.users,
      cases:         snapshot.cases,
      appointments:  snapshot.appointments,
      documents:     snapshot.documents,
      conversations: snapshot.conversations,
      messages:      snapshot.messages,
      catalog:       CaseTypeCatalog::from_definitions(snapshot.case_types),
    };

    for case in &state.cases {
      state.check_subtype(case)?;
    }
    for appointment in &state.appointments {
      state.check_participants(appointment)?;
    }

    Ok(Self { state: Arc::new(RwLock::new(state)) })
  }

  /// Replace-or-insert by id, preserving list position on replace.
  fn upsert_by_id<T>(records: &mut Vec<T>, record: T, id_of: impl Fn(&T) -> Uuid) {
    let id = id_of(&record);
    match records.iter().position(|r| id_of(r) == id) {
      Some(i) => records[i] = record,
      None => records.push(record),
    }
  }
}

impl PortalStore for MemStore {
  type Error = Error;

  // ── Users ─────────────────────────────────────────────────────────────

  async fn list_users(&self) -> Result<Vec<Identity>> {
    Ok(self.state.read().users.clone())
  }

  async fn get_user(&self, id: Uuid) -> Result<Option<Identity>> {
    Ok(self.state.read().users.iter().find(|u| u.id == id).cloned())
  }

  async fn authenticate(&self, email: &str) -> Result<Identity> {
    let state = self.state.read();
    state
      .users
      .iter()
      .find(|u| u.email.eq_ignore_ascii_case(email) && u.active)
      .cloned()
      .ok_or_else(|| docket_core::Error::InvalidCredentials.into())
  }

  async fn toggle_user_active(&self, id: Uuid) -> Result<Identity> {
    let mut state = self.state.write();
    let user = state
      .users
      .iter_mut()
      .find(|u| u.id == id)
      .ok_or(docket_core::Error::UserNotFound(id))?;
    user.active = !user.active;
    Ok(user.clone())
  }

  // ── Cases ─────────────────────────────────────────────────────────────

  async fn list_cases(&self) -> Result<Vec<Case>> {
    Ok(self.state.read().cases.clone())
  }

  async fn get_case(&self, id: Uuid) -> Result<Option<Case>> {
    Ok(self.state.read().cases.iter().find(|c| c.id == id).cloned())
  }

  async fn upsert_case(&self, case: Case) -> Result<Case> {
    let mut state = self.state.write();
    state.check_subtype(&case)?;
    Self::upsert_by_id(&mut state.cases, case.clone(), |c| c.id);
    Ok(case)
  }

  // ── Appointments ──────────────────────────────────────────────────────

  async fn list_appointments(&self) -> Result<Vec<Appointment>> {
    Ok(self.state.read().appointments.clone())
  }

  async fn get_appointment(&self, id: Uuid) -> Result<Option<Appointment>> {
    Ok(
      self
        .state
        .read()
        .appointments
        .iter()
        .find(|a| a.id == id)
        .cloned(),
    )
  }

  async fn upsert_appointment(
    &self,
    appointment: Appointment,
  ) -> Result<Appointment> {
    let mut state = self.state.write();
    state.check_participants(&appointment)?;
    Self::upsert_by_id(&mut state.appointments, appointment.clone(), |a| a.id);
    Ok(appointment)
  }

  async fn cancel_appointment(&self, id: Uuid) -> Result<Appointment> {
    let mut state = self.state.write();
    let appointment = state
      .appointments
      .iter_mut()
      .find(|a| a.id == id)
      .ok_or(docket_core::Error::AppointmentNotFound(id))?;

    if appointment.status != AppointmentStatus::Scheduled {
      return Err(
        docket_core::Error::CannotCancel { id, status: appointment.status }
          .into(),
      );
    }
    appointment.status = AppointmentStatus::Cancelled;
    Ok(appointment.clone())
  }

  // ── Documents ─────────────────────────────────────────────────────────

  async fn list_documents(&self) -> Result<Vec<Document>> {
    Ok(self.state.read().documents.clone())
  }

  async fn get_document(&self, id: Uuid) -> Result<Option<Document>> {
    Ok(
      self
        .state
        .read()
        .documents
        .iter()
        .find(|d| d.id == id)
        .cloned(),
    )
  }

  async fn sign_document(
    &self,
    id: Uuid,
    consent_acknowledged: bool,
  ) -> Result<Document> {
    let mut state = self.state.write();
    let document = state
      .documents
      .iter_mut()
      .find(|d| d.id == id)
      .ok_or(docket_core::Error::DocumentNotFound(id))?;

    if !consent_acknowledged {
      return Err(docket_core::Error::ConsentRequired(id).into());
    }
    if document.status != DocumentStatus::AwaitingSignature {
      return Err(
        docket_core::Error::CannotSign { id, status: document.status }.into(),
      );
    }
    document.status = DocumentStatus::Signed;
    Ok(document.clone())
  }

  // ── Conversations & messages ──────────────────────────────────────────

  async fn list_conversations(&self) -> Result<Vec<Conversation>> {
    Ok(self.state.read().conversations.clone())
  }

  async fn get_conversation(&self, id: Uuid) -> Result<Option<Conversation>> {
    Ok(
      self
        .state
        .read()
        .conversations
        .iter()
        .find(|c| c.id == id)
        .cloned(),
    )
  }

  async fn list_messages(&self, conversation_id: Uuid) -> Result<Vec<Message>> {
    let state = self.state.read();
    if !state.conversations.iter().any(|c| c.id == conversation_id) {
      return Err(
        docket_core::Error::ConversationNotFound(conversation_id).into(),
      );
    }
    let mut messages: Vec<Message> = state
      .messages
      .iter()
      .filter(|m| m.conversation_id == conversation_id)
      .cloned()
      .collect();
    messages.sort_by_key(|m| m.timestamp);
    Ok(messages)
  }

  async fn append_message(&self, input: NewMessage) -> Result<Message> {
    let mut state = self.state.write();
    let conversation = state
      .conversations
      .iter_mut()
      .find(|c| c.id == input.conversation_id)
      .ok_or(docket_core::Error::ConversationNotFound(
        input.conversation_id,
      ))?;

    let message = Message {
      id:              Uuid::new_v4(),
      conversation_id: input.conversation_id,
      sender_name:     input.sender_name,
      content:         input.content,
      timestamp:       Utc::now(),
    };

    conversation.last_preview = message.content.clone();
    conversation.last_timestamp = message.timestamp;

    state.messages.push(message.clone());
    Ok(message)
  }

  // ── Case-type taxonomy ────────────────────────────────────────────────

  async fn case_type_catalog(&self) -> Result<CaseTypeCatalog> {
    Ok(self.state.read().catalog.clone())
  }

  async fn add_case_subtype(
    &self,
    base_type: CaseBaseType,
    name: String,
  ) -> Result<Subtype> {
    let mut state = self.state.write();
    Ok(state.catalog.add_subtype(base_type, name)?)
  }
}
