//! Integration tests for `MemStore`.

use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use docket_core::{
  appointment::{Appointment, AppointmentKind, AppointmentStatus},
  case::{Case, CaseBaseType, CaseState},
  document::{Document, DocumentStatus},
  identity::{Identity, Role},
  message::{Conversation, NewMessage},
  store::PortalStore,
};

use crate::{MemStore, Snapshot};

fn user(name: &str, email: &str, role: Role) -> Identity {
  Identity {
    id: Uuid::new_v4(),
    name: name.to_owned(),
    email: email.to_owned(),
    role,
    avatar_url: None,
    active: true,
  }
}

fn appointment(participants: &[&str]) -> Appointment {
  Appointment {
    id:           Uuid::new_v4(),
    title:        "Document review".into(),
    kind:         AppointmentKind::InPerson,
    date:         NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
    time:         None,
    participants: participants.iter().map(|p| (*p).to_owned()).collect(),
    status:       AppointmentStatus::Scheduled,
    case_id:      None,
  }
}

fn case(client: &str, base_type: CaseBaseType, subtype: Option<&str>) -> Case {
  Case {
    id:            Uuid::new_v4(),
    case_number:   "LEX-2024-001".into(),
    client_name:   client.to_owned(),
    base_type,
    subtype:       subtype.map(str::to_owned),
    state:         CaseState::Open,
    last_update:   NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
    description:   "Contract dispute".into(),
    attorney_name: Some("Carol".into()),
  }
}

fn document(status: DocumentStatus) -> Document {
  Document {
    id:            Uuid::new_v4(),
    name:          "Power of Attorney.docx".into(),
    case_id:       Uuid::new_v4(),
    status,
    uploaded_date: NaiveDate::from_ymd_opt(2023, 10, 20).unwrap(),
    version:       "1.1".into(),
  }
}

fn conversation(client: &str, attorney: &str) -> Conversation {
  Conversation {
    id:             Uuid::new_v4(),
    client_name:    client.to_owned(),
    attorney_name:  attorney.to_owned(),
    last_preview:   "See you Tuesday.".into(),
    last_timestamp: Utc::now(),
    unread_count:   0,
  }
}

/// A store seeded with a small user directory.
fn store_with_users(users: Vec<Identity>) -> MemStore {
  MemStore::from_snapshot(Snapshot { users, ..Default::default() })
    .expect("valid snapshot")
}

// ─── Users ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn toggle_user_active_flips_and_restores() {
  let alice = user("Alice", "alice@example.com", Role::Client);
  let id = alice.id;
  let s = store_with_users(vec![alice]);

  let once = s.toggle_user_active(id).await.unwrap();
  assert!(!once.active);

  let twice = s.toggle_user_active(id).await.unwrap();
  assert!(twice.active);
}

#[tokio::test]
async fn toggle_unknown_user_errors() {
  let s = MemStore::new();
  let err = s.toggle_user_active(Uuid::new_v4()).await.unwrap_err();
  assert!(matches!(
    err,
    crate::Error::Core(docket_core::Error::UserNotFound(_))
  ));
}

#[tokio::test]
async fn authenticate_resolves_active_user() {
  let s = store_with_users(vec![user(
    "Alice",
    "alice@example.com",
    Role::Client,
  )]);

  let identity = s.authenticate("Alice@Example.com").await.unwrap();
  assert_eq!(identity.name, "Alice");
}

#[tokio::test]
async fn authenticate_rejects_unknown_and_inactive_alike() {
  let mut dave = user("Dave", "dave@example.com", Role::Client);
  dave.active = false;
  let s = store_with_users(vec![dave]);

  let unknown = s.authenticate("nobody@example.com").await.unwrap_err();
  let inactive = s.authenticate("dave@example.com").await.unwrap_err();
  assert!(matches!(
    unknown,
    crate::Error::Core(docket_core::Error::InvalidCredentials)
  ));
  assert!(matches!(
    inactive,
    crate::Error::Core(docket_core::Error::InvalidCredentials)
  ));
}

// ─── Appointments ────────────────────────────────────────────────────────────

#[tokio::test]
async fn upsert_appointment_inserts_then_replaces() {
  let s = store_with_users(vec![
    user("Alice", "alice@example.com", Role::Client),
    user("Carol", "carol@example.com", Role::Attorney),
  ]);

  let mut appt = appointment(&["Alice", "Carol"]);
  s.upsert_appointment(appt.clone()).await.unwrap();
  assert_eq!(s.list_appointments().await.unwrap().len(), 1);

  appt.title = "Rescheduled review".into();
  let replaced = s.upsert_appointment(appt.clone()).await.unwrap();
  assert_eq!(replaced.title, "Rescheduled review");

  // Replaced in place, not duplicated.
  let all = s.list_appointments().await.unwrap();
  assert_eq!(all.len(), 1);
  assert_eq!(all[0].title, "Rescheduled review");
}

#[tokio::test]
async fn upsert_appointment_rejects_unknown_participant() {
  let s = store_with_users(vec![user(
    "Alice",
    "alice@example.com",
    Role::Client,
  )]);

  let err = s
    .upsert_appointment(appointment(&["Alice", "Mallory"]))
    .await
    .unwrap_err();
  assert!(matches!(
    err,
    crate::Error::Core(docket_core::Error::UnknownParticipant(ref name))
      if name == "Mallory"
  ));
}

#[tokio::test]
async fn cancel_scheduled_appointment() {
  let s = store_with_users(vec![
    user("Alice", "alice@example.com", Role::Client),
    user("Carol", "carol@example.com", Role::Attorney),
  ]);
  let appt = appointment(&["Alice", "Carol"]);
  s.upsert_appointment(appt.clone()).await.unwrap();

  let cancelled = s.cancel_appointment(appt.id).await.unwrap();
  assert_eq!(cancelled.status, AppointmentStatus::Cancelled);
}

#[tokio::test]
async fn cancel_is_rejected_once_cancelled_and_status_is_unchanged() {
  let s = store_with_users(vec![
    user("Alice", "alice@example.com", Role::Client),
    user("Carol", "carol@example.com", Role::Attorney),
  ]);
  let appt = appointment(&["Alice", "Carol"]);
  s.upsert_appointment(appt.clone()).await.unwrap();
  s.cancel_appointment(appt.id).await.unwrap();

  let err = s.cancel_appointment(appt.id).await.unwrap_err();
  assert!(matches!(
    err,
    crate::Error::Core(docket_core::Error::CannotCancel {
      status: AppointmentStatus::Cancelled,
      ..
    })
  ));

  let stored = s.get_appointment(appt.id).await.unwrap().unwrap();
  assert_eq!(stored.status, AppointmentStatus::Cancelled);
}

#[tokio::test]
async fn cancel_completed_appointment_is_rejected() {
  let s = store_with_users(vec![
    user("Alice", "alice@example.com", Role::Client),
    user("Carol", "carol@example.com", Role::Attorney),
  ]);
  let mut appt = appointment(&["Alice", "Carol"]);
  appt.status = AppointmentStatus::Completed;
  s.upsert_appointment(appt.clone()).await.unwrap();

  let err = s.cancel_appointment(appt.id).await.unwrap_err();
  assert!(matches!(
    err,
    crate::Error::Core(docket_core::Error::CannotCancel { .. })
  ));
}

// ─── Documents ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn sign_with_acknowledged_consent() {
  let doc = document(DocumentStatus::AwaitingSignature);
  let s = MemStore::from_snapshot(Snapshot {
    documents: vec![doc.clone()],
    ..Default::default()
  })
  .unwrap();

  let signed = s.sign_document(doc.id, true).await.unwrap();
  assert_eq!(signed.status, DocumentStatus::Signed);
}

#[tokio::test]
async fn sign_without_consent_leaves_document_awaiting() {
  let doc = document(DocumentStatus::AwaitingSignature);
  let s = MemStore::from_snapshot(Snapshot {
    documents: vec![doc.clone()],
    ..Default::default()
  })
  .unwrap();

  let err = s.sign_document(doc.id, false).await.unwrap_err();
  assert!(matches!(
    err,
    crate::Error::Core(docket_core::Error::ConsentRequired(_))
  ));

  let stored = s.get_document(doc.id).await.unwrap().unwrap();
  assert_eq!(stored.status, DocumentStatus::AwaitingSignature);
}

#[tokio::test]
async fn sign_is_rejected_outside_awaiting_signature() {
  let doc = document(DocumentStatus::Completed);
  let s = MemStore::from_snapshot(Snapshot {
    documents: vec![doc.clone()],
    ..Default::default()
  })
  .unwrap();

  let err = s.sign_document(doc.id, true).await.unwrap_err();
  assert!(matches!(
    err,
    crate::Error::Core(docket_core::Error::CannotSign {
      status: DocumentStatus::Completed,
      ..
    })
  ));
}

// ─── Cases ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn upsert_case_enforces_subtype_invariant() {
  let s = MemStore::new();

  let err = s
    .upsert_case(case("Alice", CaseBaseType::Judicial, Some("Civil")))
    .await
    .unwrap_err();
  assert!(matches!(
    err,
    crate::Error::Core(docket_core::Error::UnknownSubtype { .. })
  ));

  // Once the subtype is defined the same case is accepted.
  s.add_case_subtype(CaseBaseType::Judicial, "Civil".into())
    .await
    .unwrap();
  s.upsert_case(case("Alice", CaseBaseType::Judicial, Some("Civil")))
    .await
    .unwrap();
  assert_eq!(s.list_cases().await.unwrap().len(), 1);
}

#[tokio::test]
async fn subtype_defined_under_one_base_type_does_not_satisfy_the_other() {
  let s = MemStore::new();
  s.add_case_subtype(CaseBaseType::Judicial, "Civil".into())
    .await
    .unwrap();

  let err = s
    .upsert_case(case("Alice", CaseBaseType::Administrative, Some("Civil")))
    .await
    .unwrap_err();
  assert!(matches!(
    err,
    crate::Error::Core(docket_core::Error::UnknownSubtype { .. })
  ));
}

// ─── Conversations & messages ────────────────────────────────────────────────

#[tokio::test]
async fn append_message_updates_conversation_preview() {
  let conv = conversation("Alice", "Carol");
  let s = MemStore::from_snapshot(Snapshot {
    conversations: vec![conv.clone()],
    ..Default::default()
  })
  .unwrap();

  let message = s
    .append_message(NewMessage {
      conversation_id: conv.id,
      sender_name:     "Carol".into(),
      content:         "The court has replied.".into(),
    })
    .await
    .unwrap();

  let updated = s.get_conversation(conv.id).await.unwrap().unwrap();
  assert_eq!(updated.last_preview, "The court has replied.");
  assert_eq!(updated.last_timestamp, message.timestamp);

  let messages = s.list_messages(conv.id).await.unwrap();
  assert_eq!(messages.len(), 1);
  assert_eq!(messages[0].id, message.id);
}

#[tokio::test]
async fn append_to_unknown_conversation_errors() {
  let s = MemStore::new();
  let err = s
    .append_message(NewMessage {
      conversation_id: Uuid::new_v4(),
      sender_name:     "Carol".into(),
      content:         "Hello?".into(),
    })
    .await
    .unwrap_err();
  assert!(matches!(
    err,
    crate::Error::Core(docket_core::Error::ConversationNotFound(_))
  ));
}

#[tokio::test]
async fn messages_are_listed_oldest_first() {
  let conv = conversation("Alice", "Carol");
  let s = MemStore::from_snapshot(Snapshot {
    conversations: vec![conv.clone()],
    ..Default::default()
  })
  .unwrap();

  for content in ["first", "second", "third"] {
    s.append_message(NewMessage {
      conversation_id: conv.id,
      sender_name:     "Alice".into(),
      content:         content.into(),
    })
    .await
    .unwrap();
  }

  let messages = s.list_messages(conv.id).await.unwrap();
  let contents: Vec<&str> =
    messages.iter().map(|m| m.content.as_str()).collect();
  assert_eq!(contents, ["first", "second", "third"]);
}

// ─── Taxonomy ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn subtype_ids_are_generated_in_sequence() {
  let s = MemStore::new();

  let first = s
    .add_case_subtype(CaseBaseType::Judicial, "Civil".into())
    .await
    .unwrap();
  let second = s
    .add_case_subtype(CaseBaseType::Judicial, "Laboral".into())
    .await
    .unwrap();

  assert_eq!(first.id, "JU-001");
  assert_eq!(second.id, "JU-002");
}

// ─── Snapshot loading ────────────────────────────────────────────────────────

#[tokio::test]
async fn snapshot_with_unknown_participant_is_rejected() {
  let snapshot = Snapshot {
    users:        vec![user("Alice", "alice@example.com", Role::Client)],
    appointments: vec![appointment(&["Alice", "Ghost"])],
    ..Default::default()
  };

  let err = MemStore::from_snapshot(snapshot).unwrap_err();
  assert!(matches!(
    err,
    crate::Error::Core(docket_core::Error::UnknownParticipant(_))
  ));
}

#[tokio::test]
async fn snapshot_round_trips_records() {
  let users = vec![
    user("Alice", "alice@example.com", Role::Client),
    user("Carol", "carol@example.com", Role::Attorney),
  ];
  let snapshot = Snapshot {
    users:        users.clone(),
    cases:        vec![case("Alice", CaseBaseType::Judicial, None)],
    appointments: vec![appointment(&["Alice", "Carol"])],
    documents:    vec![document(DocumentStatus::Signed)],
    ..Default::default()
  };

  let s = MemStore::from_snapshot(snapshot).unwrap();
  assert_eq!(s.list_users().await.unwrap().len(), 2);
  assert_eq!(s.list_cases().await.unwrap().len(), 1);
  assert_eq!(s.list_appointments().await.unwrap().len(), 1);
  assert_eq!(s.list_documents().await.unwrap().len(), 1);
}
