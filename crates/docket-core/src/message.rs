//! Conversations and messages between a client and their attorney.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A client/attorney message thread. The preview fields are denormalised
/// from the newest message and maintained on append.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conversation {
  pub id:             Uuid,
  pub client_name:    String,
  pub attorney_name:  String,
  pub last_preview:   String,
  pub last_timestamp: DateTime<Utc>,
  pub unread_count:   u32,
}

/// A single message within a conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
  pub id:              Uuid,
  pub conversation_id: Uuid,
  pub sender_name:     String,
  pub content:         String,
  /// Assigned by the store on append; never accepted from callers.
  pub timestamp:       DateTime<Utc>,
}

/// Input to [`crate::store::PortalStore::append_message`].
/// The id and timestamp are always set by the store.
#[derive(Debug, Clone)]
pub struct NewMessage {
  pub conversation_id: Uuid,
  pub sender_name:     String,
  pub content:         String,
}
