//! Seed snapshots — the "fixed external data source" the prototype starts
//! from, loaded once at startup and never written back.

use std::path::Path;

use serde::{Deserialize, Serialize};

use docket_core::{
  appointment::Appointment,
  case::Case,
  document::Document,
  identity::Identity,
  message::{Conversation, Message},
  taxonomy::CaseTypeDefinition,
};

use crate::Result;

/// Every record kind in one decodable bundle. All sections default to empty
/// so partial seed files are accepted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
  #[serde(default)]
  pub users:         Vec<Identity>,
  #[serde(default)]
  pub cases:         Vec<Case>,
  #[serde(default)]
  pub appointments:  Vec<Appointment>,
  #[serde(default)]
  pub documents:     Vec<Document>,
  #[serde(default)]
  pub conversations: Vec<Conversation>,
  #[serde(default)]
  pub messages:      Vec<Message>,
  #[serde(default)]
  pub case_types:    Vec<CaseTypeDefinition>,
}

impl Snapshot {
  /// Read and decode a snapshot from a JSON file.
  pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
    let bytes = std::fs::read(path)?;
    Ok(serde_json::from_slice(&bytes)?)
  }
}
