//! Documents attached to cases, with a simulated e-signature flow.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Where the document sits in its review/signature flow.
///
/// `AwaitingSignature → Signed` is the only transition this system performs;
/// the remaining states arrive from upstream and never change here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentStatus {
  AwaitingSignature,
  Signed,
  RequiresReview,
  Completed,
}

/// A file belonging to a case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
  pub id:            Uuid,
  pub name:          String,
  pub case_id:       Uuid,
  pub status:        DocumentStatus,
  pub uploaded_date: NaiveDate,
  pub version:       String,
}
