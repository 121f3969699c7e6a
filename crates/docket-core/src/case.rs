//! Cases — the firm's matters, classified by a two-level taxonomy.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The fixed top level of the case taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseBaseType {
  Administrative,
  Judicial,
}

impl CaseBaseType {
  pub const ALL: [CaseBaseType; 2] = [Self::Administrative, Self::Judicial];

  /// Prefix used when generating subtype ids (`AD-001`, `JU-001`, …).
  pub fn subtype_prefix(self) -> &'static str {
    match self {
      Self::Administrative => "AD",
      Self::Judicial => "JU",
    }
  }
}

/// Whether a case is still being worked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseState {
  Open,
  Closed,
}

/// A matter handled by the firm.
///
/// Cases are never deleted; closing is the only end-of-life transition.
/// Invariant: a present `subtype` must belong to the taxonomy entry for
/// `base_type` (enforced on write by the store).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Case {
  pub id:            Uuid,
  /// Human-facing reference, e.g. `LEX-2023-001`.
  pub case_number:   String,
  pub client_name:   String,
  pub base_type:     CaseBaseType,
  pub subtype:       Option<String>,
  pub state:         CaseState,
  pub last_update:   NaiveDate,
  pub description:   String,
  pub attorney_name: Option<String>,
}

impl Case {
  pub fn is_open(&self) -> bool { self.state == CaseState::Open }
}
