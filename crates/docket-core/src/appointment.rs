//! Appointments between clients and the firm.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How the appointment is held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentKind {
  InPerson,
  VideoConference,
  WrittenConsultation,
}

/// Lifecycle status. Transitions are one-way: `Scheduled` moves to either
/// `Completed` or `Cancelled` and never back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
  Scheduled,
  Completed,
  Cancelled,
}

/// A scheduled interaction.
///
/// Invariant: every name in `participants` references an existing identity
/// (enforced on write by the store).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
  pub id:           Uuid,
  pub title:        String,
  pub kind:         AppointmentKind,
  pub date:         NaiveDate,
  /// Written consultations carry no time slot.
  pub time:         Option<NaiveTime>,
  pub participants: Vec<String>,
  pub status:       AppointmentStatus,
  pub case_id:      Option<Uuid>,
}

impl Appointment {
  /// "Upcoming" is a date-only comparison; time-of-day is ignored.
  pub fn is_upcoming(&self, today: NaiveDate) -> bool {
    self.status == AppointmentStatus::Scheduled && self.date >= today
  }
}
