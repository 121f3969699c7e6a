//! Derived view models — the sorted/limited/counted projections rendered by
//! the front-end, recomputed from the filtered record sets.

use chrono::NaiveDate;
use serde::Serialize;

use crate::{appointment::Appointment, document::Document};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDir {
  Asc,
  Desc,
}

/// Order `items` by `key` in `dir`, keeping at most `limit` of the head.
/// The sort is stable, so equal keys keep their incoming order.
pub fn project<'a, T, K, F>(
  items: impl IntoIterator<Item = &'a T>,
  key: F,
  dir: SortDir,
  limit: Option<usize>,
) -> Vec<&'a T>
where
  K: Ord,
  F: Fn(&T) -> K,
{
  let mut items: Vec<&'a T> = items.into_iter().collect();
  items.sort_by_key(|t| key(*t));
  if dir == SortDir::Desc {
    items.reverse();
  }
  if let Some(limit) = limit {
    items.truncate(limit);
  }
  items
}

// ─── Appointment schedule ────────────────────────────────────────────────────

/// The dashboard shows at most this many upcoming appointments.
pub const DASHBOARD_UPCOMING_LIMIT: usize = 3;

/// The appointments page split: upcoming ascending, past descending.
#[derive(Debug)]
pub struct AppointmentSchedule<'a> {
  /// Scheduled with date ≥ today, earliest first.
  pub upcoming: Vec<&'a Appointment>,
  /// Everything else (date < today or no longer Scheduled), newest first.
  pub past:     Vec<&'a Appointment>,
}

/// Partition appointments relative to `today`. Date-only comparison;
/// time-of-day is ignored.
pub fn split_schedule<'a>(
  appointments: impl IntoIterator<Item = &'a Appointment>,
  today: NaiveDate,
) -> AppointmentSchedule<'a> {
  let (upcoming, past): (Vec<&Appointment>, Vec<&Appointment>) = appointments
    .into_iter()
    .partition(|a| a.is_upcoming(today));

  AppointmentSchedule {
    upcoming: project(upcoming, |a| a.date, SortDir::Asc, None),
    past:     project(past, |a| a.date, SortDir::Desc, None),
  }
}

/// The dashboard's "next appointments" card: the three earliest upcoming.
pub fn dashboard_upcoming<'a>(
  appointments: impl IntoIterator<Item = &'a Appointment>,
  today: NaiveDate,
) -> Vec<&'a Appointment> {
  project(
    appointments.into_iter().filter(|a| a.is_upcoming(today)),
    |a| a.date,
    SortDir::Asc,
    Some(DASHBOARD_UPCOMING_LIMIT),
  )
}

// ─── Tab badge counts ────────────────────────────────────────────────────────

/// Badge counts for the documents page tabs.
///
/// Computed from the role-scoped, search-filtered subset *before* any tab's
/// status filter, so switching tabs never changes the other tabs' counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DocumentTabCounts {
  pub all:                usize,
  pub awaiting_signature: usize,
  pub signed:             usize,
  pub other:              usize,
}

pub fn document_tab_counts<'a>(
  documents: impl IntoIterator<Item = &'a Document>,
) -> DocumentTabCounts {
  use crate::document::DocumentStatus::{AwaitingSignature, Signed};

  let mut counts = DocumentTabCounts {
    all:                0,
    awaiting_signature: 0,
    signed:             0,
    other:              0,
  };
  for doc in documents {
    counts.all += 1;
    match doc.status {
      AwaitingSignature => counts.awaiting_signature += 1,
      Signed => counts.signed += 1,
      _ => counts.other += 1,
    }
  }
  counts
}
