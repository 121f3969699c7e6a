//! Handler for `GET /dashboard`.
//!
//! The landing view: the viewer's open cases plus their next three upcoming
//! appointments. A request without a session gets the empty dashboard.

use axum::{Json, extract::State};
use chrono::Utc;
use serde::Serialize;

use docket_core::{
  appointment::Appointment,
  case::Case,
  scope::scope,
  store::PortalStore,
  view::dashboard_upcoming,
};

use crate::{AppState, error::ApiError, session::Viewer};

#[derive(Debug, Serialize)]
pub struct DashboardView {
  /// Role-scoped cases that are still open.
  pub open_cases:            Vec<Case>,
  /// The three earliest upcoming appointments, date-ascending.
  pub upcoming_appointments: Vec<Appointment>,
}

/// `GET /dashboard`
pub async fn handler<S>(
  State(state): State<AppState<S>>,
  viewer: Viewer,
) -> Result<Json<DashboardView>, ApiError>
where
  S: PortalStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let cases = state
    .store
    .list_cases()
    .await
    .map_err(ApiError::from_store)?;
  let appointments = state
    .store
    .list_appointments()
    .await
    .map_err(ApiError::from_store)?;

  let open_cases: Vec<Case> = scope(&cases, viewer.0.as_ref())
    .into_iter()
    .filter(|c| c.is_open())
    .cloned()
    .collect();

  let today = Utc::now().date_naive();
  let scoped = scope(&appointments, viewer.0.as_ref());
  let upcoming_appointments: Vec<Appointment> =
    dashboard_upcoming(scoped, today).into_iter().cloned().collect();

  Ok(Json(DashboardView { open_cases, upcoming_appointments }))
}
