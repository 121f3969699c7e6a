//! Handlers for `/appointments` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/appointments` | Optional `status`, `kind`, `on_date`, `text` |
//! | `GET`  | `/appointments/:id` | 404 if not found or not visible |
//! | `PUT`  | `/appointments` | Insert-or-replace by id — the scheduling path |
//! | `POST` | `/appointments/:id/cancel` | Scheduled → Cancelled, else 409 |

use axum::{
  Json,
  extract::{Path, Query, State},
};
use uuid::Uuid;

use docket_core::{
  appointment::Appointment,
  query::AppointmentQuery,
  scope::{RoleScoped as _, scope},
  store::PortalStore,
};

use crate::{AppState, error::ApiError, session::Viewer};

/// `GET /appointments[?status=scheduled][&kind=in_person][&on_date=2025-07-01][&text=...]`
pub async fn list<S>(
  State(state): State<AppState<S>>,
  viewer: Viewer,
  Query(query): Query<AppointmentQuery>,
) -> Result<Json<Vec<Appointment>>, ApiError>
where
  S: PortalStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let appointments = state
    .store
    .list_appointments()
    .await
    .map_err(ApiError::from_store)?;
  let scoped = scope(&appointments, viewer.0.as_ref());
  Ok(Json(query.apply(scoped).into_iter().cloned().collect()))
}

/// `GET /appointments/:id`
pub async fn get_one<S>(
  State(state): State<AppState<S>>,
  viewer: Viewer,
  Path(id): Path<Uuid>,
) -> Result<Json<Appointment>, ApiError>
where
  S: PortalStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let appointment = state
    .store
    .get_appointment(id)
    .await
    .map_err(ApiError::from_store)?
    .filter(|a| viewer.0.as_ref().is_some_and(|v| a.visible_to(v)))
    .ok_or_else(|| ApiError::NotFound(format!("appointment {id} not found")))?;
  Ok(Json(appointment))
}

/// `PUT /appointments` — requires a session; participants are validated
/// against the user directory by the store.
pub async fn upsert<S>(
  State(state): State<AppState<S>>,
  viewer: Viewer,
  Json(appointment): Json<Appointment>,
) -> Result<Json<Appointment>, ApiError>
where
  S: PortalStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  viewer.required()?;
  let stored = state
    .store
    .upsert_appointment(appointment)
    .await
    .map_err(ApiError::from_store)?;
  Ok(Json(stored))
}

/// `POST /appointments/:id/cancel`
pub async fn cancel<S>(
  State(state): State<AppState<S>>,
  viewer: Viewer,
  Path(id): Path<Uuid>,
) -> Result<Json<Appointment>, ApiError>
where
  S: PortalStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  // Hide appointments the viewer cannot see, before touching them.
  state
    .store
    .get_appointment(id)
    .await
    .map_err(ApiError::from_store)?
    .filter(|a| viewer.0.as_ref().is_some_and(|v| a.visible_to(v)))
    .ok_or_else(|| ApiError::NotFound(format!("appointment {id} not found")))?;

  let cancelled = state
    .store
    .cancel_appointment(id)
    .await
    .map_err(ApiError::from_store)?;
  Ok(Json(cancelled))
}
