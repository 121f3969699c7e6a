//! Handlers for `/users` endpoints — the admin user directory.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/users` | Optional `role`, `active`, `text`; non-admins see only themselves |
//! | `POST` | `/users/:id/toggle-active` | Admin only; soft (de)activation |

use axum::{
  Json,
  extract::{Path, Query, State},
};
use uuid::Uuid;

use docket_core::{
  identity::Identity, query::UserQuery, scope::scope, store::PortalStore,
};

use crate::{AppState, error::ApiError, session::Viewer};

/// `GET /users[?role=attorney][&active=true][&text=...]`
pub async fn list<S>(
  State(state): State<AppState<S>>,
  viewer: Viewer,
  Query(query): Query<UserQuery>,
) -> Result<Json<Vec<Identity>>, ApiError>
where
  S: PortalStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let users = state
    .store
    .list_users()
    .await
    .map_err(ApiError::from_store)?;
  let scoped = scope(&users, viewer.0.as_ref());
  Ok(Json(query.apply(scoped).into_iter().cloned().collect()))
}

/// `POST /users/:id/toggle-active`
pub async fn toggle_active<S>(
  State(state): State<AppState<S>>,
  viewer: Viewer,
  Path(id): Path<Uuid>,
) -> Result<Json<Identity>, ApiError>
where
  S: PortalStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  viewer.require_admin()?;
  let user = state
    .store
    .toggle_user_active(id)
    .await
    .map_err(ApiError::from_store)?;
  tracing::info!(user = %user.name, active = user.active, "user toggled");
  Ok(Json(user))
}
