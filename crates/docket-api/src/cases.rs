//! Handlers for `/cases` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/cases` | Optional `state`, `base_type`, `subtype`, `text` |
//! | `GET`  | `/cases/:id` | 404 if not found or not visible to the viewer |
//! | `PUT`  | `/cases` | Admin only; insert-or-replace by id |

use axum::{
  Json,
  extract::{Path, Query, State},
};
use uuid::Uuid;

use docket_core::{
  case::Case,
  query::CaseQuery,
  scope::{RoleScoped as _, scope},
  store::PortalStore,
};

use crate::{AppState, error::ApiError, session::Viewer};

/// `GET /cases[?state=open][&base_type=judicial][&subtype=...][&text=...]`
pub async fn list<S>(
  State(state): State<AppState<S>>,
  viewer: Viewer,
  Query(query): Query<CaseQuery>,
) -> Result<Json<Vec<Case>>, ApiError>
where
  S: PortalStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let cases = state
    .store
    .list_cases()
    .await
    .map_err(ApiError::from_store)?;
  let scoped = scope(&cases, viewer.0.as_ref());
  Ok(Json(query.apply(scoped).into_iter().cloned().collect()))
}

/// `GET /cases/:id`
pub async fn get_one<S>(
  State(state): State<AppState<S>>,
  viewer: Viewer,
  Path(id): Path<Uuid>,
) -> Result<Json<Case>, ApiError>
where
  S: PortalStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let case = state
    .store
    .get_case(id)
    .await
    .map_err(ApiError::from_store)?
    .filter(|c| viewer.0.as_ref().is_some_and(|v| c.visible_to(v)))
    .ok_or_else(|| ApiError::NotFound(format!("case {id} not found")))?;
  Ok(Json(case))
}

/// `PUT /cases` — admin edit surface; body is the full record.
pub async fn upsert<S>(
  State(state): State<AppState<S>>,
  viewer: Viewer,
  Json(case): Json<Case>,
) -> Result<Json<Case>, ApiError>
where
  S: PortalStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  viewer.require_admin()?;
  let stored = state
    .store
    .upsert_case(case)
    .await
    .map_err(ApiError::from_store)?;
  Ok(Json(stored))
}
