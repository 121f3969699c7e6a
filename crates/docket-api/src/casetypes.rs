//! Handlers for `/casetypes` endpoints — the admin case-type taxonomy.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/casetypes` | The full catalog; feeds the filter dropdowns |
//! | `POST` | `/casetypes/:base/subtypes` | Admin only; body `{"name":"..."}` |

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use serde::Deserialize;

use docket_core::{
  case::CaseBaseType,
  store::PortalStore,
  taxonomy::{CaseTypeCatalog, Subtype},
};

use crate::{AppState, error::ApiError, session::Viewer};

/// `GET /casetypes`
pub async fn list<S>(
  State(state): State<AppState<S>>,
) -> Result<Json<CaseTypeCatalog>, ApiError>
where
  S: PortalStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let catalog = state
    .store
    .case_type_catalog()
    .await
    .map_err(ApiError::from_store)?;
  Ok(Json(catalog))
}

#[derive(Debug, Deserialize)]
pub struct AddSubtypeBody {
  pub name: String,
}

/// `POST /casetypes/:base/subtypes` — returns 201 with the generated id.
pub async fn add_subtype<S>(
  State(state): State<AppState<S>>,
  viewer: Viewer,
  Path(base): Path<CaseBaseType>,
  Json(body): Json<AddSubtypeBody>,
) -> Result<impl IntoResponse, ApiError>
where
  S: PortalStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  viewer.require_admin()?;
  if body.name.trim().is_empty() {
    return Err(ApiError::BadRequest("subtype name is empty".to_owned()));
  }

  let subtype: Subtype = state
    .store
    .add_case_subtype(base, body.name)
    .await
    .map_err(ApiError::from_store)?;
  tracing::info!(base = ?base, id = %subtype.id, "subtype added");
  Ok((StatusCode::CREATED, Json(subtype)))
}
