//! Handlers for `/documents` endpoints.
//!
//! Documents have no party names of their own, so visibility is derived
//! through the owning case and text search covers the case number.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/documents` | Optional `status`, `case_id`, `text` |
//! | `GET`  | `/documents/tabs` | Badge counts; ignores any `status` param |
//! | `GET`  | `/documents/:id` | 404 if not found or not visible |
//! | `POST` | `/documents/:id/sign` | Body: `{"consent_acknowledged":true}` |

use std::collections::HashMap;

use axum::{
  Json,
  extract::{Path, Query, State},
};
use serde::Deserialize;
use uuid::Uuid;

use docket_core::{
  case::Case,
  document::Document,
  query::DocumentQuery,
  scope::scope_documents,
  store::PortalStore,
  view::{DocumentTabCounts, document_tab_counts},
};

use crate::{AppState, error::ApiError, session::Viewer};

/// Role-scope the document set and apply `query`, resolving case numbers for
/// the text predicate.
async fn scoped_filtered<S>(
  state: &AppState<S>,
  viewer: &Viewer,
  query: &DocumentQuery,
) -> Result<Vec<Document>, ApiError>
where
  S: PortalStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let documents = state
    .store
    .list_documents()
    .await
    .map_err(ApiError::from_store)?;
  let cases = state
    .store
    .list_cases()
    .await
    .map_err(ApiError::from_store)?;

  let scoped = scope_documents(&documents, &cases, viewer.0.as_ref());
  let numbers: HashMap<Uuid, &str> = cases
    .iter()
    .map(|c: &Case| (c.id, c.case_number.as_str()))
    .collect();

  Ok(
    query
      .apply(scoped, |d| {
        numbers.get(&d.case_id).map(|n| (*n).to_owned())
      })
      .into_iter()
      .cloned()
      .collect(),
  )
}

/// `GET /documents[?status=awaiting_signature][&case_id=...][&text=...]`
pub async fn list<S>(
  State(state): State<AppState<S>>,
  viewer: Viewer,
  Query(query): Query<DocumentQuery>,
) -> Result<Json<Vec<Document>>, ApiError>
where
  S: PortalStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  Ok(Json(scoped_filtered(&state, &viewer, &query).await?))
}

/// `GET /documents/tabs[?case_id=...][&text=...]`
///
/// Counts come from the subset *before* any tab's status filter, so the
/// badges stay stable while the user switches tabs; a `status` param is
/// therefore ignored here.
pub async fn tabs<S>(
  State(state): State<AppState<S>>,
  viewer: Viewer,
  Query(query): Query<DocumentQuery>,
) -> Result<Json<DocumentTabCounts>, ApiError>
where
  S: PortalStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let query = DocumentQuery { status: None, ..query };
  let documents = scoped_filtered(&state, &viewer, &query).await?;
  Ok(Json(document_tab_counts(&documents)))
}

/// `GET /documents/:id`
pub async fn get_one<S>(
  State(state): State<AppState<S>>,
  viewer: Viewer,
  Path(id): Path<Uuid>,
) -> Result<Json<Document>, ApiError>
where
  S: PortalStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let document = visible_document(&state, &viewer, id).await?;
  Ok(Json(document))
}

#[derive(Debug, Deserialize)]
pub struct SignBody {
  #[serde(default)]
  pub consent_acknowledged: bool,
}

/// `POST /documents/:id/sign` — 422 unless consent was acknowledged, 409 if
/// the document is not awaiting signature.
pub async fn sign<S>(
  State(state): State<AppState<S>>,
  viewer: Viewer,
  Path(id): Path<Uuid>,
  Json(body): Json<SignBody>,
) -> Result<Json<Document>, ApiError>
where
  S: PortalStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  visible_document(&state, &viewer, id).await?;
  let signed = state
    .store
    .sign_document(id, body.consent_acknowledged)
    .await
    .map_err(ApiError::from_store)?;
  Ok(Json(signed))
}

async fn visible_document<S>(
  state: &AppState<S>,
  viewer: &Viewer,
  id: Uuid,
) -> Result<Document, ApiError>
where
  S: PortalStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let document = state
    .store
    .get_document(id)
    .await
    .map_err(ApiError::from_store)?
    .ok_or_else(|| ApiError::NotFound(format!("document {id} not found")))?;

  let cases = state
    .store
    .list_cases()
    .await
    .map_err(ApiError::from_store)?;
  let documents = [document];
  if scope_documents(&documents, &cases, viewer.0.as_ref()).is_empty() {
    return Err(ApiError::NotFound(format!("document {id} not found")));
  }
  let [document] = documents;
  Ok(document)
}
