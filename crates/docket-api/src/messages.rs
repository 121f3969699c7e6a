//! Handlers for `/conversations` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/conversations` | Optional `text` (party names) |
//! | `GET`  | `/conversations/:id/messages` | Oldest first |
//! | `POST` | `/conversations/:id/messages` | Body: `{"content":"..."}` |

use axum::{
  Json,
  extract::{Path, Query, State},
  http::StatusCode,
  response::IntoResponse,
};
use serde::Deserialize;
use uuid::Uuid;

use docket_core::{
  message::{Conversation, Message, NewMessage},
  query::ConversationQuery,
  scope::{RoleScoped as _, scope},
  store::PortalStore,
};

use crate::{AppState, error::ApiError, session::Viewer};

/// `GET /conversations[?text=...]`
pub async fn list_conversations<S>(
  State(state): State<AppState<S>>,
  viewer: Viewer,
  Query(query): Query<ConversationQuery>,
) -> Result<Json<Vec<Conversation>>, ApiError>
where
  S: PortalStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let conversations = state
    .store
    .list_conversations()
    .await
    .map_err(ApiError::from_store)?;
  let scoped = scope(&conversations, viewer.0.as_ref());
  Ok(Json(query.apply(scoped).into_iter().cloned().collect()))
}

/// `GET /conversations/:id/messages`
pub async fn list_messages<S>(
  State(state): State<AppState<S>>,
  viewer: Viewer,
  Path(id): Path<Uuid>,
) -> Result<Json<Vec<Message>>, ApiError>
where
  S: PortalStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  visible_conversation(&state, &viewer, id).await?;
  let messages = state
    .store
    .list_messages(id)
    .await
    .map_err(ApiError::from_store)?;
  Ok(Json(messages))
}

#[derive(Debug, Deserialize)]
pub struct SendBody {
  pub content: String,
}

/// `POST /conversations/:id/messages` — the sender is the session identity.
pub async fn send<S>(
  State(state): State<AppState<S>>,
  viewer: Viewer,
  Path(id): Path<Uuid>,
  Json(body): Json<SendBody>,
) -> Result<impl IntoResponse, ApiError>
where
  S: PortalStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let sender = viewer.required()?.clone();
  visible_conversation(&state, &viewer, id).await?;

  if body.content.trim().is_empty() {
    return Err(ApiError::BadRequest("message content is empty".to_owned()));
  }

  let message = state
    .store
    .append_message(NewMessage {
      conversation_id: id,
      sender_name:     sender.name,
      content:         body.content,
    })
    .await
    .map_err(ApiError::from_store)?;
  Ok((StatusCode::CREATED, Json(message)))
}

async fn visible_conversation<S>(
  state: &AppState<S>,
  viewer: &Viewer,
  id: Uuid,
) -> Result<Conversation, ApiError>
where
  S: PortalStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  state
    .store
    .get_conversation(id)
    .await
    .map_err(ApiError::from_store)?
    .filter(|c| viewer.0.as_ref().is_some_and(|v| c.visible_to(v)))
    .ok_or_else(|| ApiError::NotFound(format!("conversation {id} not found")))
}
