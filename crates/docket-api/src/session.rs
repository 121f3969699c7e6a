//! The simulated session layer: login/logout endpoints, the in-memory token
//! registry, and the `Viewer` extractor handlers use to role-scope records.
//!
//! Sessions live for the lifetime of the process, like every other piece of
//! state in the prototype. There are no passwords — login resolves an email
//! against the user directory.

use std::collections::HashMap;

use axum::{
  Json,
  extract::{FromRequestParts, State},
  http::{HeaderMap, StatusCode, header, request::Parts},
  response::IntoResponse,
};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use docket_core::{identity::Identity, store::PortalStore};

use crate::{AppState, error::ApiError};

// ─── Registry ────────────────────────────────────────────────────────────────

/// Token → identity map for the currently open sessions.
#[derive(Default)]
pub struct SessionRegistry {
  sessions: RwLock<HashMap<Uuid, Identity>>,
}

impl SessionRegistry {
  pub fn new() -> Self {
    Self::default()
  }

  /// Open a session and return its bearer token.
  pub fn open(&self, identity: Identity) -> Uuid {
    let token = Uuid::new_v4();
    self.sessions.write().insert(token, identity);
    token
  }

  /// Close a session. Returns the identity if the token was live.
  pub fn close(&self, token: Uuid) -> Option<Identity> {
    self.sessions.write().remove(&token)
  }

  pub fn viewer(&self, token: Uuid) -> Option<Identity> {
    self.sessions.read().get(&token).cloned()
  }
}

// ─── Extractor ───────────────────────────────────────────────────────────────

/// The viewer behind a request, resolved from `Authorization: Bearer <token>`.
///
/// A missing, malformed, or unknown token yields `Viewer(None)` rather than a
/// rejection: list endpoints fail closed to the empty set, and only the
/// endpoints that genuinely require a session reject the request themselves.
pub struct Viewer(pub Option<Identity>);

/// Parse the bearer token and look it up. Shared with the logout handler.
pub fn resolve_viewer(
  headers: &HeaderMap,
  sessions: &SessionRegistry,
) -> Option<Identity> {
  bearer_token(headers).and_then(|t| sessions.viewer(t))
}

fn bearer_token(headers: &HeaderMap) -> Option<Uuid> {
  let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
  let token = value.strip_prefix("Bearer ")?;
  Uuid::parse_str(token.trim()).ok()
}

impl<S> FromRequestParts<AppState<S>> for Viewer
where
  S: PortalStore + Clone + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  type Rejection = std::convert::Infallible;

  async fn from_request_parts(
    parts: &mut Parts,
    state: &AppState<S>,
  ) -> Result<Self, Self::Rejection> {
    Ok(Self(resolve_viewer(&parts.headers, &state.sessions)))
  }
}

impl Viewer {
  /// The session identity, or 401 if there is none.
  pub fn required(&self) -> Result<&Identity, ApiError> {
    self.0.as_ref().ok_or(ApiError::Unauthorized)
  }

  /// The session identity if it carries a manager/admin role; 401 without a
  /// session, 403 for any other role.
  pub fn require_admin(&self) -> Result<&Identity, ApiError> {
    let identity = self.required()?;
    if !identity.role.sees_all() {
      return Err(ApiError::Forbidden(
        "administrator role required".to_owned(),
      ));
    }
    Ok(identity)
  }
}

// ─── Handlers ────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct LoginBody {
  pub email: String,
}

#[derive(Debug, Serialize)]
pub struct SessionResponse {
  pub token:    Uuid,
  pub identity: Identity,
}

/// `POST /session` — body: `{"email":"user@example.com"}`.
///
/// Unknown emails and deactivated accounts both answer 401 with the fixed
/// invalid-credentials message.
pub async fn login<S>(
  State(state): State<AppState<S>>,
  Json(body): Json<LoginBody>,
) -> Result<impl IntoResponse, ApiError>
where
  S: PortalStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let identity = state
    .store
    .authenticate(&body.email)
    .await
    .map_err(ApiError::from_store)?;
  let token = state.sessions.open(identity.clone());
  tracing::info!(user = %identity.name, role = ?identity.role, "session opened");
  Ok((StatusCode::CREATED, Json(SessionResponse { token, identity })))
}

/// `DELETE /session` — closes the bearer session. Idempotent: an absent or
/// already-closed token still answers 204.
pub async fn logout<S>(
  State(state): State<AppState<S>>,
  headers: HeaderMap,
) -> StatusCode
where
  S: PortalStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  if let Some(token) = bearer_token(&headers)
    && let Some(identity) = state.sessions.close(token)
  {
    tracing::info!(user = %identity.name, "session closed");
  }
  StatusCode::NO_CONTENT
}
