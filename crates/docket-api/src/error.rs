//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("not found: {0}")]
  NotFound(String),

  #[error("bad request: {0}")]
  BadRequest(String),

  #[error("unauthorized")]
  Unauthorized,

  #[error("forbidden: {0}")]
  Forbidden(String),

  #[error("conflict: {0}")]
  Conflict(String),

  #[error("unprocessable: {0}")]
  Unprocessable(String),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ApiError {
  /// Convert a backend error, surfacing wrapped domain errors with their
  /// proper status codes instead of a blanket 500.
  pub fn from_store<E>(err: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    let boxed: Box<dyn std::error::Error + Send + Sync> = Box::new(err);
    let mut current: Option<&(dyn std::error::Error + 'static)> =
      Some(&*boxed);
    while let Some(e) = current {
      if let Some(core) = e.downcast_ref::<docket_core::Error>() {
        return Self::from_core(core);
      }
      current = e.source();
    }
    Self::Store(boxed)
  }

  fn from_core(err: &docket_core::Error) -> Self {
    use docket_core::Error as E;
    match err {
      E::UserNotFound(_)
      | E::CaseNotFound(_)
      | E::AppointmentNotFound(_)
      | E::DocumentNotFound(_)
      | E::ConversationNotFound(_) => Self::NotFound(err.to_string()),
      E::InvalidCredentials => Self::Unauthorized,
      E::CannotCancel { .. } | E::CannotSign { .. } | E::SubtypeExists { .. } => {
        Self::Conflict(err.to_string())
      }
      E::ConsentRequired(_)
      | E::UnknownParticipant(_)
      | E::UnknownSubtype { .. } => Self::Unprocessable(err.to_string()),
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let (status, message) = match &self {
      ApiError::NotFound(m) => (StatusCode::NOT_FOUND, m.clone()),
      ApiError::BadRequest(m) => (StatusCode::BAD_REQUEST, m.clone()),
      ApiError::Unauthorized => {
        (StatusCode::UNAUTHORIZED, "invalid credentials".to_owned())
      }
      ApiError::Forbidden(m) => (StatusCode::FORBIDDEN, m.clone()),
      ApiError::Conflict(m) => (StatusCode::CONFLICT, m.clone()),
      ApiError::Unprocessable(m) => {
        (StatusCode::UNPROCESSABLE_ENTITY, m.clone())
      }
      ApiError::Store(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    };
    (status, Json(json!({ "error": message }))).into_response()
  }
}
