//! JSON REST API for the Docket portal.
//!
//! Exposes an axum [`Router`] backed by any
//! [`docket_core::store::PortalStore`]. Every list endpoint role-scopes its
//! records through the viewer's session before applying the query-parameter
//! predicates; an absent or invalid session sees empty sets, never a public
//! fallback. TLS and transport concerns are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", docket_api::api_router(state.clone()))
//! ```

pub mod appointments;
pub mod cases;
pub mod casetypes;
pub mod dashboard;
pub mod documents;
pub mod error;
pub mod messages;
pub mod session;
pub mod users;

use std::sync::Arc;

use axum::{
  Router,
  routing::{get, post, put},
};
use docket_core::store::PortalStore;

pub use error::ApiError;
pub use session::SessionRegistry;


/// Shared state threaded through all handlers.
#[derive(Clone)]
pub struct AppState<S> {
  pub store:    Arc<S>,
  pub sessions: Arc<SessionRegistry>,
}

impl<S> AppState<S> {
  pub fn new(store: Arc<S>) -> Self {
    Self { store, sessions: Arc::new(SessionRegistry::new()) }
  }
}

/// Build a fully-materialised API router for `state`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(state: AppState<S>) -> Router<()>
where
  S: PortalStore + Clone + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  Router::new()
    // Session
    .route(
      "/session",
      post(session::login::<S>).delete(session::logout::<S>),
    )
    // Dashboard
    .route("/dashboard", get(dashboard::handler::<S>))
    // Cases
    .route("/cases", get(cases::list::<S>).put(cases::upsert::<S>))
    .route("/cases/{id}", get(cases::get_one::<S>))
    // Appointments
    .route(
      "/appointments",
      get(appointments::list::<S>).put(appointments::upsert::<S>),
    )
    .route("/appointments/{id}", get(appointments::get_one::<S>))
    .route("/appointments/{id}/cancel", post(appointments::cancel::<S>))
    // Documents
    .route("/documents", get(documents::list::<S>))
    .route("/documents/tabs", get(documents::tabs::<S>))
    .route("/documents/{id}", get(documents::get_one::<S>))
    .route("/documents/{id}/sign", post(documents::sign::<S>))
    // Conversations
    .route("/conversations", get(messages::list_conversations::<S>))
    .route(
      "/conversations/{id}/messages",
      get(messages::list_messages::<S>).post(messages::send::<S>),
    )
    // Admin: user directory
    .route("/users", get(users::list::<S>))
    .route("/users/{id}/toggle-active", post(users::toggle_active::<S>))
    // Admin: case-type taxonomy
    .route("/casetypes", get(casetypes::list::<S>))
    .route(
      "/casetypes/{base}/subtypes",
      post(casetypes::add_subtype::<S>),
    )
    .with_state(state)
}
