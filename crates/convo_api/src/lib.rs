//! # convo-api - HTTP Surface of the Conversational Platform
//!
//! | Route           | Method | Module              |
//! |-----------------|--------|---------------------|
//! | `/api/chat`     | POST   | [`routes::chat`]    |
//! | `/api/health`   | GET    | [`routes::health`]  |
//!
//! Requests pass through `TraceLayer` and a 64 KiB body limit before
//! reaching a handler. Handlers share one immutable [`state::AppState`].

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Maximum accepted request body size.
pub const BODY_LIMIT_BYTES: usize = 64 * 1024;

/// Assemble the application router with all routes and middleware.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(routes::chat::router())
        .merge(routes::health::router())
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
