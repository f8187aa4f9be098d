//! `GET /api/health` - liveness report.

use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use crate::state::AppState;

/// Body returned by the health endpoint.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

impl HealthResponse {
    /// The fixed healthy report.
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            message: "Conversational AI Platform is running".to_string(),
        }
    }
}

/// Assemble the health router.
pub fn router() -> Router<AppState> {
    Router::new().route("/api/health", get(health))
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
