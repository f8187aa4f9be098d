//! `POST /api/chat` - process one user message.
//!
//! The body must be a JSON object whose `message` field is a non-empty
//! string. The reply echoes the message together with its sentiment label.

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ApiError;
use crate::state::AppState;

/// Body returned for a processed message.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatResponse {
    pub response: String,
}

/// Assemble the chat router.
pub fn router() -> Router<AppState> {
    Router::new().route("/api/chat", post(chat))
}

async fn chat(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ChatResponse>, ApiError> {
    // Unparseable or non-JSON bodies count as a missing message.
    let Json(body) = body.map_err(|rejection| {
        tracing::debug!(%rejection, "chat body rejected");
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::PayloadTooLarge
        } else {
            ApiError::missing_message()
        }
    })?;

    let message = extract_message(&body)?;
    let response = state.processor.process_message(Some(message));
    tracing::info!(chars = message.chars().count(), "chat message processed");

    Ok(Json(ChatResponse { response }))
}

/// Pulls the `message` field out of a chat request body.
///
/// A body that is not an object, is an empty object, or lacks the key is a
/// missing message. A present value that is not a non-empty string is an
/// invalid message.
pub fn extract_message(body: &Value) -> Result<&str, ApiError> {
    let object = body
        .as_object()
        .filter(|object| !object.is_empty())
        .ok_or_else(ApiError::missing_message)?;

    match object.get("message") {
        None => Err(ApiError::missing_message()),
        Some(Value::String(message)) if !message.is_empty() => Ok(message.as_str()),
        Some(_) => Err(ApiError::invalid_message()),
    }
}
