//! # API Error Types
//!
//! Structured error type implementing `axum::response::IntoResponse`.
//! Every client error is returned as `{"error": "<message>"}`.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Message returned when the chat body has no `message` field.
pub const MISSING_MESSAGE: &str = "Campo \"message\" e obrigatorio";

/// Message returned when `message` is not a non-empty string.
pub const INVALID_MESSAGE: &str = "Campo \"message\" deve ser uma string nao vazia";

/// JSON error response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Application-level error type that implements [`IntoResponse`] for Axum.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ApiError {
    /// Request body is missing a field or has an invalid value (400).
    #[error("{0}")]
    BadRequest(String),

    /// Request body exceeds the configured limit (413).
    #[error("Corpo da requisicao excede o limite permitido")]
    PayloadTooLarge,
}

impl ApiError {
    /// The request carried no usable `message` field.
    pub fn missing_message() -> Self {
        Self::BadRequest(MISSING_MESSAGE.to_string())
    }

    /// The `message` field is empty or not a string.
    pub fn invalid_message() -> Self {
        Self::BadRequest(INVALID_MESSAGE.to_string())
    }

    fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::debug!(error = %self, status = status.as_u16(), "rejecting request");

        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
