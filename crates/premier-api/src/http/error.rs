//! Application error type mapping to HTTP status codes.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use premier_types::error::ResponderError;

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// The request was well-formed JSON but not acceptable.
    Validation(String),
    /// The responder failed to produce a reply.
    Responder(ResponderError),
}

impl From<ResponderError> for AppError {
    fn from(e: ResponderError) -> Self {
        AppError::Responder(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
            }
            AppError::Responder(ResponderError::Timeout) => {
                (StatusCode::GATEWAY_TIMEOUT, "RESPONDER_TIMEOUT", "Responder timed out".to_string())
            }
            AppError::Responder(e) => {
                tracing::warn!(error = %e, "responder failed");
                (StatusCode::BAD_GATEWAY, "RESPONDER_ERROR", "Responder unavailable".to_string())
            }
        };

        let body = json!({
            "error": {
                "code": code,
                "message": message,
            }
        });

        (
            status,
            [(axum::http::header::CONTENT_TYPE, "application/json")],
            body.to_string(),
        )
            .into_response()
    }
}
