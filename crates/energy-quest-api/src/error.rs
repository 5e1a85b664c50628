//! Energy Quest: API error types.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

/// Startup and runtime errors for the API server.
#[derive(Debug, Error)]
pub enum AppError {
    /// A server environment variable is invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// Network binding or I/O error.
    #[error("server error: {0}")]
    Server(#[from] std::io::Error),
}

/// JSON body returned for error responses.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Machine-readable error code.
    pub error: &'static str,
    /// Human-readable error message.
    pub message: String,
}

/// Request-level errors returned by handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request was well-formed JSON but semantically invalid.
    #[error("validation error: {0}")]
    Validation(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code) = match &self {
            Self::Validation(_) => (StatusCode::BAD_REQUEST, "validation_error"),
        };

        let body = ErrorBody {
            error: error_code,
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
