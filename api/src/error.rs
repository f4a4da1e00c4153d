//! Unified error types for the marketplace API
//!
//! This module defines error types for each layer:
//! - `DomainError`: Core business logic and ledger storage errors
//! - `AppError`: Application layer errors (wraps domain errors for HTTP responses)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Domain layer errors - business logic and ledger storage
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation error: {0}")]
    Validation(String),

    /// The backing store exists but cannot be read or parsed. Fatal to the
    /// calling flow; there is no automatic recovery.
    #[error("Ledger unavailable: {0}")]
    StorageUnavailable(String),

    /// The backing store could not be written. Fatal, never retried.
    #[error("Ledger write failed: {0}")]
    WriteFailure(String),
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("Invalid request: {0}")]
    BadRequest(String),
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::Domain(DomainError::Validation(msg)) => (
                StatusCode::BAD_REQUEST,
                "Validation error",
                Some(msg.clone()),
            ),
            AppError::Domain(DomainError::StorageUnavailable(msg)) => {
                tracing::error!("Ledger unavailable: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Ledger storage error", None)
            }
            AppError::Domain(DomainError::WriteFailure(msg)) => {
                tracing::error!("Ledger write failed: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Ledger storage error", None)
            }
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, "Bad request", Some(msg.clone()))
            }
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
            details,
        });

        (status, body).into_response()
    }
}
