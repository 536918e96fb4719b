//! Centralized error handling.
//!
//! Provides the store failure type and the application error taxonomy,
//! with automatic HTTP response conversion.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::domain::FieldError;

/// Failures reported by the user store.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("user with id {0} not found")]
    NotFound(i32),

    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),
}

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Malformed input
    #[error("invalid JSON")]
    MalformedJson(String),

    #[error("invalid user id")]
    InvalidId(String),

    // Validation
    #[error("validation failed")]
    Validation(Vec<FieldError>),

    // Store failures, surfaced as server errors
    #[error(transparent)]
    Store(#[from] StoreError),

    // Store failures, surfaced as client errors
    #[error(transparent)]
    StoreRejected(StoreError),

    // Internal
    #[error("{0}")]
    Internal(String),
}

/// Generic error response body
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

/// Validation error response body
#[derive(Debug, Serialize)]
struct ValidationResponse {
    errors: Vec<FieldError>,
}

impl AppError {
    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MalformedJson(_)
            | AppError::InvalidId(_)
            | AppError::Validation(_)
            | AppError::StoreRejected(_) => StatusCode::BAD_REQUEST,
            AppError::Store(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Report a store failure as a client error (used by create).
    pub fn into_client_error(self) -> Self {
        match self {
            AppError::Store(e) => AppError::StoreRejected(e),
            other => other,
        }
    }

    /// Emit the single log record for this error.
    fn log(&self) {
        match self {
            AppError::MalformedJson(detail) => {
                tracing::warn!(error = %detail, "Invalid JSON body")
            }
            AppError::InvalidId(raw) => tracing::warn!(id = %raw, "Invalid user id"),
            AppError::Validation(errors) => {
                tracing::warn!(errors = ?errors, "Validation failed")
            }
            AppError::Store(e) | AppError::StoreRejected(e) => {
                tracing::error!(error = %e, "Store operation failed")
            }
            AppError::Internal(msg) => tracing::error!(error = %msg, "Internal error"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.log();
        let status = self.status();

        match self {
            AppError::Validation(errors) => (status, Json(ValidationResponse { errors })).into_response(),
            other => (
                status,
                Json(ErrorResponse {
                    error: other.to_string(),
                }),
            )
                .into_response(),
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Store result type alias
pub type StoreResult<T> = Result<T, StoreError>;

/// Convenience constructors
impl AppError {
    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

impl From<Vec<FieldError>> for AppError {
    fn from(errors: Vec<FieldError>) -> Self {
        AppError::Validation(errors)
    }
}
