//! Application error type and its HTTP mapping.
//!
//! Every error is terminal for the request: it is reported synchronously to
//! the caller with a plain-text body and never retried.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// The identifier has no registered entry.
    #[error("ID not found")]
    NotFound { id: String },

    /// The update body could not be decoded into a `{real, bot}` pair.
    #[error("Invalid request payload")]
    MalformedPayload { reason: String },

    /// A stored destination cannot be sent as a `Location` header value.
    #[error("Stored redirect target is not a valid header value")]
    InvalidTarget { id: String },
}

impl AppError {
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    pub fn malformed_payload(reason: impl ToString) -> Self {
        Self::MalformedPayload {
            reason: reason.to_string(),
        }
    }

    pub fn invalid_target(id: impl Into<String>) -> Self {
        Self::InvalidTarget { id: id.into() }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::MalformedPayload { .. } => StatusCode::BAD_REQUEST,
            AppError::InvalidTarget { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::NotFound { id } => tracing::debug!(%id, "Unknown identifier"),
            AppError::MalformedPayload { reason } => {
                tracing::debug!(%reason, "Rejected update payload")
            }
            AppError::InvalidTarget { id } => {
                tracing::error!(%id, "Stored redirect target cannot be used as Location")
            }
        }

        (self.status_code(), self.to_string()).into_response()
    }
}
