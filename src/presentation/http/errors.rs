//! HTTP error handling and response conversion.
//!
//! Domain failures are mapped to HTTP status codes and a JSON body of the form
//! `{"error": "<message>"}`. Server-side failures are logged with their detail
//! while the client only sees a generic message.

use crate::domain::shared::errors::DomainError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;

/// Application-level errors returned from handlers.
#[derive(Debug)]
pub enum AppError {
    /// Resource not found (404).
    NotFound(String),

    /// Malformed request or failed validation (400).
    BadRequest(String),

    /// Authentication required or rejected (401).
    Unauthorized(String),

    /// Request conflicts with existing state (409).
    Conflict(String),

    /// Unclassified internal error (500).
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(msg) => write!(f, "Not found: {}", msg),
            Self::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            Self::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            Self::Conflict(msg) => write!(f, "Conflict: {}", msg),
            Self::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl AppError {
    /// Get the appropriate HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get a user-safe error message (without implementation details).
    fn user_message(&self) -> String {
        match self {
            Self::NotFound(msg) => msg.clone(),
            Self::BadRequest(msg) => msg.clone(),
            Self::Unauthorized(msg) => msg.clone(),
            Self::Conflict(msg) => msg.clone(),
            Self::Internal(_) => "Internal server error".into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.user_message();

        match status {
            StatusCode::INTERNAL_SERVER_ERROR => {
                tracing::error!("error={}", self);
            }
            StatusCode::UNAUTHORIZED => {
                tracing::debug!("error={}", self);
            }
            _ => {
                tracing::warn!("error={}", self);
            }
        }

        (status, Json(json!({ "error": message }))).into_response()
    }
}

// === Domain Error Conversion ===

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::ValidationError(msg) => AppError::BadRequest(msg),
            DomainError::InvalidAction(action) => AppError::BadRequest(format!(
                "Unsupported action '{}', expected 'like' or 'skip'",
                action
            )),
            DomainError::WeakPassword => {
                AppError::BadRequest("Password must be at least 6 characters".into())
            }
            DomainError::DuplicateEmail => AppError::Conflict("Email already registered".into()),
            DomainError::InvalidCredentials => {
                AppError::Unauthorized("Invalid email or password".into())
            }
            DomainError::Unauthorized => AppError::Unauthorized("Unauthorized".into()),
            DomainError::UnknownPlace(id) => AppError::NotFound(format!("Unknown place: {}", id)),
            DomainError::UnknownCity(id) => AppError::NotFound(format!("Unknown city: {}", id)),
            DomainError::InfrastructureError(msg) => AppError::Internal(msg),
        }
    }
}
