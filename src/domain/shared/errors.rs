use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum DomainError {
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Invalid action: {0}")]
    InvalidAction(String),
    #[error("Email already registered")]
    DuplicateEmail,
    #[error("Password must be at least 6 characters")]
    WeakPassword,
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("Unauthorized")]
    Unauthorized,
    #[error("Unknown place: {0}")]
    UnknownPlace(String),
    #[error("Unknown city: {0}")]
    UnknownCity(String),
    #[error("Infrastructure error: {0}")]
    InfrastructureError(String),
}
