//! Domain-level errors.
//!
//! These errors represent rule violations detected by the directories.
//! They are independent of infrastructure concerns (HTTP, storage).

use thiserror::Error;

/// Domain-specific errors for directory operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Malformed or missing required input
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Uniqueness violation on insert
    #[error("{0} already exists")]
    Conflict(String),

    /// One or more field rules failed; carries every message
    #[error("Validation failed:\n{}", .0.join("\n"))]
    ValidationFailed(Vec<String>),

    /// Entity not found
    #[error("Not found: {0}")]
    NotFound(String),
}

impl DomainError {
    /// Create an invalid argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        DomainError::InvalidArgument(msg.into())
    }

    /// Create a conflict error
    pub fn conflict(entity: impl Into<String>) -> Self {
        DomainError::Conflict(entity.into())
    }

    /// Create a validation error from the collected rule messages
    pub fn validation_failed(messages: Vec<String>) -> Self {
        DomainError::ValidationFailed(messages)
    }

    /// Create a not found error
    pub fn not_found(entity: impl Into<String>) -> Self {
        DomainError::NotFound(entity.into())
    }

    /// Newline-joined rule messages, if this is a validation failure
    pub fn validation_messages(&self) -> Option<String> {
        match self {
            DomainError::ValidationFailed(messages) => Some(messages.join("\n")),
            _ => None,
        }
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
