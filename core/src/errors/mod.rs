//! Domain-specific error types and error handling.

mod types;


// Re-export all error types
pub use types::{DispatchError, TokenError, ValidationError};

use thiserror::Error;

/// Core domain errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Delivery failed: {message}")]
    Delivery { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    ValidationErr(#[from] ValidationError),
}

/// Coarse classification used to pick the HTTP status and log level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    InvalidToken,
    Delivery,
    Internal,
}

impl DomainError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DomainError::ValidationErr(_) => ErrorKind::Validation,
            // A token that cannot be minted is our fault, not the caller's
            DomainError::Token(TokenError::TokenGenerationFailed) => ErrorKind::Internal,
            DomainError::Token(_) => ErrorKind::InvalidToken,
            DomainError::Delivery { .. } => ErrorKind::Delivery,
            DomainError::Internal { .. } => ErrorKind::Internal,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        DomainError::Internal {
            message: message.into(),
        }
    }
}

impl From<DispatchError> for DomainError {
    fn from(err: DispatchError) -> Self {
        DomainError::Delivery {
            message: err.to_string(),
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
