//! Error kinds raised by the domain services
//!
//! Messages here are for logs. The presentation layer decides what the
//! client sees.

use thiserror::Error;

/// Token-related errors
///
/// Kinds stay distinct for logging. Clients only ever see a single
/// invalid-token message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token format")]
    InvalidTokenFormat,

    #[error("Invalid signature")]
    InvalidSignature,

    #[error("Invalid claims")]
    InvalidClaims,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

impl TokenError {
    /// Short machine-friendly label used in log fields
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenError::TokenExpired => "expired",
            TokenError::InvalidTokenFormat => "malformed",
            TokenError::InvalidSignature => "bad_signature",
            TokenError::InvalidClaims => "bad_claims",
            TokenError::TokenGenerationFailed => "generation_failed",
        }
    }
}

/// Validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required field: {field}")]
    RequiredField { field: String },

    #[error("Invalid format: {field}")]
    InvalidFormat { field: String },
}

impl ValidationError {
    pub fn required(field: impl Into<String>) -> Self {
        ValidationError::RequiredField {
            field: field.into(),
        }
    }

    pub fn invalid_format(field: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
        }
    }
}

/// Failures reported by a notification dispatcher
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    #[error("Invalid recipient: {0}")]
    InvalidRecipient(String),

    #[error("Transport failure: {0}")]
    Transport(String),

    #[error("Send timed out after {seconds}s")]
    Timeout { seconds: u64 },
}
