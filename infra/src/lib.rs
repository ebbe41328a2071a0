//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the Text Converter
//! backend. It provides concrete implementations for external services.
//!
//! ## Architecture
//!
//! The infrastructure layer contains:
//! - **Mail**: Outbound mail transports (SMTP via `lettre`, mock) and the
//!   adapter that plugs them into the core notification dispatcher

/// Mail module - outbound mail transports
pub mod mail;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Recipient or sender address could not be parsed
    #[error("Invalid address: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// Message could not be assembled
    #[error("Message build error: {0}")]
    Message(#[from] lettre::error::Error),

    /// SMTP transport error
    #[error("SMTP error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Mail service error
    #[error("Mail service error: {0}")]
    Mail(String),

    /// Send did not complete in time
    #[error("Mail send timed out after {seconds}s")]
    Timeout { seconds: u64 },
}
