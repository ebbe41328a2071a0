//! # Text Converter Core
//!
//! Core business logic and domain layer for the Text Converter backend.
//! This crate contains domain entities, business services, the notification
//! dispatcher interface, and error types.

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{
    ConversionPayload, LinkClaims, PaymentAcknowledgement, PaymentLinkRequest,
    LINK_TOKEN_TTL_HOURS,
};
pub use errors::{DispatchError, DomainError, DomainResult, ErrorKind, TokenError, ValidationError};
pub use services::{
    ConversionResult, ConversionService, ConversionServiceConfig, LinkTokenCodec,
    NotificationDispatcher, PaymentLinkConfig, PaymentLinkService, TokenCodecConfig,
    PAYMENT_RECORDED_MESSAGE,
};
