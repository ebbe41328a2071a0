//! Shared utilities and common types for the Text Converter server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types and loading
//! - Error response structures
//! - Utility functions (email masking, blank checks)
//! - Health check types

pub mod config;
pub mod errors;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, ClientConfig, CorsConfig, Environment, LoggingConfig, MailConfig, ServerConfig,
    TokenConfig,
};
pub use errors::{error_codes, ErrorResponse};
pub use types::{HealthResponse, HealthStatus, ServiceHealth};
pub use utils::{email, validation};
