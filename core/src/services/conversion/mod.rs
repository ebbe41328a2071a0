//! Conversion service module
//!
//! Turns submitted text into a signed result link and hands the link to a
//! notification dispatcher:
//! - Input validation before any side effect
//! - Text transformation
//! - Result-link issuance and verification

mod config;
mod service;
mod traits;
mod types;

#[cfg(test)]
mod tests;

pub use config::ConversionServiceConfig;
pub use service::ConversionService;
pub use traits::NotificationDispatcher;
pub use types::ConversionResult;
