//! Mail Service Module
//!
//! This module provides mail service implementations for delivering result
//! links. It includes an SMTP provider and a mock implementation for
//! development.
//!
//! ## Features
//!
//! - **Mail Service Trait**: Common interface for all mail providers
//! - **SMTP Support**: Production delivery through an authenticated relay
//! - **Mock Implementation**: Log output for development and tests
//! - **Dispatcher Adapter**: Bridges a mail provider to the core dispatcher trait
//! - **Security**: Email masking in logs

pub mod dispatcher_adapter;
pub mod mail_service;
pub mod mock_mail;
pub mod smtp;

// Re-export commonly used types
pub use dispatcher_adapter::MailDispatcherAdapter;
pub use mail_service::{render_result_email, MailService, RESULT_EMAIL_SUBJECT};
pub use mock_mail::{MockMailService, SentMail};
pub use smtp::SmtpMailService;

use tc_shared::config::MailConfig;

use crate::InfrastructureError;

#[cfg(test)]
mod tests;

/// Create a mail service based on configuration
///
/// Unknown providers and SMTP setup failures fall back to the mock so that
/// development setups keep working.
///
/// # Arguments
///
/// * `config` - Mail configuration containing provider settings
///
/// # Returns
///
/// A boxed mail service implementation
pub fn create_mail_service(config: &MailConfig) -> Box<dyn MailService> {
    match try_create_mail_service(config) {
        Ok(service) => service,
        Err(e) => {
            tracing::error!("Failed to initialize {} mail service: {}", config.provider, e);
            tracing::warn!("Falling back to mock mail service");
            Box::new(MockMailService::new())
        }
    }
}

/// Create a mail service, failing instead of falling back
pub fn try_create_mail_service(config: &MailConfig) -> Result<Box<dyn MailService>, InfrastructureError> {
    match config.provider.to_ascii_lowercase().as_str() {
        "mock" => Ok(Box::new(MockMailService::new())),
        "smtp" => Ok(Box::new(SmtpMailService::new(config)?)),
        other => Err(InfrastructureError::Config(format!(
            "Unknown mail provider '{}'",
            other
        ))),
    }
}
