//! Trait for outbound notification integration

use async_trait::async_trait;

use crate::errors::DispatchError;

/// Delivers a result link to a recipient
#[async_trait]
pub trait NotificationDispatcher: Send + Sync {
    /// Send the result link, returning the provider's message id
    async fn send_result_link(&self, recipient: &str, link: &str) -> Result<String, DispatchError>;

    /// Name of the underlying provider, for logs and health checks
    fn provider_name(&self) -> &str;

    /// Whether the provider can currently accept messages
    async fn is_available(&self) -> bool {
        true
    }
}
