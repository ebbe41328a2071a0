//! Mail Dispatcher Adapter
//!
//! Implements the core `NotificationDispatcher` over any `MailService`,
//! bounding each send with a timeout.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tc_core::errors::DispatchError;
use tc_core::services::conversion::NotificationDispatcher;

use crate::{mail::mail_service::MailService, InfrastructureError};

/// Adapter that implements the core NotificationDispatcher for mail
pub struct MailDispatcherAdapter {
    inner: Arc<dyn MailService>,
    timeout: Duration,
}

impl MailDispatcherAdapter {
    pub fn new(inner: Arc<dyn MailService>, timeout: Duration) -> Self {
        Self { inner, timeout }
    }

    fn to_dispatch_error(err: InfrastructureError) -> DispatchError {
        match err {
            InfrastructureError::Address(e) => DispatchError::InvalidRecipient(e.to_string()),
            InfrastructureError::Timeout { seconds } => DispatchError::Timeout { seconds },
            other => DispatchError::Transport(other.to_string()),
        }
    }
}

#[async_trait]
impl NotificationDispatcher for MailDispatcherAdapter {
    async fn send_result_link(&self, recipient: &str, link: &str) -> Result<String, DispatchError> {
        match tokio::time::timeout(self.timeout, self.inner.send_result_link(recipient, link)).await {
            Ok(result) => result.map_err(Self::to_dispatch_error),
            Err(_) => Err(DispatchError::Timeout {
                seconds: self.timeout.as_secs(),
            }),
        }
    }

    fn provider_name(&self) -> &str {
        self.inner.provider_name()
    }

    async fn is_available(&self) -> bool {
        tokio::time::timeout(self.timeout, self.inner.is_available())
            .await
            .unwrap_or(false)
    }
}
