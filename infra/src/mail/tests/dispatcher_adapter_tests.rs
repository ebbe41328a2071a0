//! Unit tests for the mail dispatcher adapter

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tc_core::errors::DispatchError;
use tc_core::services::conversion::NotificationDispatcher;

use crate::mail::{MailDispatcherAdapter, MailService, MockMailService};
use crate::InfrastructureError;

/// Mail service that never answers in time
struct StalledMailService;

#[async_trait]
impl MailService for StalledMailService {
    async fn send_html(&self, _to: &str, _subject: &str, _html: &str) -> Result<String, InfrastructureError> {
        tokio::time::sleep(Duration::from_secs(3600)).await;
        Ok("never".to_string())
    }

    fn provider_name(&self) -> &str {
        "Stalled"
    }

    async fn is_available(&self) -> bool {
        tokio::time::sleep(Duration::from_secs(3600)).await;
        true
    }
}

#[tokio::test]
async fn test_adapter_sends_through_mail_service() {
    let mock = Arc::new(MockMailService::with_options(false, false));
    let adapter = MailDispatcherAdapter::new(mock.clone(), Duration::from_secs(5));

    let message_id = adapter
        .send_result_link("user@example.com", "http://localhost:5173/payment/t")
        .await
        .unwrap();

    assert!(message_id.starts_with("mock_"));
    assert_eq!(mock.get_message_count(), 1);
    assert_eq!(adapter.provider_name(), "Mock");
    assert!(adapter.is_available().await);
}

#[tokio::test]
async fn test_adapter_maps_invalid_recipient() {
    let mock = Arc::new(MockMailService::with_options(false, false));
    let adapter = MailDispatcherAdapter::new(mock, Duration::from_secs(5));

    let result = adapter.send_result_link("nobody", "http://x/payment/t").await;
    assert!(matches!(result, Err(DispatchError::InvalidRecipient(_))));
}

#[tokio::test]
async fn test_adapter_maps_transport_failure() {
    let mock = Arc::new(MockMailService::with_options(false, true));
    let adapter = MailDispatcherAdapter::new(mock, Duration::from_secs(5));

    let result = adapter.send_result_link("user@example.com", "http://x/payment/t").await;
    match result {
        Err(DispatchError::Transport(message)) => assert!(message.contains("Simulated")),
        other => panic!("Expected transport error, got {:?}", other),
    }
    assert!(!adapter.is_available().await);
}

#[tokio::test(start_paused = true)]
async fn test_adapter_times_out() {
    let adapter = MailDispatcherAdapter::new(Arc::new(StalledMailService), Duration::from_secs(30));

    let result = adapter.send_result_link("user@example.com", "http://x/payment/t").await;
    assert_eq!(result, Err(DispatchError::Timeout { seconds: 30 }));
    assert!(!adapter.is_available().await);
}
