//! Unit tests for mail service creation

use tc_shared::config::MailConfig;

use crate::mail::{create_mail_service, try_create_mail_service};
use crate::InfrastructureError;

#[test]
fn test_create_mock_service() {
    let config = MailConfig::default();

    let service = create_mail_service(&config);
    assert_eq!(service.provider_name(), "Mock");
}

#[test]
fn test_create_unknown_provider_fallback() {
    let config = MailConfig {
        provider: "carrier-pigeon".to_string(),
        ..Default::default()
    };

    let service = create_mail_service(&config);
    assert_eq!(service.provider_name(), "Mock");

    assert!(matches!(
        try_create_mail_service(&config),
        Err(InfrastructureError::Config(_))
    ));
}

#[test]
fn test_smtp_without_credentials_falls_back() {
    let config = MailConfig {
        provider: "smtp".to_string(),
        ..Default::default()
    };

    assert!(matches!(
        try_create_mail_service(&config),
        Err(InfrastructureError::Config(_))
    ));
    assert_eq!(create_mail_service(&config).provider_name(), "Mock");
}

#[tokio::test]
async fn test_create_smtp_service_with_credentials() {
    let config = MailConfig {
        provider: "SMTP".to_string(),
        username: "sender@example.com".to_string(),
        password: "app-password".to_string(),
        smtp_port: Some(587),
        ..Default::default()
    };

    // Building the transport does not connect
    let service = try_create_mail_service(&config).unwrap();
    assert_eq!(service.provider_name(), "SMTP");
}

#[test]
fn test_smtp_rejects_invalid_sender() {
    let config = MailConfig {
        provider: "smtp".to_string(),
        username: "not an address".to_string(),
        password: "app-password".to_string(),
        ..Default::default()
    };

    assert!(matches!(
        try_create_mail_service(&config),
        Err(InfrastructureError::Address(_))
    ));
}
