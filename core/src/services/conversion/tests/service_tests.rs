//! Unit tests for the conversion service

use std::sync::Arc;

use chrono::{Duration, Utc};

use crate::domain::entities::conversion::ConversionPayload;
use crate::domain::entities::token::LINK_TOKEN_TTL_HOURS;
use crate::errors::{DomainError, ErrorKind, ValidationError};
use crate::services::conversion::{ConversionService, ConversionServiceConfig};
use crate::services::token::{LinkTokenCodec, TokenCodecConfig};

use super::mocks::MockDispatcher;

const CLIENT_URL: &str = "https://textconverter.example";

fn codec() -> Arc<LinkTokenCodec> {
    Arc::new(LinkTokenCodec::new(TokenCodecConfig::new("conversion-test-secret")).unwrap())
}

fn service(dispatcher: Arc<MockDispatcher>) -> ConversionService<MockDispatcher> {
    ConversionService::new(codec(), dispatcher, ConversionServiceConfig::new(CLIENT_URL))
}

fn token_from_link(link: &str) -> &str {
    link.rsplit('/').next().unwrap()
}

#[tokio::test]
async fn test_convert_success() {
    let dispatcher = Arc::new(MockDispatcher::new(false));
    let service = service(dispatcher.clone());

    let result = service.convert("hello world", "user@example.com").await.unwrap();

    assert!(result
        .payment_link
        .starts_with("https://textconverter.example/payment/"));
    assert!(result.message_id.starts_with("mock-msg-"));

    // Exactly one notification, carrying the same link
    assert_eq!(dispatcher.sent_count(), 1);
    assert_eq!(
        dispatcher.last_link("user@example.com"),
        Some(result.payment_link.clone())
    );
}

#[tokio::test]
async fn test_convert_then_verify_round_trip() {
    let dispatcher = Arc::new(MockDispatcher::new(false));
    let service = service(dispatcher);

    let result = service.convert("hello world", "user@example.com").await.unwrap();
    let payload = service.verify(token_from_link(&result.payment_link)).unwrap();

    assert_eq!(payload, ConversionPayload::new("HELLO WORLD", "user@example.com"));
}

#[tokio::test]
async fn test_convert_uppercases_unicode() {
    let dispatcher = Arc::new(MockDispatcher::new(false));
    let service = service(dispatcher);

    let result = service.convert("straße ñandú", "user@example.com").await.unwrap();
    let payload = service.verify(token_from_link(&result.payment_link)).unwrap();

    assert_eq!(payload.text, "STRASSE ÑANDÚ");
}

#[tokio::test]
async fn test_convert_keeps_surrounding_whitespace() {
    let dispatcher = Arc::new(MockDispatcher::new(false));
    let service = service(dispatcher);

    let result = service.convert("  hi  ", "user@example.com").await.unwrap();
    let payload = service.verify(token_from_link(&result.payment_link)).unwrap();

    assert_eq!(payload.text, "  HI  ");
}

#[tokio::test]
async fn test_convert_empty_text_rejected_without_side_effects() {
    let dispatcher = Arc::new(MockDispatcher::new(false));
    let service = service(dispatcher.clone());

    let result = service.convert("", "a@b.com").await;

    match result {
        Err(DomainError::ValidationErr(ValidationError::RequiredField { field })) => {
            assert_eq!(field, "text");
        }
        other => panic!("Expected validation error, got {:?}", other),
    }
    assert_eq!(dispatcher.sent_count(), 0);
}

#[tokio::test]
async fn test_convert_empty_email_rejected_without_side_effects() {
    let dispatcher = Arc::new(MockDispatcher::new(false));
    let service = service(dispatcher.clone());

    let result = service.convert("hi", "").await;

    match result {
        Err(DomainError::ValidationErr(ValidationError::RequiredField { field })) => {
            assert_eq!(field, "email");
        }
        other => panic!("Expected validation error, got {:?}", other),
    }
    assert_eq!(dispatcher.sent_count(), 0);
}

#[tokio::test]
async fn test_convert_blank_text_checked_before_email() {
    let dispatcher = Arc::new(MockDispatcher::new(false));
    let service = service(dispatcher.clone());

    let result = service.convert("   ", "   ").await;

    match result {
        Err(DomainError::ValidationErr(ValidationError::RequiredField { field })) => {
            assert_eq!(field, "text");
        }
        other => panic!("Expected validation error, got {:?}", other),
    }
    assert_eq!(dispatcher.sent_count(), 0);
}

#[tokio::test]
async fn test_convert_dispatch_failure_is_delivery_error() {
    let dispatcher = Arc::new(MockDispatcher::new(true));
    let service = service(dispatcher.clone());

    let result = service.convert("hello", "user@example.com").await;

    let err = result.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Delivery);
    assert!(err.to_string().contains("mock transport down"));
}

#[test]
fn test_verify_twice_returns_identical_payloads() {
    let codec = codec();
    let service = ConversionService::new(
        codec.clone(),
        Arc::new(MockDispatcher::new(false)),
        ConversionServiceConfig::new(CLIENT_URL),
    );
    let token = codec
        .encode(&ConversionPayload::new("HI", "user@example.com"))
        .unwrap();

    let first = service.verify(&token).unwrap();
    let second = service.verify(&token).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_verify_expired_token_is_invalid_token() {
    let codec = codec();
    let service = ConversionService::new(
        codec.clone(),
        Arc::new(MockDispatcher::new(false)),
        ConversionServiceConfig::new(CLIENT_URL),
    );
    let issued_at = Utc::now() - Duration::hours(LINK_TOKEN_TTL_HOURS + 1);
    let token = codec
        .encode_issued_at(&ConversionPayload::new("HI", "user@example.com"), issued_at)
        .unwrap();

    let err = service.verify(&token).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidToken);
}

#[test]
fn test_verify_garbage_is_invalid_token() {
    let service = service(Arc::new(MockDispatcher::new(false)));

    let err = service.verify("definitely-not-a-token").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidToken);
}

#[test]
fn test_payment_link_trims_trailing_slash() {
    let config = ConversionServiceConfig::new("http://localhost:5173/");
    assert_eq!(config.payment_link("abc"), "http://localhost:5173/payment/abc");
}

#[test]
fn test_transform_text() {
    assert_eq!(ConversionService::<MockDispatcher>::transform_text("abc Déjà"), "ABC DÉJÀ");
    assert_eq!(ConversionService::<MockDispatcher>::transform_text("123 !?"), "123 !?");
}
