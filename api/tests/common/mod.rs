//! Shared fixtures for API tests

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use actix_web::web;
use tc_api::AppState;
use tc_core::services::conversion::{ConversionService, ConversionServiceConfig};
use tc_core::services::payment::PaymentLinkService;
use tc_core::services::token::{LinkTokenCodec, TokenCodecConfig};
use tc_infra::mail::{MailDispatcherAdapter, MockMailService};

pub const CLIENT_URL: &str = "http://localhost:5173";
pub const SECRET: &str = "api-test-secret";
pub const ISSUER: &str = "text-converter";

pub type TestState = web::Data<AppState<MailDispatcherAdapter>>;

/// Application state backed by the given mock mail service
pub fn test_state(mail: Arc<MockMailService>) -> TestState {
    let codec = Arc::new(LinkTokenCodec::new(TokenCodecConfig::new(SECRET)).unwrap());
    let dispatcher = Arc::new(MailDispatcherAdapter::new(mail, Duration::from_secs(5)));
    let conversion_service = Arc::new(ConversionService::new(
        codec,
        dispatcher,
        ConversionServiceConfig::new(CLIENT_URL),
    ));

    web::Data::new(AppState::new(
        conversion_service,
        Arc::new(PaymentLinkService::default()),
        64 * 1024,
    ))
}

pub fn quiet_mail() -> Arc<MockMailService> {
    Arc::new(MockMailService::with_options(false, false))
}

pub fn failing_mail() -> Arc<MockMailService> {
    Arc::new(MockMailService::with_options(false, true))
}

/// Token part of a result link
pub fn token_from_link(link: &str) -> String {
    let prefix = format!("{}/payment/", CLIENT_URL);
    link.strip_prefix(&prefix)
        .unwrap_or_else(|| panic!("unexpected link: {}", link))
        .to_string()
}
