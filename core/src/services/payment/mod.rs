//! Payment link service module
//!
//! Builds UPI deep links and acknowledges client-reported payments. Nothing
//! here contacts a payment network.

mod config;
mod service;


pub use config::PaymentLinkConfig;
pub use service::{PaymentLinkService, PAYMENT_RECORDED_MESSAGE};
