//! Configuration for the payment link service

use crate::domain::entities::payment::{DEFAULT_PAYEE_NAME, PAYMENT_NOTE, UPI_CURRENCY};

/// Configuration for the payment link service
#[derive(Debug, Clone)]
pub struct PaymentLinkConfig {
    /// Payee name used when the request has none
    pub default_payee_name: String,
    /// Transaction note shown in the payer's app
    pub note: String,
    /// ISO currency code
    pub currency: String,
}

impl Default for PaymentLinkConfig {
    fn default() -> Self {
        Self {
            default_payee_name: DEFAULT_PAYEE_NAME.to_string(),
            note: PAYMENT_NOTE.to_string(),
            currency: UPI_CURRENCY.to_string(),
        }
    }
}
