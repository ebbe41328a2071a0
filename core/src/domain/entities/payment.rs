//! Payment request types. Nothing here talks to a payment network.

use serde::{Deserialize, Serialize};

/// Payee name used when the request omits one
pub const DEFAULT_PAYEE_NAME: &str = "Text Converter";

/// Transaction note attached to every payment link
pub const PAYMENT_NOTE: &str = "Payment for Text Conversion";

/// Currency code for UPI links
pub const UPI_CURRENCY: &str = "INR";

/// Input for building a UPI deep link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentLinkRequest {
    /// Amount in whole rupees
    pub amount: Option<u64>,

    /// UPI virtual payment address, e.g. `name@bank`
    pub payee_id: String,

    /// Display name of the payee
    pub payee_name: Option<String>,
}

impl PaymentLinkRequest {
    pub fn new(amount: Option<u64>, payee_id: impl Into<String>, payee_name: Option<String>) -> Self {
        Self {
            amount,
            payee_id: payee_id.into(),
            payee_name,
        }
    }
}

/// Client-reported payment completion
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentAcknowledgement {
    pub amount: Option<u64>,
    pub email: Option<String>,
}
