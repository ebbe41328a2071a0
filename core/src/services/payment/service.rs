//! Main payment link service implementation

use tc_shared::utils::email::mask_email;
use tc_shared::utils::validation::validators;

use crate::domain::entities::payment::{PaymentAcknowledgement, PaymentLinkRequest};
use crate::errors::{DomainResult, ValidationError};

use super::config::PaymentLinkConfig;

/// Acknowledgement returned for every reported payment
pub const PAYMENT_RECORDED_MESSAGE: &str = "Payment record created";

/// Builds UPI payment URIs
#[derive(Debug, Clone, Default)]
pub struct PaymentLinkService {
    config: PaymentLinkConfig,
}

impl PaymentLinkService {
    pub fn new(config: PaymentLinkConfig) -> Self {
        Self { config }
    }

    /// Build a `upi://pay` deep link
    ///
    /// The payee id goes in verbatim; the name and note are percent-encoded.
    /// A missing amount is written as `0`.
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The deep link
    /// * `Err(DomainError::ValidationErr)` - The payee id is blank, or holds
    ///   whitespace or URI query delimiters
    pub fn build_upi_link(&self, request: &PaymentLinkRequest) -> DomainResult<String> {
        if !validators::not_blank(&request.payee_id) {
            return Err(ValidationError::required("upiId").into());
        }
        if !is_plain_payee_id(&request.payee_id) {
            return Err(ValidationError::invalid_format("upiId").into());
        }

        let payee_name = request
            .payee_name
            .as_deref()
            .filter(|name| validators::not_blank(name))
            .unwrap_or(self.config.default_payee_name.as_str());
        let amount = request.amount.unwrap_or(0);

        let link = format!(
            "upi://pay?pa={}&pn={}&am={}&cu={}&tn={}",
            request.payee_id,
            urlencoding::encode(payee_name),
            amount,
            self.config.currency,
            urlencoding::encode(&self.config.note),
        );

        tracing::debug!(amount = amount, event = "upi_link_built", "UPI payment link built");

        Ok(link)
    }

    /// Record a client-reported payment. Only logs; nothing is verified or stored.
    pub fn acknowledge_payment(&self, ack: &PaymentAcknowledgement) -> String {
        tracing::info!(
            amount = ?ack.amount,
            email = %ack.email.as_deref().map(mask_email).unwrap_or_default(),
            event = "payment_reported",
            "Payment reported by client"
        );
        PAYMENT_RECORDED_MESSAGE.to_string()
    }
}

/// The payee id is not encoded, so it must not be able to add query parameters
fn is_plain_payee_id(payee_id: &str) -> bool {
    !payee_id
        .chars()
        .any(|c| c.is_whitespace() || matches!(c, '&' | '=' | '?' | '#'))
}
