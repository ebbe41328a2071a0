//! Main conversion service implementation

use std::sync::Arc;

use tc_shared::utils::email::mask_email;
use tc_shared::utils::validation::validators;

use crate::domain::entities::conversion::ConversionPayload;
use crate::errors::{DomainError, DomainResult, ValidationError};
use crate::services::token::LinkTokenCodec;

use super::config::ConversionServiceConfig;
use super::traits::NotificationDispatcher;
use super::types::ConversionResult;

/// Conversion service for issuing and verifying result links
pub struct ConversionService<N: NotificationDispatcher> {
    /// Signs and verifies result tokens
    codec: Arc<LinkTokenCodec>,
    /// Delivers result links
    dispatcher: Arc<N>,
    /// Service configuration
    config: ConversionServiceConfig,
}

impl<N: NotificationDispatcher> ConversionService<N> {
    /// Create a new conversion service
    ///
    /// # Arguments
    ///
    /// * `codec` - Token codec holding the signing secret
    /// * `dispatcher` - Notification dispatcher implementation
    /// * `config` - Service configuration
    pub fn new(
        codec: Arc<LinkTokenCodec>,
        dispatcher: Arc<N>,
        config: ConversionServiceConfig,
    ) -> Self {
        Self {
            codec,
            dispatcher,
            config,
        }
    }

    /// Convert text and email the result link
    ///
    /// This method:
    /// 1. Rejects blank text or email before doing anything else
    /// 2. Uppercases the text
    /// 3. Signs a token over the converted text and the email
    /// 4. Sends exactly one notification carrying the link
    ///
    /// # Returns
    ///
    /// * `Ok(ConversionResult)` - The link that was sent
    /// * `Err(DomainError::ValidationErr)` - Text or email missing
    /// * `Err(DomainError::Delivery)` - The notification could not be sent
    pub async fn convert(&self, text: &str, email: &str) -> DomainResult<ConversionResult> {
        if !validators::not_blank(text) {
            return Err(ValidationError::required("text").into());
        }
        if !validators::not_blank(email) {
            return Err(ValidationError::required("email").into());
        }

        let payload = ConversionPayload::new(Self::transform_text(text), email);
        let token = self.codec.encode(&payload)?;
        let payment_link = self.config.payment_link(&token);

        let message_id = self
            .dispatcher
            .send_result_link(email, &payment_link)
            .await
            .map_err(|e| {
                tracing::error!(
                    email = %mask_email(email),
                    provider = self.dispatcher.provider_name(),
                    error = %e,
                    event = "result_link_delivery_failed",
                    "Failed to deliver result link"
                );
                DomainError::from(e)
            })?;

        tracing::info!(
            email = %mask_email(email),
            provider = self.dispatcher.provider_name(),
            message_id = %message_id,
            text_length = payload.text.chars().count(),
            event = "result_link_sent",
            "Result link sent"
        );

        Ok(ConversionResult {
            payment_link,
            message_id,
        })
    }

    /// Verify a result token and return its payload
    ///
    /// Every failure comes back as `DomainError::Token`. Verification has no
    /// side effects and may be repeated.
    pub fn verify(&self, token: &str) -> DomainResult<ConversionPayload> {
        self.codec.decode(token).map_err(|e| match e {
            DomainError::Token(kind) => {
                tracing::warn!(
                    reason = kind.as_str(),
                    event = "token_verification_failed",
                    "Result token rejected"
                );
                DomainError::Token(kind)
            }
            other => other,
        })
    }

    /// Uppercase using Unicode case mapping, independent of locale
    pub fn transform_text(text: &str) -> String {
        text.to_uppercase()
    }

    pub fn provider_name(&self) -> &str {
        self.dispatcher.provider_name()
    }

    /// Whether result links can currently be delivered
    pub async fn is_dispatcher_available(&self) -> bool {
        self.dispatcher.is_available().await
    }
}
