//! HS256 codec for result-link tokens

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::entities::conversion::ConversionPayload;
use crate::domain::entities::token::LinkClaims;
use crate::errors::{DomainError, DomainResult, TokenError};

use super::config::TokenCodecConfig;

/// Signs conversion payloads into opaque tokens and verifies them back.
///
/// Stateless: a token stays valid for its whole lifetime and may be
/// verified any number of times.
pub struct LinkTokenCodec {
    config: TokenCodecConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl std::fmt::Debug for LinkTokenCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LinkTokenCodec")
            .field("issuer", &self.config.issuer)
            .field("ttl_hours", &self.ttl.num_hours())
            .finish_non_exhaustive()
    }
}

impl LinkTokenCodec {
    /// Creates a new codec
    ///
    /// # Returns
    ///
    /// * `Ok(LinkTokenCodec)` - Ready to sign and verify
    /// * `Err(DomainError::Internal)` - The secret is empty
    pub fn new(config: TokenCodecConfig) -> DomainResult<Self> {
        if config.secret.is_empty() {
            return Err(DomainError::internal("token signing secret must not be empty"));
        }

        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[config.issuer.as_str()]);
        validation.validate_exp = true;
        validation.validate_aud = false;
        validation.leeway = 0;

        Ok(Self {
            config,
            encoding_key,
            decoding_key,
            validation,
            ttl: LinkClaims::default_ttl(),
        })
    }

    /// Lifetime of every token this codec issues
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Signs a payload issued now
    pub fn encode(&self, payload: &ConversionPayload) -> DomainResult<String> {
        self.encode_issued_at(payload, Utc::now())
    }

    /// Signs a payload with an explicit issuance time
    pub(crate) fn encode_issued_at(
        &self,
        payload: &ConversionPayload,
        issued_at: DateTime<Utc>,
    ) -> DomainResult<String> {
        let claims = LinkClaims::new(payload, issued_at, self.ttl, self.config.issuer.as_str());
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|e| {
            tracing::error!(
                error = %e,
                event = "token_generation_failed",
                "Failed to sign result-link token"
            );
            DomainError::Token(TokenError::TokenGenerationFailed)
        })
    }

    /// Verifies a token and returns the payload it carries
    ///
    /// # Returns
    ///
    /// * `Ok(ConversionPayload)` - Signature, issuer and expiry all check out
    /// * `Err(DomainError::Token)` - Anything else; the inner kind says why
    pub fn decode(&self, token: &str) -> DomainResult<ConversionPayload> {
        let token_data = decode::<LinkClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| DomainError::Token(Self::classify(e.kind())))?;

        Ok(token_data.claims.into())
    }

    fn classify(kind: &ErrorKind) -> TokenError {
        match kind {
            ErrorKind::ExpiredSignature => TokenError::TokenExpired,
            ErrorKind::InvalidSignature => TokenError::InvalidSignature,
            ErrorKind::InvalidIssuer | ErrorKind::MissingRequiredClaim(_) => TokenError::InvalidClaims,
            _ => TokenError::InvalidTokenFormat,
        }
    }
}
