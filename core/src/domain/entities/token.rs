//! Claims for signed result-link tokens.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::conversion::ConversionPayload;

/// Result links expire this many hours after issuance
pub const LINK_TOKEN_TTL_HOURS: i64 = 24;

/// Issuer claim used when none is configured
pub const DEFAULT_TOKEN_ISSUER: &str = "text-converter";

/// Claims structure for the result-link JWT payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkClaims {
    /// Converted text
    pub text: String,

    /// Recipient email
    pub email: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Issuer
    pub iss: String,
}

impl LinkClaims {
    /// Creates claims for a payload issued at `issued_at`
    pub fn new(
        payload: &ConversionPayload,
        issued_at: DateTime<Utc>,
        ttl: Duration,
        issuer: impl Into<String>,
    ) -> Self {
        Self {
            text: payload.text.clone(),
            email: payload.email.clone(),
            iat: issued_at.timestamp(),
            exp: (issued_at + ttl).timestamp(),
            iss: issuer.into(),
        }
    }

    /// Default time-to-live for result links
    pub fn default_ttl() -> Duration {
        Duration::hours(LINK_TOKEN_TTL_HOURS)
    }
}

impl From<LinkClaims> for ConversionPayload {
    fn from(claims: LinkClaims) -> Self {
        ConversionPayload {
            text: claims.text,
            email: claims.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claims_expire_after_ttl() {
        let payload = ConversionPayload::new("HELLO", "user@example.com");
        let issued_at = Utc::now();
        let claims = LinkClaims::new(&payload, issued_at, LinkClaims::default_ttl(), DEFAULT_TOKEN_ISSUER);

        assert_eq!(claims.exp - claims.iat, LINK_TOKEN_TTL_HOURS * 3600);
        assert_eq!(claims.iss, DEFAULT_TOKEN_ISSUER);
        assert!(claims.exp > Utc::now().timestamp());
    }

    #[test]
    fn test_claims_in_the_past_are_expired() {
        let payload = ConversionPayload::new("HELLO", "user@example.com");
        let issued_at = Utc::now() - Duration::hours(LINK_TOKEN_TTL_HOURS + 1);
        let claims = LinkClaims::new(&payload, issued_at, LinkClaims::default_ttl(), DEFAULT_TOKEN_ISSUER);

        assert!(claims.exp < Utc::now().timestamp());
    }

    #[test]
    fn test_claims_into_payload() {
        let payload = ConversionPayload::new("ÉTÉ", "user@example.com");
        let claims = LinkClaims::new(&payload, Utc::now(), LinkClaims::default_ttl(), "issuer");

        assert_eq!(ConversionPayload::from(claims), payload);
    }
}
