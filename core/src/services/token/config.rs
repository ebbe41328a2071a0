//! Configuration for the token codec

use tc_shared::config::TokenConfig;

use crate::domain::entities::token::DEFAULT_TOKEN_ISSUER;

/// Configuration for the token codec
#[derive(Debug, Clone)]
pub struct TokenCodecConfig {
    /// HMAC signing secret
    pub secret: String,
    /// Issuer claim written into and required from every token
    pub issuer: String,
}

impl TokenCodecConfig {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            issuer: DEFAULT_TOKEN_ISSUER.to_string(),
        }
    }
}

impl From<&TokenConfig> for TokenCodecConfig {
    fn from(config: &TokenConfig) -> Self {
        Self {
            secret: config.secret.clone(),
            issuer: config.issuer.clone(),
        }
    }
}
