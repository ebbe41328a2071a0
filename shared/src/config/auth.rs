//! Signing configuration for result-link tokens

use serde::{Deserialize, Serialize};

/// Development-only fallback secret. Rejected in production.
pub const DEFAULT_TOKEN_SECRET: &str = "development-secret-please-change-in-production";

/// Token signing configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TokenConfig {
    /// Secret key for HMAC signing of result links
    pub secret: String,

    /// Issuer claim embedded in every token
    #[serde(default = "default_issuer")]
    pub issuer: String,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            secret: String::from(DEFAULT_TOKEN_SECRET),
            issuer: default_issuer(),
        }
    }
}

impl TokenConfig {
    /// Create a new token configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Check if using default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == DEFAULT_TOKEN_SECRET
    }
}

fn default_issuer() -> String {
    String::from("text-converter")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_config_default() {
        let config = TokenConfig::default();
        assert_eq!(config.issuer, "text-converter");
        assert!(config.is_using_default_secret());
    }

    #[test]
    fn test_token_config_new() {
        let config = TokenConfig::new("my-secret");
        assert_eq!(config.secret, "my-secret");
        assert!(!config.is_using_default_secret());
    }
}
