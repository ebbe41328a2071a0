//! Configuration for the conversion service

use tc_shared::config::ClientConfig;

/// Configuration for the conversion service
#[derive(Debug, Clone)]
pub struct ConversionServiceConfig {
    /// Base URL of the web client that renders result links
    pub client_url: String,
}

impl Default for ConversionServiceConfig {
    fn default() -> Self {
        Self::from(&ClientConfig::default())
    }
}

impl From<&ClientConfig> for ConversionServiceConfig {
    fn from(client: &ClientConfig) -> Self {
        Self {
            client_url: client.base_url().to_string(),
        }
    }
}

impl ConversionServiceConfig {
    pub fn new(client_url: impl Into<String>) -> Self {
        Self {
            client_url: client_url.into(),
        }
    }

    /// Link the recipient follows to view the result and pay
    pub fn payment_link(&self, token: &str) -> String {
        format!("{}/payment/{}", self.client_url.trim_end_matches('/'), token)
    }
}
