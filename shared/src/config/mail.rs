//! Outbound mail configuration

use serde::{Deserialize, Serialize};

/// Mail transport configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MailConfig {
    /// Mail provider ("smtp", "mock")
    pub provider: String,

    /// SMTP relay host
    #[serde(default = "default_smtp_host")]
    pub smtp_host: String,

    /// SMTP port (implicit TLS relay port when unset)
    #[serde(default)]
    pub smtp_port: Option<u16>,

    /// SMTP username, also used as the sender address
    #[serde(default)]
    pub username: String,

    /// SMTP password or app password
    #[serde(default)]
    pub password: String,

    /// Display name of the sender
    #[serde(default = "default_from_name")]
    pub from_name: String,

    /// Upper bound on a single send, in seconds
    #[serde(default = "default_send_timeout_secs")]
    pub send_timeout_secs: u64,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            provider: String::from("mock"),
            smtp_host: default_smtp_host(),
            smtp_port: None,
            username: String::new(),
            password: String::new(),
            from_name: default_from_name(),
            send_timeout_secs: default_send_timeout_secs(),
        }
    }
}

impl MailConfig {
    /// Whether the configured provider is the SMTP relay
    pub fn is_smtp(&self) -> bool {
        self.provider.eq_ignore_ascii_case("smtp")
    }

    /// Whether SMTP credentials are present
    pub fn has_credentials(&self) -> bool {
        !self.username.trim().is_empty() && !self.password.is_empty()
    }
}

fn default_smtp_host() -> String {
    String::from("smtp.gmail.com")
}

fn default_from_name() -> String {
    String::from("Text Converter")
}

fn default_send_timeout_secs() -> u64 {
    30
}
