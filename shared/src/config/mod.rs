//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `auth` - Signing secret for result-link tokens
//! - `environment` - Environment detection and logging configuration
//! - `mail` - Outbound mail transport
//! - `server` - HTTP server, client URL and CORS configuration
//!
//! Values are layered: built-in defaults, then an optional
//! `config.<environment>.toml` file, then environment variables.

pub mod auth;
pub mod environment;
pub mod mail;
pub mod server;

use config::{Config, ConfigError, File};
use serde::{Deserialize, Serialize};
use std::env;

// Re-export commonly used types
pub use auth::{TokenConfig, DEFAULT_TOKEN_SECRET};
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use mail::MailConfig;
pub use server::{ClientConfig, CorsConfig, ServerConfig};

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Web client used to build result links
    pub client: ClientConfig,

    /// Token signing configuration
    pub token: TokenConfig,

    /// Outbound mail configuration
    pub mail: MailConfig,

    /// CORS configuration
    pub cors: CorsConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let env = Environment::default();
        Self {
            environment: env,
            server: ServerConfig::default(),
            client: ClientConfig::default(),
            token: TokenConfig::default(),
            mail: MailConfig::default(),
            cors: CorsConfig::default(),
            logging: LoggingConfig::for_environment(env),
        }
    }
}

impl AppConfig {
    /// Load configuration for the environment named by `ENVIRONMENT`
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_for(Environment::from_env())
    }

    /// Load configuration for a specific environment
    pub fn load_for(environment: Environment) -> Result<Self, ConfigError> {
        let logging = LoggingConfig::for_environment(environment);

        let origins = env::var("ALLOWED_ORIGINS").ok().map(|value| {
            value
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect::<Vec<String>>()
        });

        let settings = Config::builder()
            .set_default("environment", environment.to_string())?
            .set_default("mail.provider", environment.default_mail_provider())?
            .set_default("logging.level", logging.level)?
            .set_default("logging.format", logging.format.as_str())?
            .set_default("logging.colored", logging.colored)?
            .set_default("cors.allow_any_origin", !environment.is_production())?
            .add_source(File::with_name(&environment.config_file()).required(false))
            .set_override_option("server.host", env::var("HOST").ok())?
            .set_override_option("server.port", env::var("PORT").ok())?
            .set_override_option("client.url", env::var("CLIENT_URL").ok())?
            .set_override_option("token.secret", env::var("JWT_SECRET").ok())?
            .set_override_option("mail.provider", env::var("EMAIL_PROVIDER").ok())?
            .set_override_option("mail.smtp_host", env::var("EMAIL_HOST").ok())?
            .set_override_option("mail.smtp_port", env::var("EMAIL_PORT").ok())?
            .set_override_option("mail.username", env::var("EMAIL_USER").ok())?
            .set_override_option("mail.password", env::var("EMAIL_PASS").ok())?
            .set_override_option("mail.from_name", env::var("EMAIL_FROM_NAME").ok())?
            .set_override_option(
                "mail.send_timeout_secs",
                env::var("EMAIL_SEND_TIMEOUT_SECS").ok(),
            )?
            .set_override_option("cors.allowed_origins", origins)?
            .build()?;

        let mut config: AppConfig = settings.try_deserialize()?;
        config.environment = environment;
        config.apply_client_origin();
        Ok(config)
    }

    /// The client must always be able to call the API, even with restricted CORS
    fn apply_client_origin(&mut self) {
        if self.cors.allow_any_origin {
            return;
        }
        if let Some(origin) = self.client.origin() {
            if !self.cors.allowed_origins.contains(&origin) {
                self.cors.allowed_origins.push(origin);
            }
        }
    }

    /// Report configuration problems. An empty list means the configuration is usable.
    pub fn validate(&self) -> Vec<String> {
        let mut problems = Vec::new();

        if self.token.secret.trim().is_empty() {
            problems.push("JWT_SECRET must not be empty".to_string());
        } else if self.token.is_using_default_secret() && self.environment.is_production() {
            problems.push("JWT_SECRET must be set in production".to_string());
        }

        if self.client.origin().is_none() {
            problems.push(format!("CLIENT_URL is not a valid URL: {}", self.client.url));
        }

        if self.mail.is_smtp() && !self.mail.has_credentials() {
            problems.push("EMAIL_USER and EMAIL_PASS are required for the smtp provider".to_string());
        }

        if self.mail.send_timeout_secs == 0 {
            problems.push("EMAIL_SEND_TIMEOUT_SECS must be greater than zero".to_string());
        }

        problems
    }

    pub fn is_production(&self) -> bool {
        self.environment.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid_for_development() {
        let config = AppConfig::default();
        assert!(config.validate().is_empty(), "{:?}", config.validate());
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.mail.provider, "mock");
    }

    #[test]
    fn test_default_secret_rejected_in_production() {
        let config = AppConfig {
            environment: Environment::Production,
            ..Default::default()
        };
        let problems = config.validate();
        assert!(problems.iter().any(|p| p.contains("JWT_SECRET")));
    }

    #[test]
    fn test_smtp_requires_credentials() {
        let mut config = AppConfig::default();
        config.mail.provider = "smtp".to_string();
        let problems = config.validate();
        assert!(problems.iter().any(|p| p.contains("EMAIL_USER")));

        config.mail.username = "sender@example.com".to_string();
        config.mail.password = "secret".to_string();
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_restricted_cors_includes_client_origin() {
        let mut config = AppConfig::default();
        config.client.url = "https://textconverter.example/app".to_string();
        config.cors = CorsConfig::restricted(vec!["https://admin.example".to_string()]);
        config.apply_client_origin();

        assert!(config
            .cors
            .allowed_origins
            .contains(&"https://textconverter.example".to_string()));
        assert_eq!(config.cors.allowed_origins.len(), 2);

        // Idempotent
        config.apply_client_origin();
        assert_eq!(config.cors.allowed_origins.len(), 2);
    }

    #[test]
    fn test_invalid_client_url_reported() {
        let mut config = AppConfig::default();
        config.client.url = "localhost".to_string();
        assert!(config.validate().iter().any(|p| p.contains("CLIENT_URL")));

        config.client.url = "javascript://alert(1)".to_string();
        assert!(config.validate().iter().any(|p| p.contains("CLIENT_URL")));
    }

    #[test]
    fn test_restricted_cors_uses_normalized_client_origin() {
        let mut config = AppConfig::default();
        config.client.url = "HTTPS://TextConverter.Example/app".to_string();
        config.cors = CorsConfig::restricted(vec![]);
        config.apply_client_origin();

        assert_eq!(
            config.cors.allowed_origins,
            vec!["https://textconverter.example".to_string()]
        );
    }
}
