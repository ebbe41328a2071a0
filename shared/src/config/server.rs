//! Server configuration module

use serde::{Deserialize, Serialize};
use url::Url;

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server host address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Worker threads (0 = number of CPU cores)
    #[serde(default)]
    pub workers: usize,

    /// Maximum JSON payload size in bytes
    #[serde(default = "default_max_payload_size")]
    pub max_payload_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from("0.0.0.0"),
            port: 5000,
            workers: 0,
            max_payload_size: default_max_payload_size(),
        }
    }
}

impl ServerConfig {
    /// Get the bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Client application settings used when composing links
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL of the web client, e.g. `https://textconverter.example`
    pub url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            url: String::from("http://localhost:5173"),
        }
    }
}

impl ClientConfig {
    /// Base URL without a trailing slash
    pub fn base_url(&self) -> &str {
        self.url.trim_end_matches('/')
    }

    /// Serialized origin of the client as a browser sends it, used for CORS.
    /// `None` unless the URL is an absolute http(s) URL with a host.
    pub fn origin(&self) -> Option<String> {
        let url = Url::parse(self.url.trim()).ok()?;
        if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
            return None;
        }
        Some(url.origin().ascii_serialization())
    }
}

/// CORS configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CorsConfig {
    /// Accept requests from any origin
    #[serde(default = "default_allow_any_origin")]
    pub allow_any_origin: bool,

    /// Allowed origins when `allow_any_origin` is off
    #[serde(default)]
    pub allowed_origins: Vec<String>,

    /// Max age for preflight cache in seconds
    #[serde(default = "default_max_age")]
    pub max_age: usize,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allow_any_origin: default_allow_any_origin(),
            allowed_origins: vec![],
            max_age: default_max_age(),
        }
    }
}

impl CorsConfig {
    /// Restrict CORS to the given origins
    pub fn restricted(origins: Vec<String>) -> Self {
        Self {
            allow_any_origin: false,
            allowed_origins: origins,
            max_age: default_max_age(),
        }
    }
}

fn default_max_payload_size() -> usize {
    256 * 1024
}

fn default_allow_any_origin() -> bool {
    true
}

fn default_max_age() -> usize {
    3600
}
