//! CORS middleware configuration for cross-origin requests.
//!
//! The web client is served from a different origin than the API. In
//! development any origin is accepted; otherwise only the configured
//! origins (which always include the client URL) are.

use actix_cors::Cors;
use actix_web::http::{header, Method};
use tc_shared::config::CorsConfig;

/// Creates a CORS middleware instance from configuration.
pub fn create_cors(config: &CorsConfig) -> Cors {
    if config.allow_any_origin {
        create_permissive_cors(config.max_age)
    } else {
        create_restricted_cors(config)
    }
}

fn base_cors(max_age: usize) -> Cors {
    Cors::default()
        .allowed_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allowed_headers(vec![
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ORIGIN,
            header::HeaderName::from_static("x-requested-with"),
            header::HeaderName::from_static("x-request-id"),
        ])
        .expose_headers(vec![header::HeaderName::from_static("x-request-id")])
        .max_age(max_age)
}

/// Any origin, for development
fn create_permissive_cors(max_age: usize) -> Cors {
    log::info!("Configuring CORS to allow any origin");

    base_cors(max_age).allow_any_origin()
}

fn create_restricted_cors(config: &CorsConfig) -> Cors {
    log::info!(
        "Configuring CORS for {} allowed origin(s)",
        config.allowed_origins.len()
    );

    let mut cors = base_cors(config.max_age);
    for origin in &config.allowed_origins {
        log::info!("Adding allowed origin: {}", origin);
        cors = cors.allowed_origin(origin);
    }
    cors
}
