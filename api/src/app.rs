//! Application state and factory
//!
//! This module holds the shared application state and provides the
//! factory for creating the Actix-web application.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use actix_cors::Cors;
use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    middleware::Logger,
    web, App, HttpResponse,
};
use tc_core::services::conversion::{ConversionService, NotificationDispatcher};
use tc_core::services::payment::PaymentLinkService;
use tc_shared::types::{HealthResponse, HealthStatus, ServiceHealth};

use crate::handlers::{json_error_handler, ApiError};
use crate::middleware::RequestIdMiddleware;
use crate::routes::{conversion, payment};

const SERVICE_NAME: &str = "text-converter-api";

/// Upper bound on the dispatcher probe done by `/health`
const HEALTH_PROBE_TIMEOUT: Duration = Duration::from_secs(3);

/// Application state that holds shared services
pub struct AppState<N: NotificationDispatcher> {
    pub conversion_service: Arc<ConversionService<N>>,
    pub payment_service: Arc<PaymentLinkService>,
    /// Maximum accepted JSON body size in bytes
    pub max_payload_size: usize,
}

impl<N: NotificationDispatcher> AppState<N> {
    pub fn new(
        conversion_service: Arc<ConversionService<N>>,
        payment_service: Arc<PaymentLinkService>,
        max_payload_size: usize,
    ) -> Self {
        Self {
            conversion_service,
            payment_service,
            max_payload_size,
        }
    }
}

/// Register all routes. Shared by the server and the tests.
pub fn configure<N>(cfg: &mut web::ServiceConfig)
where
    N: NotificationDispatcher + 'static,
{
    cfg.route("/health", web::get().to(health_check::<N>)).service(
        web::scope("/api")
            .route("", web::get().to(api_documentation))
            .route("/", web::get().to(api_documentation))
            .route("/convert", web::post().to(conversion::convert::<N>))
            .route("/verify/{token}", web::get().to(conversion::verify::<N>))
            .service(
                web::scope("/payment")
                    .route("/success", web::post().to(payment::payment_success::<N>))
                    .route("/upi-link", web::post().to(payment::upi_link::<N>)),
            ),
    );
}

/// Create and configure the application with all dependencies
pub fn create_app<N>(
    app_state: web::Data<AppState<N>>,
    cors: Cors,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    N: NotificationDispatcher + 'static,
{
    let json_config = web::JsonConfig::default()
        .limit(app_state.max_payload_size)
        .error_handler(json_error_handler);

    App::new()
        // Add application state
        .app_data(app_state)
        .app_data(json_config)
        // Last wrap is outermost: CORS, then logging, then request id
        .wrap(RequestIdMiddleware)
        .wrap(Logger::new(
            r#"%a "%r" %s %b %T request_id=%{x-request-id}o"#,
        ))
        .wrap(cors)
        .configure(configure::<N>)
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check<N>(state: web::Data<AppState<N>>) -> HttpResponse
where
    N: NotificationDispatcher + 'static,
{
    let service = &state.conversion_service;
    let available = tokio::time::timeout(HEALTH_PROBE_TIMEOUT, service.is_dispatcher_available())
        .await
        .unwrap_or(false);

    let mail = if available {
        ServiceHealth {
            status: HealthStatus::Healthy,
            message: Some(service.provider_name().to_string()),
        }
    } else {
        ServiceHealth {
            status: HealthStatus::Degraded,
            message: Some(format!("{} unavailable", service.provider_name())),
        }
    };

    let mut services = HashMap::new();
    services.insert("mail".to_string(), mail);

    HttpResponse::Ok().json(HealthResponse::from_services(
        SERVICE_NAME,
        env!("CARGO_PKG_VERSION"),
        services,
    ))
}

/// API documentation endpoint
async fn api_documentation() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "Text Converter API",
        "endpoints": {
            "health": "/health",
            "convert": {
                "path": "/api/convert",
                "method": "POST",
                "description": "Uppercase text and email a signed result link",
                "request_body": {
                    "text": "string (required)",
                    "email": "string (required)"
                },
                "responses": {
                    "200": "Email sent, returns paymentLink",
                    "400": "Text or email missing",
                    "500": "Email could not be sent"
                }
            },
            "verify": {
                "path": "/api/verify/{token}",
                "method": "GET",
                "description": "Decode a result link token",
                "responses": {
                    "200": "Returns the converted text and email",
                    "400": "Invalid or expired token"
                }
            },
            "payment_success": {
                "path": "/api/payment/success",
                "method": "POST",
                "description": "Acknowledge a client-reported payment",
                "request_body": {
                    "amount": "number (optional)",
                    "email": "string (optional)"
                }
            },
            "upi_link": {
                "path": "/api/payment/upi-link",
                "method": "POST",
                "description": "Build a UPI payment deep link",
                "request_body": {
                    "amount": "number (optional, whole rupees)",
                    "upiId": "string (required)",
                    "name": "string (optional)"
                },
                "responses": {
                    "200": "Returns paymentLink",
                    "400": "UPI ID is required"
                }
            }
        }
    }))
}

/// Default 404 handler
async fn not_found() -> Result<HttpResponse, ApiError> {
    Err(ApiError::not_found())
}
