use std::sync::Arc;
use std::time::Duration;

use actix_web::{web, HttpServer};
use anyhow::Context;
use log::{info, warn};
use tracing_subscriber::EnvFilter;

use tc_api::middleware::create_cors;
use tc_api::{create_app, AppState};
use tc_core::services::conversion::{ConversionService, ConversionServiceConfig};
use tc_core::services::payment::PaymentLinkService;
use tc_core::services::token::{LinkTokenCodec, TokenCodecConfig};
use tc_infra::mail::{create_mail_service, try_create_mail_service, MailDispatcherAdapter, MailService};
use tc_shared::config::{AppConfig, LogFormat, LoggingConfig};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;

    init_tracing(&config.logging);

    info!("Starting Text Converter API ({})", config.environment);

    let problems = config.validate();
    for problem in &problems {
        warn!("Configuration problem: {}", problem);
    }
    if config.is_production() && !problems.is_empty() {
        anyhow::bail!(
            "Refusing to start in production with {} configuration problem(s)",
            problems.len()
        );
    }

    // Token codec holds the signing secret for the life of the process
    let codec = Arc::new(
        LinkTokenCodec::new(TokenCodecConfig::from(&config.token))
            .context("Failed to initialize token codec")?,
    );

    // Production never silently falls back to the mock transport
    let mail_service: Arc<dyn MailService> = if config.is_production() {
        Arc::from(try_create_mail_service(&config.mail).context("Failed to initialize mail transport")?)
    } else {
        Arc::from(create_mail_service(&config.mail))
    };
    info!("Mail provider: {}", mail_service.provider_name());

    let dispatcher = Arc::new(MailDispatcherAdapter::new(
        mail_service,
        Duration::from_secs(config.mail.send_timeout_secs),
    ));

    let conversion_service = Arc::new(ConversionService::new(
        codec,
        dispatcher,
        ConversionServiceConfig::from(&config.client),
    ));
    let payment_service = Arc::new(PaymentLinkService::default());

    let state = web::Data::new(AppState::new(
        conversion_service,
        payment_service,
        config.server.max_payload_size,
    ));

    let bind_address = config.server.bind_address();
    let cors_config = config.cors.clone();

    info!("Server will bind to: {}", bind_address);
    info!("Result links point to: {}", config.client.base_url());

    let mut server = HttpServer::new(move || create_app(state.clone(), create_cors(&cors_config)));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("Failed to bind {}", bind_address))?
        .run()
        .await
        .context("Server error")
}

/// Install the tracing subscriber. `RUST_LOG` overrides the configured level;
/// `log` records from the HTTP layer are bridged in.
fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(logging.level.as_str()));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(logging.colored);

    match logging.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Compact => builder.compact().init(),
        LogFormat::Pretty => builder.pretty().init(),
    }
}
