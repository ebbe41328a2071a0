//! SMTP mail service
//!
//! Sends through an authenticated SMTP relay using `lettre`. The transport
//! keeps a connection pool and is built once at startup.

use async_trait::async_trait;
use lettre::{
    message::{header::ContentType, Mailbox},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use tc_shared::config::MailConfig;
use tc_shared::utils::email::mask_email;
use tracing::{debug, error, info};

use crate::{mail::mail_service::MailService, InfrastructureError};

/// Submission port that expects STARTTLS rather than implicit TLS
const STARTTLS_PORT: u16 = 587;

/// SMTP mail service implementation
pub struct SmtpMailService {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    host: String,
}

impl SmtpMailService {
    /// Create a new SMTP mail service
    pub fn new(config: &MailConfig) -> Result<Self, InfrastructureError> {
        if !config.has_credentials() {
            return Err(InfrastructureError::Config(
                "EMAIL_USER and EMAIL_PASS must be set for SMTP".to_string(),
            ));
        }

        let credentials = Credentials::new(config.username.clone(), config.password.clone());

        let builder = match config.smtp_port {
            Some(STARTTLS_PORT) => {
                AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)?
            }
            Some(port) => AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host)?.port(port),
            None => AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host)?,
        };
        let transport = builder.credentials(credentials).build();

        let from = Mailbox::new(
            Some(config.from_name.clone()),
            config.username.trim().parse()?,
        );

        info!(
            host = %config.smtp_host,
            from = %mask_email(&config.username),
            "SMTP mail service initialized"
        );

        Ok(Self {
            transport,
            from,
            host: config.smtp_host.clone(),
        })
    }

    fn message_id(&self) -> String {
        format!("<{}@{}>", uuid::Uuid::new_v4(), self.from.email.domain())
    }
}

#[async_trait]
impl MailService for SmtpMailService {
    async fn send_html(&self, to: &str, subject: &str, html: &str) -> Result<String, InfrastructureError> {
        let recipient: Mailbox = to.trim().parse()?;
        let message_id = self.message_id();

        let email = Message::builder()
            .from(self.from.clone())
            .to(recipient)
            .subject(subject)
            .message_id(Some(message_id.clone()))
            .header(ContentType::TEXT_HTML)
            .body(html.to_string())?;

        debug!(to = %mask_email(to), host = %self.host, "Sending mail via SMTP");

        match self.transport.send(email).await {
            Ok(response) => {
                info!(
                    to = %mask_email(to),
                    code = %response.code(),
                    message_id = %message_id,
                    "Mail sent via SMTP"
                );
                Ok(message_id)
            }
            Err(e) => {
                error!(to = %mask_email(to), error = %e, "SMTP send failed");
                Err(InfrastructureError::Smtp(e))
            }
        }
    }

    fn provider_name(&self) -> &str {
        "SMTP"
    }

    async fn is_available(&self) -> bool {
        self.transport.test_connection().await.unwrap_or(false)
    }
}
