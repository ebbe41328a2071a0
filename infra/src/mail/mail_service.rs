//! Mail service trait and result email rendering

use async_trait::async_trait;

use crate::InfrastructureError;

/// Subject line of the result email
pub const RESULT_EMAIL_SUBJECT: &str = "Your Text Conversion Result";

/// Outbound mail provider
#[async_trait]
pub trait MailService: Send + Sync {
    /// Send an HTML message, returning the provider message id
    async fn send_html(&self, to: &str, subject: &str, html: &str) -> Result<String, InfrastructureError>;

    /// Send the result-link email
    async fn send_result_link(&self, to: &str, link: &str) -> Result<String, InfrastructureError> {
        let html = render_result_email(link);
        self.send_html(to, RESULT_EMAIL_SUBJECT, &html).await
    }

    /// Provider name for logs
    fn provider_name(&self) -> &str;

    /// Whether the provider can accept messages right now
    async fn is_available(&self) -> bool;
}

/// Render the HTML body carrying the result link
pub fn render_result_email(link: &str) -> String {
    format!(
        concat!(
            "<h1>Click the link below to view your result and make a payment:</h1>\n",
            "<a href=\"{}\" style=\"padding: 10px 20px; background-color: #4CAF50; ",
            "color: white; text-decoration: none; border-radius: 5px;\">View Result &amp; Pay</a>\n"
        ),
        escape_attribute(link)
    )
}

fn escape_attribute(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
