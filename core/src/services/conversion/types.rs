//! Types for conversion service results

/// Result of a successful conversion
#[derive(Debug, Clone)]
pub struct ConversionResult {
    /// Link that was sent to the recipient
    pub payment_link: String,
    /// Message id reported by the dispatcher
    pub message_id: String,
}
