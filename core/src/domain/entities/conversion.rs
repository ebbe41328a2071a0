//! Conversion payload carried inside a result link.

use serde::{Deserialize, Serialize};

/// The converted text and the address it was sent to.
///
/// Only ever lives inside a signed token; nothing is stored server-side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionPayload {
    /// Text after transformation
    pub text: String,

    /// Recipient email address, as submitted
    pub email: String,
}

impl ConversionPayload {
    pub fn new(text: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            email: email.into(),
        }
    }
}
