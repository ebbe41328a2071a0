//! Domain entities representing core business objects.

pub mod conversion;
pub mod payment;
pub mod token;

// Re-export commonly used types
pub use conversion::ConversionPayload;
pub use payment::{
    PaymentAcknowledgement, PaymentLinkRequest, DEFAULT_PAYEE_NAME, PAYMENT_NOTE, UPI_CURRENCY,
};
pub use token::{LinkClaims, DEFAULT_TOKEN_ISSUER, LINK_TOKEN_TTL_HOURS};
