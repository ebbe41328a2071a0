//! Business services containing domain logic and use cases.

pub mod conversion;
pub mod payment;
pub mod token;

// Re-export commonly used types
pub use conversion::{
    ConversionResult, ConversionService, ConversionServiceConfig, NotificationDispatcher,
};
pub use payment::{PaymentLinkConfig, PaymentLinkService, PAYMENT_RECORDED_MESSAGE};
pub use token::{LinkTokenCodec, TokenCodecConfig};
