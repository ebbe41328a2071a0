//! Request and response bodies. Field names are camelCase on the wire.

pub mod conversion;
pub mod payment;

pub use conversion::{ConvertRequest, ConvertResponse, VerifyData, VerifyResponse};
pub use payment::{
    PaymentSuccessRequest, PaymentSuccessResponse, UpiLinkRequest, UpiLinkResponse,
};

/// Rejects strings that are empty after trimming
pub(crate) fn validate_not_blank(value: &str) -> Result<(), validator::ValidationError> {
    if tc_shared::utils::validation::validators::not_blank(value) {
        Ok(())
    } else {
        Err(validator::ValidationError::new("blank"))
    }
}
