use serde::{Deserialize, Serialize};
use tc_core::domain::entities::ConversionPayload;
use validator::Validate;

use super::validate_not_blank;

/// Body of `POST /api/convert`. Missing fields deserialize as empty and
/// fail validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct ConvertRequest {
    #[validate(custom(function = "validate_not_blank"))]
    pub text: String,

    #[validate(custom(function = "validate_not_blank"))]
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvertResponse {
    pub success: bool,
    pub message: String,
    pub payment_link: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyData {
    pub text: String,
    pub email: String,
}

impl From<ConversionPayload> for VerifyData {
    fn from(payload: ConversionPayload) -> Self {
        Self {
            text: payload.text,
            email: payload.email,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyResponse {
    pub success: bool,
    pub data: VerifyData,
}
