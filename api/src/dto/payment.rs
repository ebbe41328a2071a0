use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tc_core::domain::entities::{PaymentAcknowledgement, PaymentLinkRequest};
use validator::Validate;

use super::validate_not_blank;

/// Body of `POST /api/payment/upi-link`
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct UpiLinkRequest {
    /// Whole rupees; a number, a numeric string, or empty
    #[serde(deserialize_with = "deserialize_amount")]
    pub amount: Option<u64>,

    #[validate(custom(function = "validate_not_blank"))]
    pub upi_id: String,

    pub name: Option<String>,
}

impl From<UpiLinkRequest> for PaymentLinkRequest {
    fn from(req: UpiLinkRequest) -> Self {
        PaymentLinkRequest::new(req.amount, req.upi_id, req.name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpiLinkResponse {
    pub success: bool,
    pub payment_link: String,
}

/// Body of `POST /api/payment/success`
///
/// The client report is informational, so unreadable fields become `None`
/// instead of failing the request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaymentSuccessRequest {
    #[serde(deserialize_with = "deserialize_reported_amount")]
    pub amount: Option<u64>,

    #[serde(deserialize_with = "deserialize_reported_email")]
    pub email: Option<String>,
}

impl From<PaymentSuccessRequest> for PaymentAcknowledgement {
    fn from(req: PaymentSuccessRequest) -> Self {
        PaymentAcknowledgement {
            amount: req.amount,
            email: req.email,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentSuccessResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum AmountInput {
    Number(u64),
    Text(String),
}

fn deserialize_amount<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<AmountInput>::deserialize(deserializer)? {
        None => Ok(None),
        Some(AmountInput::Number(n)) => Ok(Some(n)),
        Some(AmountInput::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(AmountInput::Text(s)) => s
            .trim()
            .parse::<u64>()
            .map(Some)
            .map_err(|_| serde::de::Error::custom("amount must be a non-negative whole number")),
    }
}

fn deserialize_reported_amount<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let amount = match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    };
    Ok(amount)
}

fn deserialize_reported_email<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(Some(s)),
        _ => Ok(None),
    }
}
