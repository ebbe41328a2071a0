use actix_web::{web, HttpRequest, HttpResponse};
use tc_core::domain::entities::PaymentLinkRequest;
use tc_core::errors::{DomainError, ValidationError};
use tc_core::services::conversion::NotificationDispatcher;
use validator::Validate;

use crate::app::AppState;
use crate::dto::{UpiLinkRequest, UpiLinkResponse};
use crate::handlers::ApiError;
use crate::middleware::RequestIdExt;

pub const MISSING_UPI_ID_MESSAGE: &str = "UPI ID is required";
pub const INVALID_UPI_ID_MESSAGE: &str = "UPI ID is invalid";

/// Handler for POST /api/payment/upi-link
///
/// # Request Body
///
/// ```json
/// { "amount": 10, "upiId": "name@bank", "name": "Text Converter" }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// { "success": true, "paymentLink": "upi://pay?pa=name@bank&pn=Text%20Converter&am=10&cu=INR&tn=..." }
/// ```
pub async fn upi_link<N>(
    req: HttpRequest,
    state: web::Data<AppState<N>>,
    body: web::Json<UpiLinkRequest>,
) -> Result<HttpResponse, ApiError>
where
    N: NotificationDispatcher + 'static,
{
    let request_id = req.request_id();
    let body = body.into_inner();

    if body.validate().is_err() {
        log::info!("[{}] UPI link request without UPI ID", request_id);
        return Err(ApiError::validation(MISSING_UPI_ID_MESSAGE));
    }

    let request = PaymentLinkRequest::from(body);
    let payment_link = state
        .payment_service
        .build_upi_link(&request)
        .map_err(|e| {
            let message = match &e {
                DomainError::ValidationErr(ValidationError::InvalidFormat { .. }) => {
                    INVALID_UPI_ID_MESSAGE
                }
                _ => MISSING_UPI_ID_MESSAGE,
            };
            ApiError::from_domain(e, &request_id, message)
        })?;

    log::info!("[{}] UPI link generated (amount {:?})", request_id, request.amount);

    Ok(HttpResponse::Ok().json(UpiLinkResponse {
        success: true,
        payment_link,
    }))
}
