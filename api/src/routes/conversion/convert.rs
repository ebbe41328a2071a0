use actix_web::{web, HttpRequest, HttpResponse};
use tc_core::services::conversion::NotificationDispatcher;
use tc_shared::utils::email::mask_email;
use validator::Validate;

use crate::app::AppState;
use crate::dto::{ConvertRequest, ConvertResponse};
use crate::handlers::ApiError;
use crate::middleware::RequestIdExt;

pub const MISSING_FIELDS_MESSAGE: &str = "Text and email are required";
pub const EMAIL_SENT_MESSAGE: &str = "Email sent successfully";

/// Handler for POST /api/convert
///
/// Uppercases the text and emails a signed result link to the address.
///
/// # Request Body
///
/// ```json
/// { "text": "hello", "email": "user@example.com" }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "success": true,
///     "message": "Email sent successfully",
///     "paymentLink": "http://localhost:5173/payment/<token>"
/// }
/// ```
///
/// ## Errors
/// - 400 when text or email is missing or blank
/// - 500 when the email could not be sent
pub async fn convert<N>(
    req: HttpRequest,
    state: web::Data<AppState<N>>,
    body: web::Json<ConvertRequest>,
) -> Result<HttpResponse, ApiError>
where
    N: NotificationDispatcher + 'static,
{
    let request_id = req.request_id();
    let body = body.into_inner();

    log::info!(
        "[{}] Processing convert request for email: {}",
        request_id,
        mask_email(&body.email)
    );

    if let Err(errors) = body.validate() {
        log::info!("[{}] Convert request rejected: {}", request_id, errors);
        return Err(ApiError::validation(MISSING_FIELDS_MESSAGE));
    }

    let result = state
        .conversion_service
        .convert(&body.text, &body.email)
        .await
        .map_err(|e| ApiError::from_domain(e, &request_id, MISSING_FIELDS_MESSAGE))?;

    log::info!("[{}] Result link sent (message id {})", request_id, result.message_id);

    Ok(HttpResponse::Ok().json(ConvertResponse {
        success: true,
        message: EMAIL_SENT_MESSAGE.to_string(),
        payment_link: result.payment_link,
    }))
}
