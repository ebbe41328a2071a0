use actix_web::{web, HttpRequest, HttpResponse};
use tc_core::domain::entities::PaymentAcknowledgement;
use tc_core::services::conversion::NotificationDispatcher;

use crate::app::AppState;
use crate::dto::{PaymentSuccessRequest, PaymentSuccessResponse};
use crate::handlers::ApiError;
use crate::middleware::RequestIdExt;

/// Handler for POST /api/payment/success
///
/// Acknowledges a payment the client reports. Nothing is verified, and a
/// missing or unreadable body is acknowledged like an empty one.
pub async fn payment_success<N>(
    req: HttpRequest,
    state: web::Data<AppState<N>>,
    body: Option<web::Json<PaymentSuccessRequest>>,
) -> Result<HttpResponse, ApiError>
where
    N: NotificationDispatcher + 'static,
{
    let body = body.map(web::Json::into_inner).unwrap_or_default();
    let ack = PaymentAcknowledgement::from(body);
    let message = state.payment_service.acknowledge_payment(&ack);

    log::info!("[{}] Payment acknowledged", req.request_id());

    Ok(HttpResponse::Ok().json(PaymentSuccessResponse {
        success: true,
        message,
    }))
}
