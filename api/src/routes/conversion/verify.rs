use actix_web::{web, HttpRequest, HttpResponse};
use tc_core::services::conversion::NotificationDispatcher;

use crate::app::AppState;
use crate::dto::{VerifyData, VerifyResponse};
use crate::handlers::ApiError;
use crate::middleware::RequestIdExt;

/// Handler for GET /api/verify/{token}
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// { "success": true, "data": { "text": "HELLO", "email": "user@example.com" } }
/// ```
///
/// ## Errors
/// - 400 `{"error": "Invalid or expired token"}` for any bad token
pub async fn verify<N>(
    req: HttpRequest,
    state: web::Data<AppState<N>>,
    token: web::Path<String>,
) -> Result<HttpResponse, ApiError>
where
    N: NotificationDispatcher + 'static,
{
    let request_id = req.request_id();

    let payload = state
        .conversion_service
        .verify(&token)
        .map_err(|e| ApiError::from_domain(e, &request_id, ""))?;

    log::debug!("[{}] Result token verified", request_id);

    Ok(HttpResponse::Ok().json(VerifyResponse {
        success: true,
        data: VerifyData::from(payload),
    }))
}
