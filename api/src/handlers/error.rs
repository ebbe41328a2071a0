//! Mapping from domain errors to HTTP responses.
//!
//! Clients get the envelope `{ error, code, timestamp }`. Token failures all
//! read "Invalid or expired token"; delivery and internal failures read
//! "Internal server error". Details only go to the log.

use actix_web::{
    error::{JsonPayloadError, ResponseError},
    http::StatusCode,
    HttpRequest, HttpResponse,
};
use std::fmt;
use tc_core::errors::{DomainError, ErrorKind};
use tc_shared::errors::{error_codes, ErrorResponse};

use crate::middleware::RequestIdExt;

pub const INVALID_TOKEN_MESSAGE: &str = "Invalid or expired token";
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Error returned by handlers
#[derive(Debug, Clone)]
pub struct ApiError {
    status: StatusCode,
    code: &'static str,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            code,
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, error_codes::VALIDATION_ERROR, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, error_codes::BAD_REQUEST, message)
    }

    pub fn not_found() -> Self {
        Self::new(
            StatusCode::NOT_FOUND,
            error_codes::NOT_FOUND,
            "The requested resource was not found",
        )
    }

    pub fn internal() -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            error_codes::INTERNAL_ERROR,
            INTERNAL_ERROR_MESSAGE,
        )
    }

    /// Map a domain error, logging its detail under the request id.
    ///
    /// `validation_message` is what the client sees for validation failures.
    pub fn from_domain(error: DomainError, request_id: &str, validation_message: &str) -> Self {
        match error.kind() {
            ErrorKind::Validation => {
                log::info!("[{}] Validation failed: {}", request_id, error);
                Self::validation(validation_message)
            }
            ErrorKind::InvalidToken => {
                log::warn!("[{}] Token rejected: {}", request_id, error);
                Self::new(
                    StatusCode::BAD_REQUEST,
                    error_codes::INVALID_TOKEN,
                    INVALID_TOKEN_MESSAGE,
                )
            }
            ErrorKind::Delivery => {
                log::error!("[{}] Delivery failed: {}", request_id, error);
                Self::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    error_codes::DELIVERY_ERROR,
                    INTERNAL_ERROR_MESSAGE,
                )
            }
            ErrorKind::Internal => {
                log::error!("[{}] Internal error: {}", request_id, error);
                Self::internal()
            }
        }
    }

    pub fn code(&self) -> &'static str {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message, self.code)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        self.status
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status).json(ErrorResponse::new(self.code, self.message.clone()))
    }
}

/// Turns unreadable JSON bodies into the standard 400 envelope
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    log::warn!("[{}] Rejected request body: {}", req.request_id(), err);

    let api_error = match &err {
        JsonPayloadError::OverflowKnownLength { .. } | JsonPayloadError::Overflow { .. } => {
            ApiError::new(
                StatusCode::PAYLOAD_TOO_LARGE,
                error_codes::BAD_REQUEST,
                "Request body is too large",
            )
        }
        JsonPayloadError::ContentType => ApiError::bad_request("Content-Type must be application/json"),
        _ => ApiError::bad_request("Invalid JSON body"),
    };

    actix_web::error::InternalError::from_response(err, api_error.error_response()).into()
}
