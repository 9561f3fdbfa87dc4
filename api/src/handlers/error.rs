//! Mapping of domain failures to HTTP responses
//!
//! Bodies carry a stable code and a generic message. Storage and internal
//! details only reach the logs.

use actix_web::{
    error::{InternalError, JsonPayloadError},
    http::StatusCode,
    HttpRequest, HttpResponse,
};
use tracing::{debug, error};
use validator::ValidationErrors;

use ak_core::errors::{AuthError, DomainError, ErrorCategory};
use ak_shared::{error_codes, ErrorResponse};

/// Extension trait for ErrorResponse to add actix-web specific methods
pub trait ErrorResponseExt {
    fn to_response(&self, status: StatusCode) -> HttpResponse;
}

impl ErrorResponseExt for ErrorResponse {
    fn to_response(&self, status: StatusCode) -> HttpResponse {
        HttpResponse::build(status).json(self)
    }
}

/// Handle domain errors and convert them to appropriate HTTP responses
pub fn handle_domain_error(error: &DomainError) -> HttpResponse {
    let (status, body) = match error.category() {
        ErrorCategory::Unauthorized => {
            debug!(error = %error, "Request rejected");
            let body = match error {
                DomainError::Auth(AuthError::InvalidCredentials) => ErrorResponse::new(
                    error_codes::INVALID_CREDENTIALS,
                    "Invalid username or password",
                ),
                DomainError::Unauthorized | DomainError::Token(_) => {
                    ErrorResponse::new(error_codes::TOKEN_INVALID, "Invalid or expired token")
                }
                _ => ErrorResponse::new(error_codes::UNAUTHORIZED, "Authentication required"),
            };
            (StatusCode::UNAUTHORIZED, body)
        }
        ErrorCategory::NotFound => (
            StatusCode::NOT_FOUND,
            ErrorResponse::new(error_codes::NOT_FOUND, "Resource not found"),
        ),
        ErrorCategory::Validation => {
            let message = match error {
                DomainError::Validation { message } => message.clone(),
                other => other.to_string(),
            };
            (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new(error_codes::VALIDATION_ERROR, message),
            )
        }
        ErrorCategory::Conflict => (
            StatusCode::CONFLICT,
            ErrorResponse::new(error_codes::CONFLICT, error.to_string()),
        ),
        ErrorCategory::Storage => {
            error!(error = %error, "Storage failure");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::new(error_codes::STORAGE_ERROR, "Server storage error"),
            )
        }
        ErrorCategory::Internal => {
            error!(error = %error, "Internal failure");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::new(error_codes::INTERNAL_ERROR, "Internal server error"),
            )
        }
    };

    body.to_response(status)
}

/// 400 with one detail entry per rejected field
pub fn handle_validation_errors(errors: &ValidationErrors) -> HttpResponse {
    let mut body = ErrorResponse::new(error_codes::VALIDATION_ERROR, "Validation failed");
    for (field, field_errors) in errors.field_errors() {
        let messages: Vec<String> = field_errors
            .iter()
            .map(|e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string())
            })
            .collect();
        body = body.add_detail(field, messages);
    }
    body.to_response(StatusCode::BAD_REQUEST)
}

/// Turns unreadable JSON bodies into the standard 400 body
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    debug!(error = %err, "Rejected request body");
    let response = ErrorResponse::new(error_codes::BAD_REQUEST, "Malformed request body")
        .to_response(StatusCode::BAD_REQUEST);
    InternalError::from_response(err, response).into()
}

/// Response used when a protected route is called without a usable token
pub fn unauthorized_response() -> HttpResponse {
    ErrorResponse::new(error_codes::UNAUTHORIZED, "Authentication required")
        .to_response(StatusCode::UNAUTHORIZED)
}
