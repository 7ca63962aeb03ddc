//! Error handling middleware - RFC 7807 compliant responses.

use std::fmt;

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use quill_shared::ErrorResponse;

/// Application-level error type that converts to RFC 7807 responses.
#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    Forbidden,
    NotFound(String),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::Forbidden => write!(f, "Forbidden"),
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Forbidden => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            AppError::BadRequest(detail) => ErrorResponse::bad_request(detail),
            AppError::Forbidden => ErrorResponse::forbidden(),
            AppError::NotFound(detail) => ErrorResponse::not_found(detail),
            AppError::Internal(detail) => {
                // Log internal errors; the response body stays generic
                tracing::error!("Internal error: {}", detail);
                ErrorResponse::internal_error()
            }
        };

        HttpResponse::build(self.status_code()).json(error)
    }
}

// Conversion from service outcomes
impl From<quill_core::PostError> for AppError {
    fn from(err: quill_core::PostError) -> Self {
        use quill_core::PostError;

        match err {
            PostError::MissingFields(field) => {
                AppError::BadRequest(format!("Missing required field: {}", field))
            }
            PostError::NoFieldsProvided => {
                AppError::BadRequest("No fields provided for update".to_string())
            }
            PostError::InvalidId(id) => AppError::BadRequest(format!("Invalid post id: {}", id)),
            PostError::NotFound(id) => AppError::NotFound(format!("Post {} not found", id)),
            PostError::Forbidden => AppError::Forbidden,
            PostError::Hash(detail) => AppError::Internal(format!("Password hashing: {}", detail)),
            PostError::Store(err) => AppError::Internal(format!("Store: {}", err)),
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
