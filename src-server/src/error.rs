//! API Errors
//!
//! Every failure leaves the server as a `{message}` JSON body.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use zeiglist_core::{DomainError, SaveResponse, INVALID_DATA_MESSAGE};

pub const SERVER_ERROR_MESSAGE: &str = "Server encountered an error.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound(m) => Self::not_found(m),
            DomainError::InvalidInput(m) => Self::bad_request(m),
            DomainError::Conflict(_) | DomainError::Internal(_) => Self::internal(SERVER_ERROR_MESSAGE),
        }
    }
}

/// Malformed or mistyped bodies all read as the same 400
impl From<JsonRejection> for ApiError {
    fn from(_: JsonRejection) -> Self {
        Self::bad_request(INVALID_DATA_MESSAGE)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(SaveResponse::message(self.message))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_error_mapping() {
        assert_eq!(
            ApiError::from(DomainError::InvalidInput(INVALID_DATA_MESSAGE.to_string())),
            ApiError::bad_request(INVALID_DATA_MESSAGE)
        );
        assert_eq!(
            ApiError::from(DomainError::NotFound("List not found.".to_string())).status,
            StatusCode::NOT_FOUND
        );
        // Internal details stay in the log, not the response
        assert_eq!(
            ApiError::from(DomainError::Internal("disk on fire".to_string())),
            ApiError::internal(SERVER_ERROR_MESSAGE)
        );
    }
}
