//! # HTTP Errors
//!
//! Maps request and storage outcomes onto status codes and a
//! `{"message": ...}` body. Storage failure details stay in the logs; the
//! client only sees a generic message.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use super::response::ErrorResponse;
use crate::records::ValidationError;
use crate::storage::StorageError;

/// Result type for handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors returned by record handlers
#[derive(Debug, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Field or id rejected by validation
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Body could not be decoded
    #[error("{0}")]
    InvalidBody(String),

    /// Target id absent
    #[error("Record not found")]
    NotFound,

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Backing medium failed
    #[error("Internal server error")]
    Storage(#[from] StorageError),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidBody(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::new(self.to_string()));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::StorageOperation;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::from(ValidationError::InvalidId).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::from(StorageError::unavailable(StorageOperation::GetRecords, "x"))
                .status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_storage_detail_not_exposed() {
        let err = ApiError::from(StorageError::unavailable_for(
            StorageOperation::UpdateRecord,
            3,
            "disk I/O error at /var/lib/records.db",
        ));
        assert_eq!(err.to_string(), "Internal server error");
    }

    #[test]
    fn test_validation_message_passes_through() {
        let err = ApiError::from(ValidationError::Required("Title"));
        assert_eq!(err.to_string(), "Title is required");
    }
}
