//! Error types for the casting service.
//!
//! Errors are converted to the API's uniform response body,
//! `{"success": false, "error": <status>, "message": <text>}`.
//! Authorization failures carry their own status mapping from `auth-core`.

use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use auth_core::AuthError;
use thiserror::Error;

/// Result type for casting-service operations
pub type Result<T> = std::result::Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("resource not found")]
    NotFound,

    #[error("bad request")]
    BadRequest,

    #[error("unprocessable")]
    Unprocessable,

    #[error("an unexpected error occured, request could not be processed")]
    Database(#[from] sqlx::Error),

    #[error(transparent)]
    Auth(#[from] AuthError),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::BadRequest => StatusCode::BAD_REQUEST,
            ApiError::Unprocessable => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Auth(err) => err.status_code(),
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let ApiError::Database(err) = self {
            tracing::error!(error = %err, "database operation failed");
        }

        let status = self.status_code();
        HttpResponse::build(status).json(serde_json::json!({
            "success": false,
            "error": status.as_u16(),
            "message": self.to_string(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_errors_keep_their_status() {
        let err = ApiError::Auth(AuthError::PermissionDenied);
        assert_eq!(err.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(err.to_string(), "Permission not found");
    }

    #[test]
    fn crud_errors_map_to_expected_statuses() {
        assert_eq!(ApiError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::BadRequest.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::Unprocessable.status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ApiError::Database(sqlx::Error::RowNotFound).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
