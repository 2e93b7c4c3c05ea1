use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

/// Authorization failure taxonomy.
///
/// Credential-shape and signature/claim failures are the 401 class,
/// a structurally broken permissions claim is 400 (the token itself is
/// malformed, not an authorization decision), and a missing capability
/// is 403.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Authorization header is expected")]
    MissingAuthorization,

    #[error("Authorization header is malformed")]
    MalformedHeader,

    #[error("Authorization header must use the Bearer scheme")]
    InvalidScheme,

    #[error("Unable to parse authentication token")]
    InvalidHeader,

    #[error("Unable to find the appropriate key")]
    KeyNotFound,

    #[error("Token is expired")]
    TokenExpired,

    #[error("Incorrect claims, check the audience and issuer")]
    InvalidClaims,

    #[error("Permissions not included in token")]
    MissingPermissionsClaim,

    #[error("Permission not found")]
    PermissionDenied,
}

impl AuthError {
    /// Stable machine-readable code for response bodies and logs.
    pub fn code(&self) -> &'static str {
        match self {
            AuthError::MissingAuthorization => "missing_authorization",
            AuthError::MalformedHeader => "malformed_header",
            AuthError::InvalidScheme => "invalid_scheme",
            AuthError::InvalidHeader => "invalid_header",
            AuthError::KeyNotFound => "key_not_found",
            AuthError::TokenExpired => "token_expired",
            AuthError::InvalidClaims => "invalid_claims",
            AuthError::MissingPermissionsClaim => "missing_permissions_claim",
            AuthError::PermissionDenied => "unauthorized",
        }
    }
}

impl ResponseError for AuthError {
    fn status_code(&self) -> StatusCode {
        match self {
            AuthError::MissingPermissionsClaim => StatusCode::BAD_REQUEST,
            AuthError::PermissionDenied => StatusCode::FORBIDDEN,
            _ => StatusCode::UNAUTHORIZED,
        }
    }

    fn error_response(&self) -> HttpResponse {
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
    fn status_codes_follow_the_response_table() {
        for err in [
            AuthError::MissingAuthorization,
            AuthError::MalformedHeader,
            AuthError::InvalidScheme,
            AuthError::InvalidHeader,
            AuthError::KeyNotFound,
            AuthError::TokenExpired,
            AuthError::InvalidClaims,
        ] {
            assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED, "{:?}", err);
        }
        assert_eq!(
            AuthError::MissingPermissionsClaim.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AuthError::PermissionDenied.status_code(),
            StatusCode::FORBIDDEN
        );
    }

    #[test]
    fn codes_are_stable() {
        assert_eq!(AuthError::MissingAuthorization.code(), "missing_authorization");
        assert_eq!(AuthError::TokenExpired.code(), "token_expired");
        assert_eq!(AuthError::PermissionDenied.code(), "unauthorized");
    }
}
