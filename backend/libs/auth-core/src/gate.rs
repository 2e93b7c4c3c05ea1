use std::sync::Arc;

use crate::error::AuthError;
use crate::extractor::extract_bearer_token;
use crate::permissions::check_permissions;
use crate::verifier::{ClaimSet, TokenVerifier};

/// Guard composed of extraction, verification, and the permission check.
///
/// Dispatch layers call [`AuthGate::require`] before running a protected
/// handler; the first failing stage short-circuits with a terminal
/// [`AuthError`] and the handler never executes. On success the decoded
/// claim set is handed to the operation so it may use subject/claims.
#[derive(Clone)]
pub struct AuthGate {
    verifier: Arc<TokenVerifier>,
}

impl AuthGate {
    pub fn new(verifier: TokenVerifier) -> Self {
        Self {
            verifier: Arc::new(verifier),
        }
    }

    /// Authorize a request from its raw `Authorization` header value
    /// against a required permission string.
    pub async fn require(
        &self,
        header: Option<&str>,
        permission: &str,
    ) -> Result<ClaimSet, AuthError> {
        let token = extract_bearer_token(header)?;
        let claims = self.verifier.verify(token).await?;
        check_permissions(&claims, permission)?;
        Ok(claims)
    }
}
