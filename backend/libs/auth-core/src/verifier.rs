use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, decode_header, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

use crate::error::AuthError;
use crate::jwks::JwksCache;

/// Decoded token payload.
///
/// Only ever produced from a token whose signature verified against a key
/// in the current key set and whose issuer, audience, and expiry all
/// validated. Read-only after decode, scoped to the single request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimSet {
    pub iss: String,
    pub sub: String,
    pub aud: Audience,
    #[serde(default)]
    pub iat: Option<i64>,
    pub exp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Vec<String>>,
}

/// `aud` is a single string or an array of strings depending on issuer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Audience {
    Single(String),
    Many(Vec<String>),
}

/// Validates bearer tokens against the issuer's published key set.
pub struct TokenVerifier {
    issuer: String,
    audience: String,
    algorithms: Vec<Algorithm>,
    keys: JwksCache,
}

impl TokenVerifier {
    pub fn new(
        domain: &str,
        audience: impl Into<String>,
        algorithms: Vec<Algorithm>,
        keys: JwksCache,
    ) -> Self {
        let algorithms = if algorithms.is_empty() {
            vec![Algorithm::RS256]
        } else {
            algorithms
        };
        Self {
            issuer: format!("https://{domain}/"),
            audience: audience.into(),
            algorithms,
            keys,
        }
    }

    /// Verify a bearer token and decode its claims.
    ///
    /// The key set fetch may refresh the cache; everything after it is a
    /// pure function of the token and the configured issuer/audience.
    pub async fn verify(&self, token: &str) -> Result<ClaimSet, AuthError> {
        let keys = self.keys.get().await?;

        let header = decode_header(token).map_err(|err| {
            tracing::debug!(error = %err, "unparseable token header");
            AuthError::InvalidHeader
        })?;
        let kid = header.kid.ok_or(AuthError::InvalidHeader)?;

        let jwk = keys.find(&kid).ok_or(AuthError::KeyNotFound)?;
        let decoding_key =
            DecodingKey::from_rsa_components(&jwk.n, &jwk.e).map_err(|err| {
                tracing::warn!(%kid, error = %err, "signing key has invalid RSA components");
                AuthError::InvalidHeader
            })?;

        let mut validation = Validation::new(self.algorithms[0]);
        validation.algorithms = self.algorithms.clone();
        validation.set_audience(&[self.audience.as_str()]);
        validation.set_issuer(&[self.issuer.as_str()]);

        let data = decode::<ClaimSet>(token, &decoding_key, &validation).map_err(|err| {
            match err.kind() {
                ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                ErrorKind::InvalidAudience | ErrorKind::InvalidIssuer => AuthError::InvalidClaims,
                _ => {
                    tracing::debug!(error = %err, "token verification failed");
                    AuthError::InvalidHeader
                }
            }
        })?;

        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jwks::JwksCache;
    use crate::test_utils::{
        sign_claims, test_claims, test_jwk_set, token_expiring_at, token_with_permissions,
        TEST_AUDIENCE, TEST_DOMAIN,
    };
    use chrono::{Duration, Utc};
    use jsonwebtoken::{encode, EncodingKey, Header};

    fn verifier() -> TokenVerifier {
        TokenVerifier::new(
            TEST_DOMAIN,
            TEST_AUDIENCE,
            vec![Algorithm::RS256],
            JwksCache::with_fixed(test_jwk_set()),
        )
    }

    #[tokio::test]
    async fn valid_token_decodes() {
        let token = token_with_permissions(Some(&["get:actors"]));
        let claims = verifier().verify(&token).await.unwrap();
        assert_eq!(claims.iss, format!("https://{TEST_DOMAIN}/"));
        assert_eq!(
            claims.permissions.as_deref(),
            Some(&["get:actors".to_string()][..])
        );
    }

    #[tokio::test]
    async fn verification_is_idempotent() {
        let token = token_with_permissions(Some(&["get:actors"]));
        let v = verifier();
        let first = v.verify(&token).await.unwrap();
        let second = v.verify(&token).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn expired_token_is_rejected() {
        let token = token_expiring_at(Some(&["get:actors"]), Utc::now() - Duration::hours(2));
        assert_eq!(
            verifier().verify(&token).await,
            Err(AuthError::TokenExpired)
        );
    }

    #[tokio::test]
    async fn wrong_audience_is_invalid_claims() {
        let mut claims = test_claims(Some(&["get:actors"]));
        claims["aud"] = serde_json::json!("somebody-else");
        let token = sign_claims(&claims);
        assert_eq!(
            verifier().verify(&token).await,
            Err(AuthError::InvalidClaims)
        );
    }

    #[tokio::test]
    async fn wrong_issuer_is_invalid_claims() {
        let mut claims = test_claims(Some(&["get:actors"]));
        claims["iss"] = serde_json::json!("https://evil.example/");
        let token = sign_claims(&claims);
        assert_eq!(
            verifier().verify(&token).await,
            Err(AuthError::InvalidClaims)
        );
    }

    #[tokio::test]
    async fn unknown_kid_is_key_not_found() {
        let key = EncodingKey::from_rsa_pem(crate::test_utils::TEST_PRIVATE_KEY.as_bytes()).unwrap();
        let mut header = Header::new(Algorithm::RS256);
        header.kid = Some("some-other-key".to_string());
        let token = encode(&header, &test_claims(Some(&["get:actors"])), &key).unwrap();
        assert_eq!(verifier().verify(&token).await, Err(AuthError::KeyNotFound));
    }

    #[tokio::test]
    async fn missing_kid_is_invalid_header() {
        let key = EncodingKey::from_rsa_pem(crate::test_utils::TEST_PRIVATE_KEY.as_bytes()).unwrap();
        let header = Header::new(Algorithm::RS256);
        let token = encode(&header, &test_claims(Some(&["get:actors"])), &key).unwrap();
        assert_eq!(
            verifier().verify(&token).await,
            Err(AuthError::InvalidHeader)
        );
    }

    #[tokio::test]
    async fn garbage_token_is_invalid_header() {
        assert_eq!(
            verifier().verify("not.a.jwt").await,
            Err(AuthError::InvalidHeader)
        );
    }

    #[tokio::test]
    async fn tampered_signature_is_rejected() {
        let token = token_with_permissions(Some(&["get:actors"]));
        let mut parts: Vec<&str> = token.split('.').collect();
        let flipped = if parts[2].starts_with('A') { "B" } else { "A" };
        let tampered_sig = format!("{}{}", flipped, &parts[2][1..]);
        parts[2] = &tampered_sig;
        let tampered = parts.join(".");
        assert_eq!(
            verifier().verify(&tampered).await,
            Err(AuthError::InvalidHeader)
        );
    }
}
