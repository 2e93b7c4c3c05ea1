//! Signing key set fetched from the issuer's well-known endpoint.
//!
//! The cache is process-scoped state injected into the verifier, so tests
//! can substitute a fixed key set instead of hitting the network.

use std::sync::Arc;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::error::AuthError;

/// Single JSON Web Key, RFC 7517 subset used for RS256 verification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Jwk {
    pub kty: String,
    pub kid: String,
    #[serde(rename = "use", default, skip_serializing_if = "Option::is_none")]
    pub use_: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alg: Option<String>,
    /// RSA modulus, base64url
    pub n: String,
    /// RSA exponent, base64url
    pub e: String,
}

/// Key set as published at `/.well-known/jwks.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwkSet {
    pub keys: Vec<Jwk>,
}

impl JwkSet {
    pub fn find(&self, kid: &str) -> Option<&Jwk> {
        self.keys.iter().find(|key| key.kid == kid)
    }
}

struct CachedSet {
    keys: Arc<JwkSet>,
    fetched_at: Instant,
}

enum Source {
    Remote {
        url: String,
        client: reqwest::Client,
        ttl: Duration,
    },
    Fixed(Arc<JwkSet>),
}

/// TTL-bounded cache over the remote key set.
///
/// A refresh replaces the whole set behind the lock; concurrent readers
/// hold the previous `Arc` and never observe a partially-updated mapping.
pub struct JwksCache {
    source: Source,
    cached: RwLock<Option<CachedSet>>,
}

impl JwksCache {
    /// Cache backed by `https://<domain>/.well-known/jwks.json`.
    pub fn new(domain: &str, ttl: Duration) -> Self {
        Self {
            source: Source::Remote {
                url: format!("https://{domain}/.well-known/jwks.json"),
                client: reqwest::Client::new(),
                ttl,
            },
            cached: RwLock::new(None),
        }
    }

    /// Cache serving a fixed key set, never touching the network.
    pub fn with_fixed(keys: JwkSet) -> Self {
        Self {
            source: Source::Fixed(Arc::new(keys)),
            cached: RwLock::new(None),
        }
    }

    /// Current key set, refetching once the cached copy has aged out.
    pub async fn get(&self) -> Result<Arc<JwkSet>, AuthError> {
        let (url, client, ttl) = match &self.source {
            Source::Fixed(keys) => return Ok(Arc::clone(keys)),
            Source::Remote { url, client, ttl } => (url, client, *ttl),
        };

        if let Some(cached) = self.cached.read().await.as_ref() {
            if cached.fetched_at.elapsed() < ttl {
                return Ok(Arc::clone(&cached.keys));
            }
        }

        let keys = Arc::new(Self::fetch(client, url).await?);
        *self.cached.write().await = Some(CachedSet {
            keys: Arc::clone(&keys),
            fetched_at: Instant::now(),
        });

        Ok(keys)
    }

    // Fetch failures normalize to the 401 class: a token that cannot be
    // checked is never accepted.
    async fn fetch(client: &reqwest::Client, url: &str) -> Result<JwkSet, AuthError> {
        let response = client
            .get(url)
            .send()
            .await
            .and_then(|resp| resp.error_for_status())
            .map_err(|err| {
                tracing::warn!(%url, error = %err, "JWKS fetch failed");
                AuthError::InvalidHeader
            })?;

        response.json::<JwkSet>().await.map_err(|err| {
            tracing::warn!(%url, error = %err, "JWKS response body invalid");
            AuthError::InvalidHeader
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_set() -> JwkSet {
        serde_json::from_str(
            r#"{
                "keys": [
                    {"kty": "RSA", "kid": "key-1", "use": "sig", "n": "abc", "e": "AQAB"},
                    {"kty": "RSA", "kid": "key-2", "n": "def", "e": "AQAB"}
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn parses_well_known_shape() {
        let set = sample_set();
        assert_eq!(set.keys.len(), 2);
        assert_eq!(set.keys[0].use_.as_deref(), Some("sig"));
        assert!(set.keys[1].alg.is_none());
    }

    #[test]
    fn find_matches_kid_exactly() {
        let set = sample_set();
        assert!(set.find("key-2").is_some());
        assert!(set.find("key-3").is_none());
        assert!(set.find("KEY-1").is_none());
    }

    #[tokio::test]
    async fn fixed_cache_serves_the_same_set() {
        let cache = JwksCache::with_fixed(sample_set());
        let first = cache.get().await.unwrap();
        let second = cache.get().await.unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }
}
