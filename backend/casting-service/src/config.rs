//! Configuration for the casting service.
//!
//! Settings load from environment variables, with a `.env` file picked up
//! in debug builds for local development.

use anyhow::{Context, Result};
use std::env;

/// Application settings
#[derive(Debug, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub database: DatabaseSettings,
    pub auth: AuthSettings,
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        if cfg!(debug_assertions) {
            dotenvy::dotenv().ok();
        }

        Ok(Settings {
            server: ServerSettings::from_env()?,
            database: DatabaseSettings::from_env()?,
            auth: AuthSettings::from_env()?,
        })
    }
}

/// HTTP server settings
#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl ServerSettings {
    fn from_env() -> Result<Self> {
        Ok(Self {
            host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("Invalid SERVER_PORT")?,
        })
    }
}

/// Database connection settings
#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
}

impl DatabaseSettings {
    fn from_env() -> Result<Self> {
        Ok(Self {
            url: env::var("DATABASE_URL").context("DATABASE_URL must be set")?,
            max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .context("Invalid DATABASE_MAX_CONNECTIONS")?,
        })
    }
}

/// Token verification settings
#[derive(Debug, Clone)]
pub struct AuthSettings {
    /// Issuer domain; tokens are checked against `https://<domain>/` and
    /// keys fetched from its well-known JWKS endpoint.
    pub domain: String,
    pub audience: String,
    /// Accepted signing algorithms, comma separated in the environment.
    pub algorithms: Vec<String>,
    pub jwks_ttl_seconds: u64,
}

impl AuthSettings {
    fn from_env() -> Result<Self> {
        let algorithms = env::var("AUTH_ALGORITHMS")
            .unwrap_or_else(|_| "RS256".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(Self {
            domain: env::var("AUTH_DOMAIN").context("AUTH_DOMAIN must be set")?,
            audience: env::var("AUTH_AUDIENCE").context("AUTH_AUDIENCE must be set")?,
            algorithms,
            jwks_ttl_seconds: env::var("JWKS_CACHE_TTL_SECONDS")
                .unwrap_or_else(|_| "3600".to_string())
                .parse()
                .context("Invalid JWKS_CACHE_TTL_SECONDS")?,
        })
    }
}
