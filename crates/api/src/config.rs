//! API configuration management.
//!
//! Loads configuration from environment variables with sensible defaults
//! for local development.
//!
//! # Environment Variables
//!
//! ## Required
//! - `CONSUMERS_DATABASE_URL` - `PostgreSQL` connection string
//!   (falls back to `DATABASE_URL`)
//!
//! ## Optional
//! - `CONSUMERS_HOST` - Bind address (default: 127.0.0.1)
//! - `CONSUMERS_PORT` - Listen port (default: 8080)
//! - `SENTRY_DSN` - Sentry error tracking DSN (disabled when unset)
//! - `SENTRY_ENVIRONMENT` - Sentry environment name
//! - `SENTRY_SAMPLE_RATE` - Sentry error sample rate (default: 1.0)
//! - `SENTRY_TRACES_SAMPLE_RATE` - Sentry tracing sample rate (default: 1.0)

use std::net::{IpAddr, SocketAddr};

use secrecy::SecretString;
use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is missing.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),

    /// An environment variable has an invalid value.
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// API application configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// `PostgreSQL` database connection URL (contains password)
    pub database_url: SecretString,

    /// IP address to bind the server to
    pub host: IpAddr,

    /// Port to listen on
    pub port: u16,

    /// Sentry DSN for error tracking (None disables Sentry)
    pub sentry_dsn: Option<String>,

    /// Sentry environment name (e.g. "production", "staging")
    pub sentry_environment: Option<String>,

    /// Sentry error event sample rate (0.0 to 1.0)
    pub sentry_sample_rate: f32,

    /// Sentry performance tracing sample rate (0.0 to 1.0)
    pub sentry_traces_sample_rate: f32,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    ///
    /// Reads `.env` file if present (via dotenvy).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingEnvVar` if the database URL is not set,
    /// or `ConfigError::InvalidEnvVar` if the host or port fail to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if it exists (ignore errors in production)
        let _ = dotenvy::dotenv();

        let database_url = get_database_url("CONSUMERS_DATABASE_URL")?;

        let host = get_env_or_default("CONSUMERS_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("CONSUMERS_HOST".to_string(), e.to_string()))?;

        let port = get_env_or_default("CONSUMERS_PORT", "8080")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("CONSUMERS_PORT".to_string(), e.to_string()))?;

        let sentry_dsn = get_optional_env("SENTRY_DSN");
        let sentry_environment = get_optional_env("SENTRY_ENVIRONMENT");
        let sentry_sample_rate = get_sample_rate("SENTRY_SAMPLE_RATE");
        let sentry_traces_sample_rate = get_sample_rate("SENTRY_TRACES_SAMPLE_RATE");

        Ok(Self {
            database_url,
            host,
            port,
            sentry_dsn,
            sentry_environment,
            sentry_sample_rate,
            sentry_traces_sample_rate,
        })
    }

    /// Get the socket address to bind to.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Get the database URL, checking the service-specific variable first
/// and falling back to the shared `DATABASE_URL`.
fn get_database_url(primary_key: &str) -> Result<SecretString, ConfigError> {
    std::env::var(primary_key)
        .or_else(|_| std::env::var("DATABASE_URL"))
        .map(SecretString::from)
        .map_err(|_| ConfigError::MissingEnvVar(primary_key.to_string()))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parse a sample rate variable, defaulting to 1.0 when unset or invalid.
fn get_sample_rate(key: &str) -> f32 {
    get_optional_env(key)
        .and_then(|s| s.parse().ok())
        .unwrap_or(1.0)
}
