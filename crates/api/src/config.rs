//! Configuration loaded from environment variables.

use std::env;
use std::net::SocketAddr;

use axum::http::HeaderValue;
use orchestrator::DEFAULT_REQUESTS_PER_HOUR;
use thiserror::Error;

/// Default server bind address.
pub const DEFAULT_ADDR: &str = "127.0.0.1:8080";

/// Default location of the condition catalog file.
pub const DEFAULT_CATALOG_PATH: &str = "data/conditions.json";

/// Server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address.
    pub addr: SocketAddr,
    /// Path to the condition catalog JSON file.
    pub catalog_path: String,
    /// Requests allowed per rolling hour, shared across all clients.
    ///
    /// The 429 body keeps the fixed
    /// [`RATE_LIMIT_MESSAGE`](orchestrator::RATE_LIMIT_MESSAGE) wording,
    /// which names the default of 100, even when this is tuned.
    pub rate_limit_per_hour: u32,
    /// Browser origin allowed to call the API; no CORS layer when unset.
    pub allowed_origin: Option<HeaderValue>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Description | Default |
    /// |----------|-------------|---------|
    /// | `MEDASSIST_ADDR` | Server bind address | `127.0.0.1:8080` |
    /// | `MEDASSIST_CATALOG` | Condition catalog JSON file | `data/conditions.json` |
    /// | `MEDASSIST_RATE_LIMIT_PER_HOUR` | Requests per hour, all clients | `100` |
    /// | `MEDASSIST_ALLOWED_ORIGIN` | CORS origin to allow | (no CORS layer) |
    pub fn from_env() -> Result<Self, ConfigError> {
        let addr = env::var("MEDASSIST_ADDR")
            .unwrap_or_else(|_| DEFAULT_ADDR.to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidAddr)?;

        let catalog_path =
            env::var("MEDASSIST_CATALOG").unwrap_or_else(|_| DEFAULT_CATALOG_PATH.to_string());

        let rate_limit_per_hour = env::var("MEDASSIST_RATE_LIMIT_PER_HOUR")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_REQUESTS_PER_HOUR);

        let allowed_origin = match env::var("MEDASSIST_ALLOWED_ORIGIN") {
            Ok(origin) => Some(origin.parse().map_err(|_| ConfigError::InvalidOrigin)?),
            Err(_) => None,
        };

        Ok(Self {
            addr,
            catalog_path,
            rate_limit_per_hour,
            allowed_origin,
        })
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid MEDASSIST_ADDR format")]
    InvalidAddr,

    #[error("Invalid MEDASSIST_ALLOWED_ORIGIN value")]
    InvalidOrigin,
}
