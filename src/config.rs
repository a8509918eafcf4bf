//! Backend endpoint configuration.
//!
//! Everything that needs to reach the backend receives a `BackendConfig`
//! at construction time; no component reads the environment directly.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default backend base URL for local development.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";

/// Default timeout for extraction requests (30 seconds).
pub const DEFAULT_EXTRACT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default timeout for health checks (5 seconds).
pub const DEFAULT_HEALTH_TIMEOUT: Duration = Duration::from_secs(5);

/// Errors raised while building a backend configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

/// Configuration for the extraction backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Backend base URL, e.g. `http://localhost:8080/api`.
    pub base_url: String,
    /// Timeout for extraction requests.
    pub extract_timeout: Duration,
    /// Timeout for health checks.
    pub health_timeout: Duration,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            extract_timeout: DEFAULT_EXTRACT_TIMEOUT,
            health_timeout: DEFAULT_HEALTH_TIMEOUT,
        }
    }
}

impl BackendConfig {
    /// Create a configuration for the given base URL.
    ///
    /// The URL is validated up front and trailing slashes are stripped so
    /// endpoint paths can be appended uniformly.
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let parsed = url::Url::parse(base_url).map_err(|e| ConfigError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(ConfigError::InvalidBaseUrl {
                url: base_url.to_string(),
                reason: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            ..Self::default()
        })
    }

    /// Set the extraction request timeout.
    pub fn with_extract_timeout(mut self, timeout: Duration) -> Self {
        self.extract_timeout = timeout;
        self
    }

    /// Set the health check timeout.
    pub fn with_health_timeout(mut self, timeout: Duration) -> Self {
        self.health_timeout = timeout;
        self
    }
}
