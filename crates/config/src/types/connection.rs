//! Connection configuration types for vim25 endpoints.
//!
//! Responsibilities:
//! - Define connection settings (URL, TLS verification, timeout, retries, API version).
//! - Define the main `Config` structure combining connection and auth.
//! - Provide serialization helpers for `Duration`.
//!
//! Does NOT handle:
//! - Configuration loading from files/env (see `loader` module).
//! - Actual network connections (see client crate).
//!
//! Invariants:
//! - All duration fields are serialized as seconds (integers).
//! - `auth` is `None` for anonymous access (service content only).

use crate::constants::{DEFAULT_API_VERSION, DEFAULT_MAX_RETRIES, DEFAULT_TIMEOUT_SECS};
use crate::types::auth::AuthConfig;
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Module for serializing Duration as seconds (integer).
mod duration_seconds {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

/// Connection configuration for a vCenter Server or ESXi host.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// Base URL of the endpoint (e.g., https://vcenter.example.com)
    pub base_url: String,
    /// Whether to skip TLS verification (for self-signed certificates)
    pub skip_verify: bool,
    /// Request timeout (serialized as seconds)
    #[serde(with = "duration_seconds")]
    pub timeout: Duration,
    /// Maximum number of retries for transient failures
    pub max_retries: usize,
    /// vim25 release sent in `SOAPAction`
    #[serde(default = "default_api_version")]
    pub api_version: String,
}

pub(crate) fn default_api_version() -> String {
    DEFAULT_API_VERSION.to_string()
}

impl ConnectionConfig {
    /// Connection settings with defaults for everything but the URL.
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            skip_verify: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_retries: DEFAULT_MAX_RETRIES,
            api_version: default_api_version(),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Connection settings
    pub connection: ConnectionConfig,
    /// Login credentials; `None` for anonymous access
    pub auth: Option<AuthConfig>,
}

impl Config {
    /// Create a config with the specified base URL and username/password.
    pub fn with_credentials(base_url: String, username: String, password: SecretString) -> Self {
        Self {
            connection: ConnectionConfig::new(base_url),
            auth: Some(AuthConfig { username, password }),
        }
    }

    /// Create a config without credentials.
    pub fn anonymous(base_url: String) -> Self {
        Self {
            connection: ConnectionConfig::new(base_url),
            auth: None,
        }
    }
}
