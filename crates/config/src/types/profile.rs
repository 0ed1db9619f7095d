//! Named connection profiles.
//!
//! Invariants:
//! - All fields are optional to allow partial profile definitions.
//! - The password uses `SecureValue` for plain or keyring storage.

use crate::types::auth::SecureValue;
use serde::{Deserialize, Serialize};

/// Profile configuration for storing named connection profiles.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    /// Base URL of the vCenter Server or ESXi host
    pub base_url: Option<String>,
    /// Username for `Login`
    pub username: Option<String>,
    /// Password for `Login`
    pub password: Option<SecureValue>,
    /// Whether to skip TLS verification
    pub skip_verify: Option<bool>,
    /// Request timeout in seconds
    pub timeout_seconds: Option<u64>,
    /// Maximum number of retries for transient failures
    pub max_retries: Option<usize>,
    /// vim25 release sent in `SOAPAction`
    pub api_version: Option<String>,
}
