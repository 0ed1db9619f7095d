//! Centralized constants for the vim25 workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication.

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum allowed request timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

/// Default maximum number of retries for failed requests.
pub const DEFAULT_MAX_RETRIES: usize = 3;

/// Maximum allowed value for max_retries.
pub const MAX_MAX_RETRIES: usize = 10;

/// vim25 release announced in `SOAPAction` unless configured otherwise.
pub const DEFAULT_API_VERSION: &str = "8.0.1.0";

// =============================================================================
// Task & Event Defaults
// =============================================================================

/// Polling interval for task state checks in milliseconds.
pub const DEFAULT_TASK_POLL_INTERVAL_MS: u64 = 500;

/// Maximum time to wait for a task to finish in seconds.
pub const DEFAULT_TASK_TIMEOUT_SECS: u64 = 300;

/// Number of events returned by `events` unless asked otherwise.
pub const DEFAULT_EVENT_MAX_COUNT: i32 = 100;

// =============================================================================
// Configuration Files
// =============================================================================

/// Application name used for the config directory and keyring service.
pub const APP_NAME: &str = "vim25";

/// File name of the profile file inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.json";
