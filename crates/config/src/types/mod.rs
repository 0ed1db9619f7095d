//! Configuration type definitions.
//!
//! Responsibilities:
//! - Define configuration types for authentication, connections and profiles.
//! - Provide serialization helpers for sensitive types (secrets, durations).
//!
//! Does NOT handle:
//! - Configuration loading from files or environment variables (see `loader` module).
//! - Actual network connections or authentication flows (see client crate).
//!
//! Invariants:
//! - All secret types use `secrecy::SecretString` to prevent accidental logging.
//! - `KEYRING_SERVICE` is the canonical service name for all keyring operations.

mod auth;
pub(crate) mod connection;
mod profile;

pub use auth::{AuthConfig, KEYRING_SERVICE, SecureValue};
pub use connection::{Config, ConnectionConfig};
pub use profile::ProfileConfig;
