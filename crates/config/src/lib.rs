//! Configuration management for vim25 clients.
//!
//! This crate provides types and loaders for managing vCenter/ESXi connection
//! configuration from profile files, environment variables and flags.

pub mod constants;
mod loader;
pub mod persistence;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, env_var_or_none};
pub use persistence::{ConfigFile, ConfigFileError, default_config_path, read_config_file};
pub use types::{AuthConfig, Config, ConnectionConfig, KEYRING_SERVICE, ProfileConfig, SecureValue};
