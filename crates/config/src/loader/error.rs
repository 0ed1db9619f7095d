//! Error types for configuration loading.
//!
//! Invariants:
//! - Variants name the offending variable, field or file.
//! - Dotenv errors never echo `.env` line contents, which may hold passwords.

use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

use crate::persistence::ConfigFileError;

/// Why a vim25 connection configuration could not be resolved.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },

    #[error("Endpoint URL is required. Set VIM25_URL, pass --url, or configure a profile.")]
    MissingBaseUrl,

    #[error("A password is required when a username is set (VIM25_PASSWORD or profile)")]
    MissingPassword,

    #[error("Unable to determine config directory: {0}")]
    ConfigDirUnavailable(String),

    #[error("Cannot read profile file {path}")]
    ConfigFileRead { path: PathBuf },

    #[error("Profile file {path} is not valid JSON")]
    ConfigFileParse { path: PathBuf },

    #[error("No profile named '{0}' in the profile file")]
    ProfileNotFound(String),

    #[error("Keyring error: {0}")]
    Keyring(#[from] keyring::Error),

    #[error("Invalid timeout: {message}")]
    InvalidTimeout { message: String },

    #[error("Invalid max_retries: {message}")]
    InvalidMaxRetries { message: String },

    /// Syntax error in `.env`; only the byte offset is kept.
    #[error(
        "Failed to parse .env file at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    DotenvParse { error_index: usize },

    #[error("Failed to read .env file: {kind}")]
    DotenvIo { kind: ErrorKind },

    #[error("Failed to load .env file. Hint: set DOTENV_DISABLED=1 to skip .env loading")]
    DotenvUnknown,
}

impl From<ConfigFileError> for ConfigError {
    fn from(error: ConfigFileError) -> Self {
        match error {
            ConfigFileError::Read { path, .. } => ConfigError::ConfigFileRead { path },
            ConfigFileError::Parse { path, .. } => ConfigError::ConfigFileParse { path },
        }
    }
}
