//! Profile file location and parsing.
//!
//! Responsibilities:
//! - Resolve the default configuration file path.
//! - Read and parse the JSON profile file.
//!
//! Does NOT handle:
//! - Merging profile values with the environment (see `loader`).
//! - Writing the profile file.

mod file;
mod path;

pub use file::{ConfigFile, ConfigFileError, read_config_file};
pub use path::default_config_path;
