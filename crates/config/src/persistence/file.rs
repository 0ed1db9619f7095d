//! On-disk profile file.
//!
//! ```json
//! {
//!   "profiles": {
//!     "lab": {
//!       "base_url": "https://vcenter.lab.local",
//!       "username": "administrator@vsphere.local",
//!       "password": { "keyring_account": "lab-admin" },
//!       "skip_verify": true
//!     }
//!   }
//! }
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::types::ProfileConfig;

/// Representation of the config file on disk.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Named profiles for different endpoints.
    #[serde(default)]
    pub profiles: BTreeMap<String, ProfileConfig>,
}

/// Errors that can occur when reading the config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigFileError {
    #[error("Failed to read config file at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Reads and parses the config file from disk.
pub fn read_config_file(path: &Path) -> Result<ConfigFile, ConfigFileError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigFileError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;

    serde_json::from_str(&content).map_err(|e| ConfigFileError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_config_file_with_profiles() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"profiles":{{"lab":{{"base_url":"https://vc.lab","timeout_seconds":45}}}}}}"#
        )
        .unwrap();

        let parsed = read_config_file(file.path()).unwrap();
        let lab = &parsed.profiles["lab"];
        assert_eq!(lab.base_url.as_deref(), Some("https://vc.lab"));
        assert_eq!(lab.timeout_seconds, Some(45));
    }

    #[test]
    fn test_read_config_file_empty_object() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{{}}").unwrap();

        let parsed = read_config_file(file.path()).unwrap();
        assert!(parsed.profiles.is_empty());
    }

    #[test]
    fn test_read_config_file_parse_error() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{{ invalid json }}").unwrap();

        let err = read_config_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigFileError::Parse { .. }));
    }

    #[test]
    fn test_read_config_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_config_file(&dir.path().join("absent.json")).unwrap_err();
        match err {
            ConfigFileError::Read { source, .. } => {
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound)
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
