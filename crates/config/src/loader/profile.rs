//! Profile file loading for configuration.
//!
//! Invariants:
//! - Profile settings are applied before environment variables (env vars take precedence).
//! - Missing profiles (or a missing file) are recorded for later error handling in build().

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::persistence::{default_config_path, read_config_file};
use crate::types::ProfileConfig;

/// Apply profile configuration from a profile file to the loader.
///
/// If the profile is not found, this records the missing profile name
/// for later error handling in `build()`.
pub fn apply_profile(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    let profile_name = match loader.profile_name() {
        Some(name) => name.clone(),
        None => return Ok(()),
    };

    let config_path = if let Some(path) = loader.config_path() {
        path.clone()
    } else {
        default_config_path().map_err(|e| ConfigError::ConfigDirUnavailable(e.to_string()))?
    };

    if !config_path.exists() {
        tracing::debug!(path = %config_path.display(), "Config file not found");
        loader.set_profile_missing(Some(profile_name));
        return Ok(());
    }

    let file = read_config_file(&config_path)?;
    let Some(profile) = file.profiles.get(&profile_name) else {
        loader.set_profile_missing(Some(profile_name));
        return Ok(());
    };

    tracing::debug!(profile = %profile_name, "Applying profile");
    apply_profile_config(loader, profile)
}

/// Apply profile configuration values to the loader.
fn apply_profile_config(
    loader: &mut ConfigLoader,
    profile: &ProfileConfig,
) -> Result<(), ConfigError> {
    if let Some(url) = &profile.base_url {
        loader.set_base_url(Some(url.clone()));
    }
    if let Some(username) = &profile.username {
        loader.set_username(Some(username.clone()));
    }
    if let Some(password) = &profile.password {
        loader.set_password(Some(password.resolve()?));
    }
    if let Some(skip) = profile.skip_verify {
        loader.set_skip_verify(Some(skip));
    }
    if let Some(secs) = profile.timeout_seconds {
        loader.set_timeout(Some(std::time::Duration::from_secs(secs)));
    }
    if let Some(retries) = profile.max_retries {
        loader.set_max_retries(Some(retries));
    }
    if let Some(version) = &profile.api_version {
        loader.set_api_version(Some(version.clone()));
    }
    Ok(())
}
