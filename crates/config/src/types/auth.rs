//! Authentication types for vim25 configuration.
//!
//! Responsibilities:
//! - Define the username/password pair used for `Login`.
//! - Provide secure value storage (plain text or keyring).
//! - Handle serialization of secret values.
//!
//! Does NOT handle:
//! - The login flow itself (see client crate).
//! - Keyring entry creation/management (only retrieval).
//!
//! Invariants:
//! - All secret values use `secrecy::SecretString` to prevent accidental logging.
//! - Serialization includes secrets for config file persistence; secrecy is for runtime safety.
//! - `KEYRING_SERVICE` is the canonical service name for all keyring operations.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use crate::constants::APP_NAME;

/// Module for serializing SecretString as strings.
pub(crate) mod secret_string {
    use secrecy::{ExposeSecret, SecretString};
    use serde::{Deserialize as DeserializeTrait, Serialize as SerializeTrait};
    use serde::{Deserializer, Serializer};

    pub fn serialize<S>(secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        secret.expose_secret().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(SecretString::new(s.into()))
    }
}

/// Credentials for `SessionManager.Login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    pub username: String,
    #[serde(with = "secret_string")]
    pub password: SecretString,
}

/// Service name used for keyring storage.
pub const KEYRING_SERVICE: &str = APP_NAME;

/// A value that can be stored either in plain text or in the system keyring.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SecureValue {
    /// Value stored in the system keyring.
    Keyring {
        /// The account name in the keyring.
        keyring_account: String,
    },
    /// Value stored in plain text (as a SecretString).
    #[serde(with = "secret_string")]
    Plain(SecretString),
}

impl SecureValue {
    /// Resolve the secure value to a SecretString.
    ///
    /// If the value is stored in the keyring, it will be fetched.
    pub fn resolve(&self) -> Result<SecretString, keyring::Error> {
        match self {
            Self::Plain(secret) => Ok(secret.clone()),
            Self::Keyring { keyring_account } => {
                let entry = keyring::Entry::new(KEYRING_SERVICE, keyring_account)?;
                let password = entry.get_password()?;
                Ok(SecretString::new(password.into()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_secure_value_resolve_plain() {
        let secret = SecretString::new("test-secret".to_string().into());
        let val = SecureValue::Plain(secret.clone());
        let resolved = val.resolve().unwrap();
        assert_eq!(resolved.expose_secret(), secret.expose_secret());
    }

    #[test]
    fn test_auth_config_debug_does_not_expose_password() {
        let auth = AuthConfig {
            username: "administrator@vsphere.local".to_string(),
            password: SecretString::new("session-password-456".to_string().into()),
        };

        let debug_output = format!("{:?}", auth);

        assert!(!debug_output.contains("session-password-456"));
        assert!(debug_output.contains("administrator@vsphere.local"));
    }

    #[test]
    fn test_secure_value_keyring_not_exposed_in_debug() {
        let secure_value = SecureValue::Keyring {
            keyring_account: "vcenter-admin".to_string(),
        };

        let debug_output = format!("{:?}", secure_value);

        assert!(debug_output.contains("vcenter-admin"));
        assert!(debug_output.contains("Keyring"));
    }

    /// Serialization keeps the secret so profiles can be written back.
    #[test]
    fn test_auth_config_serialization_includes_password() {
        let auth = AuthConfig {
            username: "root".to_string(),
            password: SecretString::new("serializable-password".to_string().into()),
        };

        let json = serde_json::to_string(&auth).unwrap();
        assert!(json.contains("serializable-password"));

        let back: AuthConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.username, "root");
        assert_eq!(back.password.expose_secret(), "serializable-password");
    }
}
