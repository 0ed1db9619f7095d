//! Credentials and session cookie management.
//!
//! vim25 sessions are identified by the `vmware_soap_session` cookie that
//! `Login` sets. The cookie is kept as a secret and replayed on every call.

use secrecy::{ExposeSecret, SecretString};

use crate::types::UserSession;

/// Name of the session cookie set by `SessionManager.Login`.
pub const SESSION_COOKIE: &str = "vmware_soap_session";

/// Username and password used for `Login`.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: SecretString,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: SecretString) -> Self {
        Self {
            username: username.into(),
            password,
        }
    }
}

/// Tracks the current session cookie and the credentials to renew it.
#[derive(Debug, Default)]
pub struct SessionManager {
    credentials: Option<Credentials>,
    cookie: Option<SecretString>,
    user_session: Option<UserSession>,
}

impl SessionManager {
    /// Create a session manager; without credentials calls are made anonymously.
    pub fn new(credentials: Option<Credentials>) -> Self {
        Self {
            credentials,
            cookie: None,
            user_session: None,
        }
    }

    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    pub fn has_credentials(&self) -> bool {
        self.credentials.is_some()
    }

    /// Whether a session cookie is held.
    pub fn is_logged_in(&self) -> bool {
        self.cookie.is_some()
    }

    /// Cookie value to send back, as received (quotes included).
    pub fn session_cookie(&self) -> Option<&str> {
        self.cookie.as_ref().map(|c| c.expose_secret())
    }

    /// Store the session established by a successful `Login`.
    pub fn set_session(&mut self, cookie: String, user_session: UserSession) {
        self.cookie = Some(SecretString::new(cookie.into()));
        self.user_session = Some(user_session);
    }

    /// The session returned by the last `Login`.
    pub fn user_session(&self) -> Option<&UserSession> {
        self.user_session.as_ref()
    }

    /// Forget the current session (forces a new `Login`).
    pub fn clear_session(&mut self) {
        self.cookie = None;
        self.user_session = None;
    }
}

/// Extract the session cookie value from a `Set-Cookie` header.
///
/// `vmware_soap_session="52c2..."; Path=/; HttpOnly; Secure;` yields
/// `"52c2..."`, quotes kept.
pub fn parse_session_cookie(set_cookie: &str) -> Option<String> {
    let first = set_cookie.split(';').next()?.trim();
    let (name, value) = first.split_once('=')?;
    if name.trim() != SESSION_COOKIE || value.trim().is_empty() {
        return None;
    }
    Some(value.trim().to_string())
}
