//! Main vim25 client and API methods.
//!
//! This module provides the primary [`Vim25Client`] for calling vim25 methods
//! on a vCenter Server or ESXi host. It handles login and session renewal.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `session`: Login, logout and service content
//! - `property`: Property collector methods
//! - `view`: Container views and inventory listing
//! - `events`: Event queries
//! - `tasks`: VM power operations and task polling
//!
//! # What this module does NOT handle:
//! - SOAP encoding and HTTP retries (delegated to [`crate::endpoints`])
//! - Session cookie storage (delegated to [`crate::auth::SessionManager`])
//!
//! # Invariants
//! - A `NotAuthenticated` fault clears the session, logs in again and retries
//!   the call once, but only when credentials are configured
//! - The `retry_call!` macro centralizes this retry pattern across all API methods

pub mod builder;
mod events;
mod property;
mod session;
mod tasks;
mod view;

use std::time::Duration;

use crate::auth::SessionManager;
use crate::endpoints::RequestContext;
use crate::metrics::MetricsCollector;
use crate::types::ServiceContent;

pub use vim25_config::constants::DEFAULT_API_VERSION;

/// Wrap an async API call with automatic re-login on `NotAuthenticated`.
///
/// `$ctx` is bound to a fresh [`RequestContext`] before each attempt, so the
/// retried call carries the new session cookie.
///
/// # Usage
///
/// ```ignore
/// retry_call!(self, __ctx, endpoints::some_method(&__ctx, &mor, arg).await)
/// ```
#[macro_export]
macro_rules! retry_call {
    ($self:expr, $ctx:ident, $call:expr) => {{
        $self.ensure_session().await?;
        let result = {
            let $ctx = $self.request_context();
            $call
        };

        match result {
            Err(e) if e.is_not_authenticated() && $self.session_manager.has_credentials() => {
                ::tracing::debug!("Session not authenticated, logging in again...");
                $self.session_manager.clear_session();
                $self.login().await?;
                let $ctx = $self.request_context();
                $call
            }
            other => other,
        }
    }};
}

/// vim25 SOAP client.
///
/// # Creating a Client
///
/// ```rust,ignore
/// use vim25_client::{Credentials, Vim25Client};
/// use secrecy::SecretString;
///
/// let mut client = Vim25Client::builder()
///     .base_url("https://vcenter.example.com".to_string())
///     .credentials(Credentials::new(
///         "administrator@vsphere.local",
///         SecretString::new("secret".to_string().into()),
///     ))
///     .build()?;
/// let about = client.retrieve_service_content().await?.about;
/// ```
///
/// Methods that need a session log in lazily on first use.
#[derive(Debug)]
pub struct Vim25Client {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) api_version: String,
    pub(crate) session_manager: SessionManager,
    pub(crate) max_retries: usize,
    pub(crate) timeout: Duration,
    pub(crate) metrics: Option<MetricsCollector>,
    pub(crate) service_content: Option<ServiceContent>,
}

impl Vim25Client {
    /// Create a new client builder.
    pub fn builder() -> builder::Vim25ClientBuilder {
        builder::Vim25ClientBuilder::new()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// vim25 release sent in `SOAPAction`.
    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    pub(crate) fn request_context(&self) -> RequestContext<'_> {
        RequestContext {
            http: &self.http,
            base_url: &self.base_url,
            api_version: &self.api_version,
            session_cookie: self.session_manager.session_cookie(),
            max_retries: self.max_retries,
            timeout: self.timeout,
            metrics: self.metrics.as_ref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::Credentials;
    use crate::error::ClientError;
    use secrecy::SecretString;

    fn credentials() -> Credentials {
        Credentials::new("admin", SecretString::new("secret".to_string().into()))
    }

    #[test]
    fn test_client_builder_with_credentials() {
        let client = Vim25Client::builder()
            .base_url("https://vcenter.local".to_string())
            .credentials(credentials())
            .build()
            .unwrap();

        assert_eq!(client.base_url(), "https://vcenter.local");
        assert_eq!(client.api_version(), DEFAULT_API_VERSION);
        assert!(client.session_manager.has_credentials());
        assert!(!client.is_logged_in());
    }

    #[test]
    fn test_client_builder_missing_base_url() {
        let client = Vim25Client::builder().credentials(credentials()).build();

        assert!(matches!(client.unwrap_err(), ClientError::InvalidUrl(_)));
    }

    #[test]
    fn test_client_builder_without_credentials() {
        let client = Vim25Client::builder()
            .base_url("https://esx01.local/".to_string())
            .build()
            .unwrap();

        assert_eq!(client.base_url(), "https://esx01.local");
        assert!(!client.session_manager.has_credentials());
    }

    #[test]
    fn test_request_context_carries_settings() {
        let mut client = Vim25Client::builder()
            .base_url("https://vcenter.local".to_string())
            .api_version("7.0.3.0")
            .max_retries(5)
            .timeout(Duration::from_secs(12))
            .build()
            .unwrap();

        let ctx = client.request_context();
        assert_eq!(ctx.api_version, "7.0.3.0");
        assert_eq!(ctx.max_retries, 5);
        assert_eq!(ctx.timeout, Duration::from_secs(12));
        assert!(ctx.session_cookie.is_none());

        client.session_manager.set_session(
            "\"abc\"".to_string(),
            crate::types::UserSession {
                key: "k".to_string(),
                user_name: "u".to_string(),
                full_name: "U".to_string(),
                login_time: chrono::Utc::now(),
                last_active_time: chrono::Utc::now(),
                locale: "en".to_string(),
                message_locale: "en".to_string(),
                extension_session: None,
                ip_address: None,
                user_agent: None,
                call_count: None,
            },
        );
        assert_eq!(client.request_context().session_cookie, Some("\"abc\""));
    }
}
