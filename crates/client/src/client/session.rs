//! Client-level session management and `ServiceInstance` methods.
//!
//! # What this module does NOT handle:
//! - Session cookie storage (handled by [`SessionManager`](crate::auth::SessionManager))
//! - Direct SOAP calls (handled by endpoint functions in `endpoints/`)
//!
//! # Invariants
//! - Methods that may log in require `&mut self`
//! - Service content is fetched once and cached for the client's lifetime
//! - Without credentials no login is attempted; calls go out without a cookie

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::client::Vim25Client;
use crate::endpoints;
use crate::error::{ClientError, Result};
use crate::types::{ManagedObjectReference, ServiceContent, UserSession};

impl Vim25Client {
    /// Log in if credentials are configured and no session is held.
    pub(crate) async fn ensure_session(&mut self) -> Result<()> {
        if self.session_manager.has_credentials() && !self.session_manager.is_logged_in() {
            self.login().await?;
        }
        Ok(())
    }

    /// Whether a session cookie is held.
    pub fn is_logged_in(&self) -> bool {
        self.session_manager.is_logged_in()
    }

    /// The session established by the last login.
    pub fn user_session(&self) -> Option<&UserSession> {
        self.session_manager.user_session()
    }

    /// Log in with the configured credentials and store the session cookie.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::AuthFailed`] if no credentials are configured,
    /// and [`ClientError::Fault`] with `InvalidLogin` if the server rejects them.
    pub async fn login(&mut self) -> Result<UserSession> {
        let credentials = self
            .session_manager
            .credentials()
            .cloned()
            .ok_or_else(|| ClientError::AuthFailed("no credentials configured".to_string()))?;
        let session_manager = self
            .manager("sessionManager", |sc| sc.session_manager.as_ref())
            .await?;

        let (session, cookie) = endpoints::login(
            &self.request_context(),
            &session_manager,
            &credentials.username,
            &credentials.password,
        )
        .await?;

        info!(user = %session.user_name, "Logged in to {}", self.base_url);
        self.session_manager.set_session(cookie, session.clone());
        Ok(session)
    }

    /// End the current session. Does nothing when not logged in.
    pub async fn logout(&mut self) -> Result<()> {
        if !self.session_manager.is_logged_in() {
            return Ok(());
        }
        let session_manager = self
            .manager("sessionManager", |sc| sc.session_manager.as_ref())
            .await?;

        let result = endpoints::logout(&self.request_context(), &session_manager).await;
        self.session_manager.clear_session();
        match result {
            Err(e) if e.is_not_authenticated() => {
                debug!("Session already gone at logout");
                Ok(())
            }
            other => other,
        }
    }

    /// Fetch the service content; the first successful result is cached.
    pub async fn retrieve_service_content(&mut self) -> Result<ServiceContent> {
        if let Some(content) = &self.service_content {
            return Ok(content.clone());
        }

        let content = endpoints::retrieve_service_content(&self.request_context()).await?;
        debug!(
            "Connected to {} (API {})",
            content.about.full_name, content.about.api_version
        );
        self.service_content = Some(content.clone());
        Ok(content)
    }

    /// Server clock.
    pub async fn current_time(&mut self) -> Result<DateTime<Utc>> {
        crate::retry_call!(self, __ctx, endpoints::current_time(&__ctx).await)
    }

    /// Reference to a singleton manager from the service content.
    ///
    /// Returns [`ClientError::NotFound`] when the endpoint does not provide it.
    pub(crate) async fn manager(
        &mut self,
        name: &str,
        select: fn(&ServiceContent) -> Option<&ManagedObjectReference>,
    ) -> Result<ManagedObjectReference> {
        let content = self.retrieve_service_content().await?;
        select(&content)
            .cloned()
            .ok_or_else(|| ClientError::NotFound(format!("{name} is not available on this endpoint")))
    }
}
