//! Session endpoints: `Login` and `Logout`.

use secrecy::SecretString;
use tracing::debug;

use crate::endpoints::{RequestContext, invoke};
use crate::error::{ClientError, Result};
use crate::soap::returnval;
use crate::types::requests::{LoginRequestType, Password, ThisRequestType};
use crate::types::{ManagedObjectReference, UserSession};

/// Log in on `session_manager`; returns the session and its cookie.
pub async fn login(
    ctx: &RequestContext<'_>,
    session_manager: &ManagedObjectReference,
    username: &str,
    password: &SecretString,
) -> Result<(UserSession, String)> {
    debug!("Logging in to vim25 as {}", username);

    let body = LoginRequestType {
        this: session_manager.clone(),
        user_name: username.to_string(),
        password: Password::new(password.clone()),
        locale: None,
    };
    let response = invoke(ctx, "Login", &body).await?;
    let session: UserSession = returnval(&response.element)?;

    let cookie = response.session_cookie.ok_or_else(|| {
        ClientError::InvalidResponse("Login response did not set a session cookie".to_string())
    })?;
    Ok((session, cookie))
}

/// End the current session.
pub async fn logout(
    ctx: &RequestContext<'_>,
    session_manager: &ManagedObjectReference,
) -> Result<()> {
    invoke(ctx, "Logout", &ThisRequestType::new(session_manager.clone())).await?;
    Ok(())
}
