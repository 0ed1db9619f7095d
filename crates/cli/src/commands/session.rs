//! `session`: log in and show the resulting session.

use anyhow::{Context, Result};
use tracing::info;

use crate::cancellation::{CancellationToken, cancellable};
use crate::formatters::{OutputFormat, get_formatter};

pub async fn run(
    config: vim25_config::Config,
    output_format: OutputFormat,
    cancel: &CancellationToken,
) -> Result<()> {
    if config.auth.is_none() {
        anyhow::bail!("session requires a username and password (--username/--password or VIM25_USERNAME/VIM25_PASSWORD)");
    }

    let mut client = crate::commands::build_client_from_config(&config)?;
    let session = cancellable(cancel, client.login())
        .await
        .context("Login failed")?;
    info!(key_len = session.key.len(), "Session established");
    crate::commands::finish(&mut client).await;

    print!("{}", get_formatter(output_format).format_session(&session)?);
    Ok(())
}
