//! CLI command implementations.

pub mod about;
pub mod events;
pub mod inventory;
pub mod power;
pub mod session;
pub mod task;
pub mod time;

use anyhow::{Context, Result};
use vim25_client::{ManagedObjectReference, MetricsCollector, Vim25Client};
use vim25_config::Config;

/// Build a client for `config` with metrics recording enabled.
pub fn build_client_from_config(config: &Config) -> Result<Vim25Client> {
    Vim25Client::builder()
        .from_config(config)
        .metrics(MetricsCollector::new())
        .build()
        .context("Failed to build client")
}

/// Parse a managed object reference given either as `Type:value` or as a bare
/// id, in which case `default_type` is assumed.
pub fn parse_reference(input: &str, default_type: &str) -> Result<ManagedObjectReference> {
    let input = input.trim();
    if input.is_empty() {
        anyhow::bail!("{default_type} reference must not be empty");
    }
    if input.contains(':') {
        return input
            .parse()
            .with_context(|| format!("Invalid reference '{input}', expected Type:value"));
    }
    Ok(ManagedObjectReference::new(default_type, input))
}

/// Log out when the command held a session. Failures are only logged.
pub async fn finish(client: &mut Vim25Client) {
    if let Err(e) = client.logout().await {
        tracing::warn!("Logout failed: {}", e);
    }
}
