//! `about`: product and API information from the service content.

use anyhow::Result;
use tracing::info;

use crate::cancellation::{CancellationToken, cancellable};
use crate::formatters::{OutputFormat, get_formatter};

pub async fn run(
    config: vim25_config::Config,
    output_format: OutputFormat,
    cancel: &CancellationToken,
) -> Result<()> {
    let mut client = crate::commands::build_client_from_config(&config)?;
    info!("Connecting to {}", client.base_url());

    let content = cancellable(cancel, client.retrieve_service_content()).await?;

    print!("{}", get_formatter(output_format).format_about(&content.about)?);
    Ok(())
}
