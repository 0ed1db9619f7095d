//! `time`: the server clock next to the local clock.

use anyhow::Result;

use crate::cancellation::{CancellationToken, cancellable};
use crate::formatters::{OutputFormat, ServerTimeOutput, get_formatter};

pub async fn run(
    config: vim25_config::Config,
    output_format: OutputFormat,
    cancel: &CancellationToken,
) -> Result<()> {
    let mut client = crate::commands::build_client_from_config(&config)?;

    let server_time = cancellable(cancel, client.current_time()).await;
    crate::commands::finish(&mut client).await;
    let output = ServerTimeOutput::new(server_time?, chrono::Utc::now());

    print!("{}", get_formatter(output_format).format_time(&output)?);
    Ok(())
}
