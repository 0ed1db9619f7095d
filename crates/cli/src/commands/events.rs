//! `events`: query recent events from the event manager.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use tracing::info;
use vim25_client::EventFilterSpec;
use vim25_client::types::{
    EventFilterSpecByEntity, EventFilterSpecByTime, EventFilterSpecRecursionOption,
};

use crate::cancellation::{CancellationToken, cancellable};
use crate::formatters::{OutputFormat, get_formatter};
use crate::progress::Spinner;

/// Event query options from the command line.
#[derive(Debug, Clone, Default)]
pub struct EventsArgs {
    pub max_count: i32,
    pub types: Vec<String>,
    pub since: Option<String>,
    pub entity: Option<String>,
}

fn parse_since(since: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(since.trim())
        .map(|t| t.with_timezone(&Utc))
        .with_context(|| {
            format!("Invalid --since '{since}', expected RFC 3339 (e.g. 2024-05-01T12:00:00Z)")
        })
}

/// Translate the command line options into a filter.
pub fn build_filter(args: &EventsArgs) -> Result<EventFilterSpec> {
    if args.max_count <= 0 {
        anyhow::bail!("--max-count must be greater than 0 (got {})", args.max_count);
    }

    let entity = args
        .entity
        .as_deref()
        .map(|e| crate::commands::parse_reference(e, "VirtualMachine"))
        .transpose()?
        .map(|entity| EventFilterSpecByEntity {
            entity,
            recursion: EventFilterSpecRecursionOption::All,
        });

    let time = args
        .since
        .as_deref()
        .map(parse_since)
        .transpose()?
        .map(|begin| EventFilterSpecByTime {
            begin_time: Some(begin),
            end_time: None,
        });

    Ok(EventFilterSpec {
        entity,
        time,
        r#type: args.types.clone(),
        max_count: Some(args.max_count),
        ..EventFilterSpec::default()
    })
}

pub async fn run(
    config: vim25_config::Config,
    args: EventsArgs,
    quiet: bool,
    output_format: OutputFormat,
    cancel: &CancellationToken,
) -> Result<()> {
    let filter = build_filter(&args)?;

    let mut client = crate::commands::build_client_from_config(&config)?;
    info!(max_count = args.max_count, "Querying events");

    let spinner = Spinner::new(!quiet, "Querying events...");
    let events = cancellable(cancel, client.query_events(&filter))
        .await
        .context("Failed to query events");
    crate::commands::finish(&mut client).await;
    drop(spinner);
    let mut events = events?;
    events.sort_by_key(|e| std::cmp::Reverse(e.root().key));

    print!("{}", get_formatter(output_format).format_events(&events)?);
    Ok(())
}
