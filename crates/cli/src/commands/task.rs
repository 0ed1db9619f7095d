//! `task`: show a task and optionally wait for it to finish.
//!
//! Also hosts the wait loop shared with the power commands.

use std::time::Duration;

use anyhow::{Context, Result};
use tracing::info;
use vim25_client::{ManagedObjectReference, TaskInfo, Vim25Client};
use vim25_config::constants::DEFAULT_TASK_POLL_INTERVAL_MS;

use crate::args::WaitArgs;
use crate::cancellation::{CancellationToken, cancellable};
use crate::formatters::{OutputFormat, get_formatter};
use crate::progress::TaskProgress;

/// Poll `task` until it finishes, drawing progress unless `quiet`.
pub(crate) async fn wait_for(
    client: &mut Vim25Client,
    task: &ManagedObjectReference,
    wait: &WaitArgs,
    quiet: bool,
    cancel: &CancellationToken,
) -> Result<TaskInfo> {
    let progress = TaskProgress::new(!quiet, format!("Waiting for {}", task.value));
    let mut on_progress = |percent: i32| progress.set_percent(percent);

    let info = cancellable(
        cancel,
        client.wait_for_task_with_progress(
            task,
            Duration::from_secs(wait.wait_timeout),
            Duration::from_millis(DEFAULT_TASK_POLL_INTERVAL_MS),
            Some(&mut on_progress),
        ),
    )
    .await?;

    progress.finish();
    Ok(info)
}

pub async fn run(
    config: vim25_config::Config,
    task: &str,
    wait: WaitArgs,
    quiet: bool,
    output_format: OutputFormat,
    cancel: &CancellationToken,
) -> Result<()> {
    let task = crate::commands::parse_reference(task, "Task")?;
    let mut client = crate::commands::build_client_from_config(&config)?;
    info!(task = %task, wait = wait.wait, "Reading task");

    let result = if wait.wait {
        wait_for(&mut client, &task, &wait, quiet, cancel).await
    } else {
        cancellable(cancel, client.task_info(&task)).await
    };
    crate::commands::finish(&mut client).await;
    let info = result.with_context(|| format!("Task {task}"))?;

    print!("{}", get_formatter(output_format).format_task(&info)?);
    Ok(())
}
