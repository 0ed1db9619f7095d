//! `power-on` / `power-off`: start a power task on a virtual machine.

use anyhow::{Context, Result};
use tracing::info;
use vim25_client::ManagedObjectReference;

use crate::args::WaitArgs;
use crate::cancellation::{CancellationToken, cancellable};
use crate::formatters::{OutputFormat, TaskStartedOutput, get_formatter};

/// Requested power transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerAction {
    On,
    Off,
}

impl PowerAction {
    fn label(self) -> &'static str {
        match self {
            Self::On => "power on",
            Self::Off => "power off",
        }
    }
}

#[allow(clippy::too_many_arguments)]
pub async fn run(
    config: vim25_config::Config,
    action: PowerAction,
    vm: &str,
    host: Option<&str>,
    wait: WaitArgs,
    quiet: bool,
    output_format: OutputFormat,
    cancel: &CancellationToken,
) -> Result<()> {
    let vm = crate::commands::parse_reference(vm, "VirtualMachine")?;
    let host: Option<ManagedObjectReference> = host
        .map(|h| crate::commands::parse_reference(h, "HostSystem"))
        .transpose()?;

    let mut client = crate::commands::build_client_from_config(&config)?;
    info!(vm = %vm, "Starting {}", action.label());

    let result = async {
        let task = match action {
            PowerAction::On => cancellable(cancel, client.power_on_vm(&vm, host.as_ref())).await,
            PowerAction::Off => cancellable(cancel, client.power_off_vm(&vm)).await,
        }
        .with_context(|| format!("Failed to {} {vm}", action.label()))?;
        info!(task = %task, "Task started");

        let info = if wait.wait {
            let info = crate::commands::task::wait_for(&mut client, &task, &wait, quiet, cancel)
                .await
                .with_context(|| format!("Failed to {} {vm}", action.label()))?;
            Some(info)
        } else {
            None
        };
        Ok::<_, anyhow::Error>(TaskStartedOutput { task, info })
    }
    .await;
    crate::commands::finish(&mut client).await;
    let output = result?;

    print!(
        "{}",
        get_formatter(output_format).format_task_started(&output)?
    );
    Ok(())
}
