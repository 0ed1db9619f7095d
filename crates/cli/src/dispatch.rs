//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to the matching command handler.
//! - Pass the cancellation token and output options through.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Configuration loading (see `main()`).

use anyhow::Result;
use vim25_config::Config;

use crate::args::{Cli, Commands};
use crate::cancellation::CancellationToken;
use crate::commands;
use crate::commands::events::EventsArgs;
use crate::commands::power::PowerAction;

/// Dispatch the parsed command to its handler.
pub(crate) async fn run_command(
    cli: Cli,
    config: Config,
    cancel_token: &CancellationToken,
) -> Result<()> {
    let output = cli.output;
    let quiet = cli.quiet;

    match cli.command {
        Commands::About => commands::about::run(config, output, cancel_token).await,
        Commands::Time => commands::time::run(config, output, cancel_token).await,
        Commands::Session => commands::session::run(config, output, cancel_token).await,
        Commands::Inventory { kind, page_size } => {
            commands::inventory::run(config, kind, page_size, quiet, output, cancel_token).await
        }
        Commands::Events {
            max_count,
            types,
            since,
            entity,
        } => {
            let args = EventsArgs {
                max_count,
                types,
                since,
                entity,
            };
            commands::events::run(config, args, quiet, output, cancel_token).await
        }
        Commands::PowerOn { vm, host, wait } => {
            commands::power::run(
                config,
                PowerAction::On,
                &vm,
                host.as_deref(),
                wait,
                quiet,
                output,
                cancel_token,
            )
            .await
        }
        Commands::PowerOff { vm, wait } => {
            commands::power::run(
                config,
                PowerAction::Off,
                &vm,
                None,
                wait,
                quiet,
                output,
                cancel_token,
            )
            .await
        }
        Commands::Task { task, wait } => {
            commands::task::run(config, &task, wait, quiet, output, cancel_token).await
        }
    }
}
