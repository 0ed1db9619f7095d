//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse command-line arguments and environment variables.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not handle config loading (see `main`).

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::commands::inventory::InventoryKind;
use crate::formatters::OutputFormat;

#[derive(Parser)]
#[command(name = "vim25")]
#[command(about = "Query and operate vCenter Server and ESXi over the vim25 SOAP API", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  vim25 --url https://vcenter.local about\n  vim25 --profile lab inventory vm\n  vim25 events --max-count 20 --type VmPoweredOnEvent\n  vim25 power-on vm-42 --wait\n  vim25 task task-101 -o json\n"
)]
pub struct Cli {
    /// Endpoint URL of the vCenter Server or ESXi host (e.g., https://vcenter.local)
    #[arg(long, global = true, env = "VIM25_URL")]
    pub url: Option<String>,

    /// Username for SessionManager.Login
    #[arg(short, long, global = true, env = "VIM25_USERNAME")]
    pub username: Option<String>,

    /// Password for SessionManager.Login
    #[arg(short, long, global = true, env = "VIM25_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, env = "VIM25_TIMEOUT")]
    pub timeout: Option<u64>,

    /// Maximum number of retries for transient failures
    #[arg(long, global = true, env = "VIM25_MAX_RETRIES")]
    pub max_retries: Option<usize>,

    /// Skip TLS certificate verification (for self-signed certificates)
    #[arg(long, global = true, env = "VIM25_SKIP_VERIFY")]
    pub skip_verify: bool,

    /// vim25 release sent in SOAPAction (e.g., 8.0.1.0)
    #[arg(long, global = true, env = "VIM25_API_VERSION")]
    pub api_version: Option<String>,

    /// Profile name to load from the config file
    #[arg(long, global = true, env = "VIM25_PROFILE")]
    pub profile: Option<String>,

    /// Path to a custom configuration file (overrides default location)
    #[arg(long, global = true, env = "VIM25_CONFIG_PATH", value_name = "FILE")]
    pub config_path: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,

    /// Suppress progress output on stderr
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Serve Prometheus metrics on this address while the command runs (e.g., 127.0.0.1:9090)
    #[arg(long, global = true, value_name = "ADDR")]
    pub metrics_bind: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show product and API information of the endpoint
    About,

    /// Show the server clock
    Time,

    /// Log in and show the current session
    Session,

    /// List inventory objects of one kind
    Inventory {
        /// Kind of managed object to list
        #[arg(value_enum)]
        kind: InventoryKind,

        /// Maximum number of objects per page
        #[arg(long, default_value = "100")]
        page_size: i32,
    },

    /// Query recent events
    Events {
        /// Maximum number of events to return
        #[arg(long, default_value_t = vim25_config::constants::DEFAULT_EVENT_MAX_COUNT)]
        max_count: i32,

        /// Only events of these types (e.g., VmPoweredOnEvent); repeatable
        #[arg(long = "type", value_name = "TYPE")]
        types: Vec<String>,

        /// Only events created at or after this RFC 3339 time
        #[arg(long, value_name = "TIME")]
        since: Option<String>,

        /// Only events about this entity (e.g., VirtualMachine:vm-42)
        #[arg(long, value_name = "MOREF")]
        entity: Option<String>,
    },

    /// Power on a virtual machine
    PowerOn {
        /// Virtual machine id (vm-42) or Type:value reference
        vm: String,

        /// Host to power on the machine on
        #[arg(long, value_name = "HOST")]
        host: Option<String>,

        #[command(flatten)]
        wait: WaitArgs,
    },

    /// Power off a virtual machine
    PowerOff {
        /// Virtual machine id (vm-42) or Type:value reference
        vm: String,

        #[command(flatten)]
        wait: WaitArgs,
    },

    /// Show a task, optionally waiting for it to finish
    Task {
        /// Task id (task-101) or Task:value reference
        task: String,

        #[command(flatten)]
        wait: WaitArgs,
    },
}

#[derive(clap::Args, Debug, Clone)]
pub struct WaitArgs {
    /// Wait for the task to finish
    #[arg(long)]
    pub wait: bool,

    /// Give up waiting after this many seconds
    #[arg(long, default_value_t = vim25_config::constants::DEFAULT_TASK_TIMEOUT_SECS, requires = "wait")]
    pub wait_timeout: u64,
}
