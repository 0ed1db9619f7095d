//! Output formatters for CLI commands.
//!
//! Responsibilities:
//! - Provide JSON, YAML and table renderings of every command result.
//! - Define the serializable output structures that are not plain client types.
//!
//! Does NOT handle:
//! - Printing (commands print the returned string to stdout).
//!
//! Invariants:
//! - JSON and YAML emit valid documents even for empty results (`[]`).
//! - Tables print a human message for empty results.
//! - Missing values render as `N/A` in tables and `null` in JSON/YAML.

use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::Serialize;
use std::collections::BTreeMap;
use vim25_client::{AboutInfo, AnyEvent, ManagedObjectReference, TaskInfo, UserSession};

mod json;
mod table;
mod yaml;

pub use json::JsonFormatter;
pub use table::TableFormatter;
pub use yaml::YamlFormatter;

/// Representation of missing values in tables.
pub const DEFAULT_MISSING_VALUE: &str = "N/A";

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Yaml,
    Table,
}

/// Server clock as reported by `CurrentTime`, next to the local clock.
#[derive(Debug, Clone, Serialize)]
pub struct ServerTimeOutput {
    pub server_time: DateTime<Utc>,
    pub local_time: DateTime<Utc>,
    /// Server minus local, in milliseconds.
    pub skew_ms: i64,
}

impl ServerTimeOutput {
    pub fn new(server_time: DateTime<Utc>, local_time: DateTime<Utc>) -> Self {
        Self {
            server_time,
            local_time,
            skew_ms: (server_time - local_time).num_milliseconds(),
        }
    }
}

/// One inventory object with the properties the listing asked for.
#[derive(Debug, Clone, Serialize)]
pub struct InventoryItem {
    #[serde(rename = "ref")]
    pub reference: ManagedObjectReference,
    pub properties: BTreeMap<String, serde_json::Value>,
}

impl InventoryItem {
    /// Property rendered for a table cell.
    pub fn cell(&self, path: &str) -> String {
        match self.properties.get(path) {
            None | Some(serde_json::Value::Null) => DEFAULT_MISSING_VALUE.to_string(),
            Some(serde_json::Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }
}

/// Result of a power operation.
#[derive(Debug, Clone, Serialize)]
pub struct TaskStartedOutput {
    pub task: ManagedObjectReference,
    /// Present when the command waited for completion.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<TaskInfo>,
}

/// Formatter trait for the command results.
pub trait Formatter {
    fn format_about(&self, about: &AboutInfo) -> Result<String>;
    fn format_time(&self, time: &ServerTimeOutput) -> Result<String>;
    fn format_session(&self, session: &UserSession) -> Result<String>;
    /// `columns` lists the property paths in display order.
    fn format_inventory(&self, items: &[InventoryItem], columns: &[&str]) -> Result<String>;
    fn format_events(&self, events: &[AnyEvent]) -> Result<String>;
    fn format_task(&self, info: &TaskInfo) -> Result<String>;
    fn format_task_started(&self, output: &TaskStartedOutput) -> Result<String>;
}

/// Get a formatter for the specified format.
pub fn get_formatter(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Yaml => Box::new(YamlFormatter),
        OutputFormat::Table => Box::new(TableFormatter),
    }
}

#[cfg(test)]
mod tests;
