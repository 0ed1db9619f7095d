//! YAML formatter implementation.

use anyhow::Result;
use vim25_client::{AboutInfo, AnyEvent, TaskInfo, UserSession};

use super::{Formatter, InventoryItem, ServerTimeOutput, TaskStartedOutput};

/// YAML formatter.
pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn format_about(&self, about: &AboutInfo) -> Result<String> {
        Ok(serde_yaml::to_string(about)?)
    }

    fn format_time(&self, time: &ServerTimeOutput) -> Result<String> {
        Ok(serde_yaml::to_string(time)?)
    }

    fn format_session(&self, session: &UserSession) -> Result<String> {
        Ok(serde_yaml::to_string(session)?)
    }

    fn format_inventory(&self, items: &[InventoryItem], _columns: &[&str]) -> Result<String> {
        Ok(serde_yaml::to_string(items)?)
    }

    fn format_events(&self, events: &[AnyEvent]) -> Result<String> {
        Ok(serde_yaml::to_string(events)?)
    }

    fn format_task(&self, info: &TaskInfo) -> Result<String> {
        Ok(serde_yaml::to_string(info)?)
    }

    fn format_task_started(&self, output: &TaskStartedOutput) -> Result<String> {
        Ok(serde_yaml::to_string(output)?)
    }
}
