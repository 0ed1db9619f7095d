//! JSON formatter: pretty-printed serde output.

use anyhow::Result;
use serde::Serialize;
use vim25_client::{AboutInfo, AnyEvent, TaskInfo, UserSession};

use super::{Formatter, InventoryItem, ServerTimeOutput, TaskStartedOutput};

pub struct JsonFormatter;

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut out = serde_json::to_string_pretty(value)?;
    out.push('\n');
    Ok(out)
}

impl Formatter for JsonFormatter {
    fn format_about(&self, about: &AboutInfo) -> Result<String> {
        to_json(about)
    }

    fn format_time(&self, time: &ServerTimeOutput) -> Result<String> {
        to_json(time)
    }

    fn format_session(&self, session: &UserSession) -> Result<String> {
        to_json(session)
    }

    fn format_inventory(&self, items: &[InventoryItem], _columns: &[&str]) -> Result<String> {
        to_json(items)
    }

    fn format_events(&self, events: &[AnyEvent]) -> Result<String> {
        to_json(events)
    }

    fn format_task(&self, info: &TaskInfo) -> Result<String> {
        to_json(info)
    }

    fn format_task_started(&self, output: &TaskStartedOutput) -> Result<String> {
        to_json(output)
    }
}
