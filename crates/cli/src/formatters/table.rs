//! Table formatter implementation.
//!
//! Responsibilities:
//! - Format single objects as `Label: value` blocks.
//! - Format lists as padded columns with an underlined header row.
//!
//! Does NOT handle:
//! - Other output formats.

use anyhow::Result;
use vim25_client::{AboutInfo, AnyEvent, TaskInfo, UserSession};

use super::{DEFAULT_MISSING_VALUE, Formatter, InventoryItem, ServerTimeOutput, TaskStartedOutput};

const MESSAGE_WIDTH: usize = 80;

/// Table formatter.
pub struct TableFormatter;

fn or_missing(value: Option<&str>) -> &str {
    value.unwrap_or(DEFAULT_MISSING_VALUE)
}

fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() > width {
        let kept: String = value.chars().take(width.saturating_sub(3)).collect();
        format!("{kept}...")
    } else {
        value.to_string()
    }
}

/// Render rows under `headers`, each column as wide as its widest cell.
fn columns(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let render = |cells: &mut dyn Iterator<Item = String>| {
        let line = cells
            .zip(&widths)
            .map(|(cell, &width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join("  ");
        format!("{}\n", line.trim_end())
    };

    let mut output = render(&mut headers.iter().map(|h| h.to_string()));
    output.push_str(&render(&mut headers.iter().map(|h| "=".repeat(h.len()))));
    for row in rows {
        output.push_str(&render(&mut row.iter().cloned()));
    }
    output
}

impl Formatter for TableFormatter {
    fn format_about(&self, about: &AboutInfo) -> Result<String> {
        let mut output = String::new();
        output.push_str(&format!("Name: {}\n", about.full_name));
        output.push_str(&format!("Vendor: {}\n", about.vendor));
        output.push_str(&format!("Version: {}\n", about.version));
        output.push_str(&format!("Build: {}\n", about.build));
        output.push_str(&format!("API Type: {}\n", about.api_type));
        output.push_str(&format!("API Version: {}\n", about.api_version));
        output.push_str(&format!("OS Type: {}\n", about.os_type));
        output.push_str(&format!(
            "Instance UUID: {}\n",
            or_missing(about.instance_uuid.as_deref())
        ));
        Ok(output)
    }

    fn format_time(&self, time: &ServerTimeOutput) -> Result<String> {
        Ok(format!(
            "Server Time: {}\nLocal Time: {}\nSkew: {} ms\n",
            time.server_time.to_rfc3339(),
            time.local_time.to_rfc3339(),
            time.skew_ms
        ))
    }

    fn format_session(&self, session: &UserSession) -> Result<String> {
        let mut output = String::new();
        output.push_str(&format!("User: {}\n", session.user_name));
        output.push_str(&format!("Full Name: {}\n", session.full_name));
        output.push_str(&format!("Login Time: {}\n", session.login_time.to_rfc3339()));
        output.push_str(&format!("Locale: {}\n", session.locale));
        output.push_str(&format!(
            "Client IP: {}\n",
            or_missing(session.ip_address.as_deref())
        ));
        Ok(output)
    }

    fn format_inventory(&self, items: &[InventoryItem], columns_paths: &[&str]) -> Result<String> {
        if items.is_empty() {
            return Ok("No objects found.\n".to_string());
        }

        let mut headers = vec!["ID"];
        headers.extend_from_slice(columns_paths);
        let rows: Vec<Vec<String>> = items
            .iter()
            .map(|item| {
                let mut row = vec![item.reference.value.clone()];
                row.extend(columns_paths.iter().map(|path| item.cell(path)));
                row
            })
            .collect();

        Ok(columns(&headers, &rows))
    }

    fn format_events(&self, events: &[AnyEvent]) -> Result<String> {
        if events.is_empty() {
            return Ok("No events found.\n".to_string());
        }

        let rows: Vec<Vec<String>> = events
            .iter()
            .map(|event| {
                let root = event.root();
                vec![
                    root.key.to_string(),
                    root.created_time.to_rfc3339(),
                    event.type_name().to_string(),
                    root.user_name.clone(),
                    truncate(or_missing(event.message()), MESSAGE_WIDTH),
                ]
            })
            .collect();

        Ok(columns(&["KEY", "CREATED", "TYPE", "USER", "MESSAGE"], &rows))
    }

    fn format_task(&self, info: &TaskInfo) -> Result<String> {
        let mut output = String::new();
        output.push_str(&format!("Task: {}\n", info.key));
        output.push_str(&format!("Operation: {}\n", or_missing(info.name.as_deref())));
        output.push_str(&format!(
            "Entity: {}\n",
            or_missing(info.entity_name.as_deref())
        ));
        output.push_str(&format!("State: {}\n", info.state));
        if let Some(progress) = info.progress {
            output.push_str(&format!("Progress: {progress}%\n"));
        }
        output.push_str(&format!("Queued: {}\n", info.queue_time.to_rfc3339()));
        if let Some(completed) = info.complete_time {
            output.push_str(&format!("Completed: {}\n", completed.to_rfc3339()));
        }
        if let Some(error) = &info.error {
            output.push_str(&format!(
                "Error: {} ({})\n",
                or_missing(error.localized_message.as_deref()),
                error.fault.type_name()
            ));
        }
        Ok(output)
    }

    fn format_task_started(&self, output: &TaskStartedOutput) -> Result<String> {
        match &output.info {
            Some(info) => self.format_task(info),
            None => Ok(format!("Started task {}\n", output.task.value)),
        }
    }
}
