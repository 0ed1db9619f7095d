//! Progress indicators for long-running commands.
//!
//! Responsibilities:
//! - Show task progress (0-100%) while `--wait` polls a task.
//! - Show a spinner for operations of unknown duration.
//! - Draw to STDERR only, so stdout stays machine-readable.
//!
//! Non-responsibilities:
//! - Deciding when progress is shown; callers pass `enabled = !quiet`.

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::Duration;

fn bar(pb: ProgressBar, template: &str, label: &str) -> ProgressBar {
    pb.set_draw_target(ProgressDrawTarget::stderr());
    if let Ok(style) = ProgressStyle::with_template(template) {
        pb.set_style(style.progress_chars("=>-"));
    }
    pb.set_message(label.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Percent-complete bar for a vSphere task. No-op when disabled.
pub(crate) struct TaskProgress {
    label: String,
    pb: Option<ProgressBar>,
}

impl TaskProgress {
    pub(crate) fn new(enabled: bool, label: impl Into<String>) -> Self {
        let label = label.into();
        let pb = enabled.then(|| {
            bar(
                ProgressBar::new(100),
                "{spinner} {msg} [{bar:40.cyan/blue}] {pos:>3}%",
                &label,
            )
        });
        Self { label, pb }
    }

    /// Update from `TaskInfo.progress`.
    pub(crate) fn set_percent(&self, percent: i32) {
        if let Some(pb) = &self.pb {
            pb.set_position(percent.clamp(0, 100) as u64);
        }
    }

    pub(crate) fn finish(&self) {
        if let Some(pb) = &self.pb {
            pb.set_position(100);
            pb.finish_with_message(format!("{} done", self.label));
        }
    }
}

impl Drop for TaskProgress {
    fn drop(&mut self) {
        if let Some(pb) = &self.pb
            && !pb.is_finished()
        {
            pb.finish_and_clear();
        }
    }
}

/// Indefinite spinner. No-op when disabled.
pub(crate) struct Spinner {
    pb: Option<ProgressBar>,
}

impl Spinner {
    pub(crate) fn new(enabled: bool, label: impl Into<String>) -> Self {
        let label = label.into();
        let pb = enabled.then(|| bar(ProgressBar::new_spinner(), "{spinner} {msg}", &label));
        Self { pb }
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        if let Some(pb) = &self.pb {
            pb.finish_and_clear();
        }
    }
}
