//! Explicit rendering format for execution events

use super::execution_event::{sanitize, ExecutionEvent};
use super::timestamp::TimestampFormat;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Switches controlling how an [`ExecutionEvent`] is rendered.
///
/// Parts appear in this order, separated by single spaces: timestamp,
/// `[metadata]`, `SEVERITY:`, `outer > inner:`, message, `(item: ...)`.
/// The default value renders exactly like [`ExecutionEvent::description`].
///
/// # Example
///
/// ```
/// use pipeline_logging::{ExecutionEvent, ExecutionInfoFormat, Severity};
///
/// let format = ExecutionInfoFormat::default().with_execution_path(true);
/// let event = ExecutionEvent::new(Severity::Warning, "slow link").with_step("link");
/// assert_eq!(
///     event.description_with_format(&format, "ci"),
///     "[ci] WARNING: link: slow link"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExecutionInfoFormat {
    pub timestamp: Option<TimestampFormat>,
    pub metadata: bool,
    pub severity: bool,
    pub execution_path: bool,
    pub item: bool,
}

impl Default for ExecutionInfoFormat {
    fn default() -> Self {
        Self {
            timestamp: None,
            metadata: true,
            severity: true,
            execution_path: false,
            item: true,
        }
    }
}

impl ExecutionInfoFormat {
    #[must_use]
    pub fn with_timestamp(mut self, format: TimestampFormat) -> Self {
        self.timestamp = Some(format);
        self
    }

    #[must_use]
    pub fn with_metadata(mut self, enabled: bool) -> Self {
        self.metadata = enabled;
        self
    }

    #[must_use]
    pub fn with_severity(mut self, enabled: bool) -> Self {
        self.severity = enabled;
        self
    }

    #[must_use]
    pub fn with_execution_path(mut self, enabled: bool) -> Self {
        self.execution_path = enabled;
        self
    }

    #[must_use]
    pub fn with_item(mut self, enabled: bool) -> Self {
        self.item = enabled;
        self
    }

    pub fn render(&self, event: &ExecutionEvent, metadata: &str) -> String {
        let mut out = String::new();

        if let Some(ref ts) = self.timestamp {
            let _ = write!(out, "{} ", ts.format(&event.timestamp));
        }
        if self.metadata {
            let _ = write!(out, "[{}] ", sanitize(metadata));
        }
        if self.severity {
            let _ = write!(out, "{}: ", event.severity);
        }
        if self.execution_path && !event.execution_path.is_empty() {
            let path: Vec<String> = event.execution_path.iter().map(|s| sanitize(s)).collect();
            let _ = write!(out, "{}: ", path.join(" > "));
        }
        out.push_str(&sanitize(&event.message));
        if self.item {
            if let Some(ref item) = event.item {
                let _ = write!(out, " (item: {})", sanitize(item));
            }
        }

        out
    }
}
