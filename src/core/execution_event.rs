//! Execution events emitted by a processing pipeline

use super::execution_format::ExecutionInfoFormat;
use super::severity::Severity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Sanitize event text to prevent log injection attacks
///
/// Replaces newlines, carriage returns, and tabs with escape sequences
/// so one event can never render as several log lines.
pub(crate) fn sanitize(text: &str) -> String {
    text.replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

/// One unit-of-work outcome reported by the pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionEvent {
    pub severity: Severity,
    pub message: String,
    /// Names of the nested steps that produced the event, outermost first
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub execution_path: Vec<String>,
    /// The work item being processed, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl ExecutionEvent {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
            execution_path: Vec::new(),
            item: None,
            timestamp: Utc::now(),
        }
    }

    #[must_use]
    pub fn with_step(mut self, step: impl Into<String>) -> Self {
        self.execution_path.push(step.into());
        self
    }

    #[must_use]
    pub fn with_item(mut self, item: impl Into<String>) -> Self {
        self.item = Some(item.into());
        self
    }

    #[must_use]
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Default rendering: `[metadata] SEVERITY: message (item: ...)`
    pub fn description(&self, metadata: &str) -> String {
        let mut out = format!("[{}] {}: {}", sanitize(metadata), self.severity, sanitize(&self.message));
        if let Some(ref item) = self.item {
            out.push_str(&format!(" (item: {})", sanitize(item)));
        }
        out
    }

    /// Rendering driven by an explicit format
    pub fn description_with_format(&self, format: &ExecutionInfoFormat, metadata: &str) -> String {
        format.render(self, metadata)
    }
}

/// Sink for execution events.
///
/// A pipeline delivers every event it emits to the processors registered
/// with it; processors may be called concurrently from several threads.
pub trait ExecutionEventProcessor: Send + Sync {
    fn process(&self, event: &ExecutionEvent);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_description() {
        let event = ExecutionEvent::new(Severity::Error, "disk full");
        assert_eq!(event.description("build-step-3"), "[build-step-3] ERROR: disk full");

        let event = event.with_item("report.pdf");
        assert_eq!(
            event.description("build-step-3"),
            "[build-step-3] ERROR: disk full (item: report.pdf)"
        );
    }

    #[test]
    fn test_description_is_sanitized() {
        let event = ExecutionEvent::new(Severity::Info, "line one\nERROR: forged\tline")
            .with_item("a\r\nb");
        let description = event.description("meta");
        assert!(!description.contains('\n'));
        assert!(!description.contains('\r'));
        assert!(!description.contains('\t'));
        assert!(description.contains("line one\\nERROR: forged\\tline"));
        assert!(description.contains("a\\r\\nb"));
    }

    #[test]
    fn test_builder_helpers() {
        let event = ExecutionEvent::new(Severity::Warning, "slow")
            .with_step("build")
            .with_step("compile");
        assert_eq!(event.execution_path, vec!["build", "compile"]);
        assert_eq!(event.item, None);
    }
}
