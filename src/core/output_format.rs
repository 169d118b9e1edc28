//! Line encodings used by the bundled loggers
//!
//! - Text: the entry description as rendered by the binding (default)
//! - Json: one JSON object per line
//! - Logfmt: key=value pairs for log aggregation tools

use super::log_entry::LogEntry;
use super::severity::Severity;
use super::timestamp::TimestampFormat;
use serde::{Deserialize, Serialize};

/// Output format for log entries
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Example: `[build-step-3] ERROR: disk full`
    #[default]
    Text,

    /// Example: `{"timestamp":"2025-01-08T10:30:45.000Z","mode":"ERROR","description":"..."}`
    Json,

    /// Example: `timestamp=2025-01-08T10:30:45.000Z mode=ERROR description="..."`
    Logfmt,
}

impl OutputFormat {
    /// Encode an entry and its delivery mode as a single line (no trailing newline)
    pub fn format(&self, entry: &LogEntry, mode: Severity, timestamp_format: &TimestampFormat) -> String {
        match self {
            OutputFormat::Text => entry.description(),
            OutputFormat::Json => self.format_json(entry, mode, timestamp_format),
            OutputFormat::Logfmt => self.format_logfmt(entry, mode, timestamp_format),
        }
    }

    fn format_json(&self, entry: &LogEntry, mode: Severity, timestamp_format: &TimestampFormat) -> String {
        let event = entry.event();
        let mut json_obj = serde_json::Map::new();

        let timestamp = match timestamp_format {
            TimestampFormat::Unix => serde_json::Value::Number(event.timestamp.timestamp().into()),
            TimestampFormat::UnixMillis => {
                serde_json::Value::Number(event.timestamp.timestamp_millis().into())
            }
            _ => serde_json::Value::String(timestamp_format.format(&event.timestamp)),
        };
        json_obj.insert("timestamp".to_string(), timestamp);
        json_obj.insert(
            "mode".to_string(),
            serde_json::Value::String(mode.to_str().to_string()),
        );
        json_obj.insert(
            "severity".to_string(),
            serde_json::Value::String(event.severity.to_str().to_string()),
        );
        json_obj.insert(
            "metadata".to_string(),
            serde_json::Value::String(entry.metadata().to_string()),
        );
        json_obj.insert(
            "description".to_string(),
            serde_json::Value::String(entry.description()),
        );
        if !event.execution_path.is_empty() {
            json_obj.insert(
                "execution_path".to_string(),
                serde_json::Value::Array(
                    event
                        .execution_path
                        .iter()
                        .map(|step| serde_json::Value::String(step.clone()))
                        .collect(),
                ),
            );
        }
        if let Some(ref item) = event.item {
            json_obj.insert("item".to_string(), serde_json::Value::String(item.clone()));
        }

        serde_json::Value::Object(json_obj).to_string()
    }

    fn format_logfmt(&self, entry: &LogEntry, mode: Severity, timestamp_format: &TimestampFormat) -> String {
        let event = entry.event();
        let mut parts = Vec::new();

        parts.push(format!(
            "timestamp={}",
            self.escape_logfmt_value(&timestamp_format.format(&event.timestamp))
        ));
        parts.push(format!("mode={}", mode.to_str()));
        parts.push(format!("severity={}", event.severity.to_str()));
        parts.push(format!("metadata={}", self.escape_logfmt_value(entry.metadata())));
        if !event.execution_path.is_empty() {
            parts.push(format!(
                "path={}",
                self.escape_logfmt_value(&event.execution_path.join(" > "))
            ));
        }
        if let Some(ref item) = event.item {
            parts.push(format!("item={}", self.escape_logfmt_value(item)));
        }
        // Always quoted
        parts.push(format!("description={}", self.quote_logfmt_value(&entry.description())));

        parts.join(" ")
    }

    /// Escape a logfmt value (quote if it contains spaces, quotes or control characters)
    fn escape_logfmt_value(&self, value: &str) -> String {
        let needs_quotes = value.is_empty()
            || value
                .chars()
                .any(|c| c == ' ' || c == '"' || c == '=' || c.is_control());
        if needs_quotes {
            self.quote_logfmt_value(value)
        } else {
            value.to_string()
        }
    }

    /// Quote a logfmt value; line breaks and tabs become escape sequences
    fn quote_logfmt_value(&self, value: &str) -> String {
        let mut quoted = String::with_capacity(value.len() + 2);
        quoted.push('"');
        for c in value.chars() {
            match c {
                '\\' => quoted.push_str("\\\\"),
                '"' => quoted.push_str("\\\""),
                '\n' => quoted.push_str("\\n"),
                '\r' => quoted.push_str("\\r"),
                '\t' => quoted.push_str("\\t"),
                c => quoted.push(c),
            }
        }
        quoted.push('"');
        quoted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ExecutionEvent;

    fn entry(severity: Severity, message: &str) -> LogEntry {
        LogEntry::new(ExecutionEvent::new(severity, message), "build-step-3", None)
    }

    #[test]
    fn test_text_format() {
        let result = OutputFormat::Text.format(
            &entry(Severity::Info, "Test message"),
            Severity::Info,
            &TimestampFormat::Iso8601,
        );
        assert_eq!(result, "[build-step-3] INFO: Test message");
    }

    #[test]
    fn test_json_format() {
        let entry = entry(Severity::Error, "disk full")
            .event()
            .clone()
            .with_step("package")
            .with_item("image.iso");
        let entry = LogEntry::new(entry, "build-step-3", None);
        let result = OutputFormat::Json.format(&entry, Severity::Error, &TimestampFormat::Iso8601);

        let parsed: serde_json::Value = serde_json::from_str(&result).unwrap();
        assert_eq!(parsed["mode"], "ERROR");
        assert_eq!(parsed["severity"], "ERROR");
        assert_eq!(parsed["metadata"], "build-step-3");
        assert_eq!(parsed["execution_path"][0], "package");
        assert_eq!(parsed["item"], "image.iso");
        assert!(parsed["description"].as_str().unwrap().contains("disk full"));
        assert!(parsed["timestamp"].is_string());
    }

    #[test]
    fn test_json_numeric_timestamp() {
        let result = OutputFormat::Json.format(
            &entry(Severity::Info, "tick"),
            Severity::Info,
            &TimestampFormat::UnixMillis,
        );
        let parsed: serde_json::Value = serde_json::from_str(&result).unwrap();
        assert!(parsed["timestamp"].is_i64());
        assert!(parsed.get("item").is_none());
    }

    #[test]
    fn test_logfmt_format() {
        let result = OutputFormat::Logfmt.format(
            &entry(Severity::Warning, "Warning \"quoted\""),
            Severity::Warning,
            &TimestampFormat::Iso8601,
        );

        assert!(result.contains("mode=WARNING"));
        assert!(result.contains("metadata=build-step-3"));
        assert!(result.contains("description=\"[build-step-3] WARNING: Warning \\\"quoted\\\"\""));
    }

    #[test]
    fn test_logfmt_escapes_line_breaks() {
        let event = ExecutionEvent::new(Severity::Info, "ok")
            .with_step("a\nmode=ERROR forged")
            .with_item("x\r\nmode=FATAL\tinjected");
        let entry = LogEntry::new(event, "build\nstep", None);
        let result = OutputFormat::Logfmt.format(&entry, Severity::Info, &TimestampFormat::Unix);

        assert!(!result.contains('\n'));
        assert!(!result.contains('\r'));
        assert!(!result.contains('\t'));
        assert!(result.contains("metadata=\"build\\nstep\""));
        assert!(result.contains("path=\"a\\nmode=ERROR forged\""));
        assert!(result.contains("item=\"x\\r\\nmode=FATAL\\tinjected\""));
    }

    #[test]
    fn test_logfmt_path_separator() {
        let event = ExecutionEvent::new(Severity::Info, "packed")
            .with_step("release")
            .with_step("docs/api");
        let entry = LogEntry::new(event, "build-step-3", None);
        let result = OutputFormat::Logfmt.format(&entry, Severity::Info, &TimestampFormat::Unix);

        assert!(result.contains("path=\"release > docs/api\""));
    }

    #[test]
    fn test_output_format_default() {
        assert_eq!(OutputFormat::default(), OutputFormat::Text);
    }
}
