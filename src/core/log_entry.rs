//! Log entry handed to loggers

use super::execution_event::ExecutionEvent;
use super::execution_format::ExecutionInfoFormat;
use super::severity::Severity;
use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::fmt;
use std::sync::Arc;

/// An execution event paired with the binding's metadata and format.
///
/// The textual form is computed on demand by [`LogEntry::description`];
/// the entry itself never changes after construction.
#[derive(Debug, Clone)]
pub struct LogEntry {
    event: ExecutionEvent,
    metadata: Arc<str>,
    format: Option<ExecutionInfoFormat>,
}

impl LogEntry {
    pub fn new(
        event: ExecutionEvent,
        metadata: impl Into<Arc<str>>,
        format: Option<ExecutionInfoFormat>,
    ) -> Self {
        Self {
            event,
            metadata: metadata.into(),
            format,
        }
    }

    #[inline]
    pub fn event(&self) -> &ExecutionEvent {
        &self.event
    }

    #[inline]
    pub fn severity(&self) -> Severity {
        self.event.severity
    }

    #[inline]
    pub fn metadata(&self) -> &str {
        &self.metadata
    }

    #[inline]
    pub fn format(&self) -> Option<&ExecutionInfoFormat> {
        self.format.as_ref()
    }

    pub fn description(&self) -> String {
        match self.format {
            Some(ref format) => self.event.description_with_format(format, &self.metadata),
            None => self.event.description(&self.metadata),
        }
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description())
    }
}

impl Serialize for LogEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("LogEntry", 6)?;
        state.serialize_field("severity", &self.event.severity)?;
        state.serialize_field("description", &self.description())?;
        state.serialize_field("metadata", self.metadata())?;
        state.serialize_field("timestamp", &self.event.timestamp)?;
        state.serialize_field("execution_path", &self.event.execution_path)?;
        state.serialize_field("item", &self.event.item)?;
        state.end()
    }
}
