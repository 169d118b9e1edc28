//! In-memory logger

use crate::core::{EventLogger, LogEntry, LoggerError, Result, Severity};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

/// Keeps every entry together with its delivery mode.
///
/// Handy for tests and for callers that want to inspect or replay what a
/// pipeline reported.
#[derive(Debug, Default)]
pub struct MemoryLogger {
    entries: Mutex<Vec<(LogEntry, Severity)>>,
    closed: AtomicBool,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the recorded entries in arrival order
    pub fn entries(&self) -> Vec<(LogEntry, Severity)> {
        self.entries.lock().clone()
    }

    /// Rendered descriptions in arrival order
    pub fn descriptions(&self) -> Vec<String> {
        self.entries
            .lock()
            .iter()
            .map(|(entry, _)| entry.description())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }
}

impl EventLogger for MemoryLogger {
    fn log(&self, entry: LogEntry, mode: Severity) {
        self.entries.lock().push((entry, mode));
    }

    fn close(&self) -> Result<()> {
        if self.closed.swap(true, Ordering::AcqRel) {
            return Err(LoggerError::LoggerClosed);
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}
