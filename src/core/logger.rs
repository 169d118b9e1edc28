//! Logger trait for event log destinations

use super::{error::Result, log_entry::LogEntry, severity::Severity};
use std::sync::Arc;

/// Destination for formatted execution events.
///
/// `mode` is the severity of the event the entry was built from. It is a
/// routing hint: an implementation may pick a stream or file based on it,
/// but filtering already happened before `log` is called.
///
/// `log` may be called concurrently. It has no error channel towards the
/// caller, so implementations report write failures through their own
/// metrics and diagnostics.
///
/// # Example
///
/// ```
/// use pipeline_logging::{EventLogger, LogEntry, Result, Severity};
///
/// struct CountingLogger(std::sync::atomic::AtomicUsize);
///
/// impl EventLogger for CountingLogger {
///     fn log(&self, _entry: LogEntry, _mode: Severity) {
///         self.0.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
///     }
///
///     fn close(&self) -> Result<()> {
///         Ok(())
///     }
///
///     fn name(&self) -> &str {
///         "counting"
///     }
/// }
/// ```
pub trait EventLogger: Send + Sync {
    fn log(&self, entry: LogEntry, mode: Severity);

    /// Flush and release the destination.
    fn close(&self) -> Result<()>;

    fn name(&self) -> &str;
}

impl<L: EventLogger + ?Sized> EventLogger for Arc<L> {
    fn log(&self, entry: LogEntry, mode: Severity) {
        (**self).log(entry, mode)
    }

    fn close(&self) -> Result<()> {
        (**self).close()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<L: EventLogger + ?Sized> EventLogger for Box<L> {
    fn log(&self, entry: LogEntry, mode: Severity) {
        (**self).log(entry, mode)
    }

    fn close(&self) -> Result<()> {
        (**self).close()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
