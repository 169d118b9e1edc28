//! Macros for building and emitting execution events with formatted messages.
//!
//! # Examples
//!
//! ```
//! use pipeline_logging::prelude::*;
//! use pipeline_logging::{emit, event};
//! use std::sync::Arc;
//!
//! let logger = Arc::new(MemoryLogger::new());
//! let binding = EventLogBinding::new("ingest", Arc::clone(&logger))?;
//!
//! let files = 3;
//! let event = event!(Severity::Info, "ingested {} files", files);
//! binding.process(&event);
//!
//! emit!(binding, Severity::Warning, "{} files skipped", 1);
//!
//! assert_eq!(logger.descriptions(), vec![
//!     "[ingest] INFO: ingested 3 files",
//!     "[ingest] WARNING: 1 files skipped",
//! ]);
//! # Ok::<(), LoggerError>(())
//! ```

/// Build an [`ExecutionEvent`](crate::ExecutionEvent) with a formatted message.
///
/// # Examples
///
/// ```
/// use pipeline_logging::{event, Severity};
///
/// let event = event!(Severity::Error, "exit code {}", 2);
/// assert_eq!(event.message, "exit code 2");
/// ```
#[macro_export]
macro_rules! event {
    ($severity:expr, $($arg:tt)+) => {
        $crate::ExecutionEvent::new($severity, format!($($arg)+))
    };
}

/// Build an event and hand it to anything with a `process(&ExecutionEvent)` method.
///
/// # Examples
///
/// ```
/// use pipeline_logging::prelude::*;
/// use pipeline_logging::emit;
/// use std::sync::Arc;
///
/// let binding = EventLogBinding::new("deploy", Arc::new(MemoryLogger::new()))?;
/// emit!(binding, Severity::Fatal, "rollout of {} failed", "v2");
/// assert_eq!(binding.severity(), Severity::Fatal);
/// # Ok::<(), LoggerError>(())
/// ```
#[macro_export]
macro_rules! emit {
    ($processor:expr, $severity:expr, $($arg:tt)+) => {
        $processor.process(&$crate::event!($severity, $($arg)+))
    };
}
