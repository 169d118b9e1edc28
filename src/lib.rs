//! # Pipeline Logging
//!
//! Bridges an execution-event pipeline to pluggable loggers.
//!
//! ## Features
//!
//! - **Severity Tracking**: the worst severity seen, including filtered events
//! - **Filtering**: optional minimum severity below which events are not logged
//! - **Formatting**: default or explicit rendering fixed per binding
//! - **Multiple Loggers**: console, file, in-memory and async wrappers
//!
//! ## Example
//!
//! ```
//! use pipeline_logging::prelude::*;
//! use std::sync::Arc;
//!
//! let binding = EventLogBinding::new("build-step-3", Arc::new(ConsoleLogger::new()))?;
//! binding.process(&ExecutionEvent::new(Severity::Error, "disk full"));
//! binding.wait();
//! assert_eq!(binding.severity(), Severity::Error);
//! binding.close()?;
//! # Ok::<(), LoggerError>(())
//! ```

pub mod core;
pub mod loggers;
pub mod macros;

pub mod prelude {
    pub use crate::core::{
        BindingConfig, BindingMetrics, EventLogBinding, EventLogBindingBuilder, EventLogger,
        ExecutionEvent, ExecutionEventProcessor, ExecutionInfoFormat, LogEntry, LoggerError,
        LoggerMetrics, OutputFormat, Result, Severity, SeverityTracker, TimestampFormat,
    };
    pub use crate::loggers::{AsyncLogger, ConsoleLogger, FileLogger, MemoryLogger};
}

pub use core::{
    BindingConfig, BindingMetrics, EventLogBinding, EventLogBindingBuilder, EventLogger,
    ExecutionEvent, ExecutionEventProcessor, ExecutionInfoFormat, LogEntry, LoggerError,
    LoggerMetrics, OutputFormat, PendingGuard, Result, Severity, SeverityTracker,
    TimestampFormat,
};
pub use loggers::{AsyncLogger, ConsoleLogger, ConsoleStream, FileLogger, MemoryLogger};
