//! Core event, severity and binding types

pub mod binding;
pub mod error;
pub mod execution_event;
pub mod execution_format;
pub mod log_entry;
pub mod logger;
pub mod metrics;
pub mod output_format;
pub mod severity;
pub mod severity_tracker;
pub mod timestamp;

pub use binding::{BindingConfig, EventLogBinding, EventLogBindingBuilder};
pub use error::{LoggerError, Result};
pub use execution_event::{ExecutionEvent, ExecutionEventProcessor};
pub use execution_format::ExecutionInfoFormat;
pub use log_entry::LogEntry;
pub use logger::EventLogger;
pub use metrics::{BindingMetrics, LoggerMetrics};
pub use output_format::OutputFormat;
pub use severity::Severity;
pub use severity_tracker::{PendingGuard, SeverityTracker};
pub use timestamp::TimestampFormat;
