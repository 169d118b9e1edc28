//! Bridge from execution events to an [`EventLogger`]

use super::{
    error::{LoggerError, Result},
    execution_event::{ExecutionEvent, ExecutionEventProcessor},
    execution_format::ExecutionInfoFormat,
    log_entry::LogEntry,
    logger::EventLogger,
    metrics::BindingMetrics,
    severity::Severity,
    severity_tracker::SeverityTracker,
};
use serde::Deserialize;
use std::sync::Arc;

/// Tracks, filters, formats and forwards execution events to a logger.
///
/// Every event updates the worst-severity tracker, including events that
/// the minimum severity filter keeps out of the log.
///
/// `close` must not race with in-flight `process` calls; call
/// [`wait`](Self::wait) first when events may still be arriving.
///
/// # Example
///
/// ```
/// use pipeline_logging::prelude::*;
/// use std::sync::Arc;
///
/// let logger = Arc::new(MemoryLogger::new());
/// let binding = EventLogBinding::builder(Arc::clone(&logger))
///     .metadata("build-step-3")
///     .min_severity(Severity::Warning)
///     .build()?;
///
/// binding.process(&ExecutionEvent::new(Severity::Info, "compiling"));
/// binding.process(&ExecutionEvent::new(Severity::Error, "disk full"));
/// binding.wait();
///
/// assert_eq!(logger.len(), 1);
/// assert_eq!(binding.severity(), Severity::Error);
/// binding.close()?;
/// # Ok::<(), LoggerError>(())
/// ```
pub struct EventLogBinding<L: EventLogger + ?Sized> {
    metadata: Arc<str>,
    metadata_for_user_interaction: Arc<str>,
    min_severity: Option<Severity>,
    format: Option<ExecutionInfoFormat>,
    tracker: SeverityTracker,
    metrics: BindingMetrics,
    logger: Arc<L>,
}

impl<L: EventLogger + ?Sized> EventLogBinding<L> {
    /// Binding with no filter and the default rendering
    pub fn new(metadata: impl Into<String>, logger: Arc<L>) -> Result<Self> {
        Self::builder(logger).metadata(metadata).build()
    }

    #[must_use]
    pub fn builder(logger: Arc<L>) -> EventLogBindingBuilder<L> {
        EventLogBindingBuilder::new(logger)
    }

    pub fn from_config(config: BindingConfig, logger: Arc<L>) -> Result<Self> {
        let mut builder = Self::builder(logger).metadata(config.metadata);
        if let Some(user_metadata) = config.metadata_for_user_interaction {
            builder = builder.metadata_for_user_interaction(user_metadata);
        }
        if let Some(min_severity) = config.min_severity {
            builder = builder.min_severity(min_severity);
        }
        if let Some(format) = config.format {
            builder = builder.format(format);
        }
        builder.build()
    }

    /// Track, filter, format and forward one event.
    pub fn process(&self, event: &ExecutionEvent) {
        let _pending = self.tracker.process(event.severity);
        self.metrics.record_processed();

        if let Some(min_severity) = self.min_severity {
            if event.severity < min_severity {
                self.metrics.record_filtered();
                return;
            }
        }

        let entry = LogEntry::new(event.clone(), Arc::clone(&self.metadata), self.format.clone());
        self.logger.log(entry, event.severity);
        self.metrics.record_forwarded();
    }

    /// Close the underlying logger, returning its error unchanged.
    pub fn close(&self) -> Result<()> {
        self.logger.close()
    }

    /// The worst severity seen so far, filtered events included
    pub fn severity(&self) -> Severity {
        self.tracker.value()
    }

    /// Block until every in-flight `process` call has handed its entry to the logger.
    pub fn wait(&self) {
        self.tracker.wait();
    }

    pub fn metadata(&self) -> &str {
        &self.metadata
    }

    pub fn metadata_for_user_interaction(&self) -> &str {
        &self.metadata_for_user_interaction
    }

    pub fn min_severity(&self) -> Option<Severity> {
        self.min_severity
    }

    pub fn format(&self) -> Option<&ExecutionInfoFormat> {
        self.format.as_ref()
    }

    pub fn metrics(&self) -> &BindingMetrics {
        &self.metrics
    }

    pub fn logger(&self) -> &Arc<L> {
        &self.logger
    }
}

impl<L: EventLogger + ?Sized> ExecutionEventProcessor for EventLogBinding<L> {
    fn process(&self, event: &ExecutionEvent) {
        EventLogBinding::process(self, event);
    }
}

/// Builder for constructing an [`EventLogBinding`] with a fluent API
pub struct EventLogBindingBuilder<L: EventLogger + ?Sized> {
    logger: Arc<L>,
    metadata: Option<String>,
    metadata_for_user_interaction: Option<String>,
    min_severity: Option<Severity>,
    format: Option<ExecutionInfoFormat>,
}

impl<L: EventLogger + ?Sized> EventLogBindingBuilder<L> {
    pub fn new(logger: Arc<L>) -> Self {
        Self {
            logger,
            metadata: None,
            metadata_for_user_interaction: None,
            min_severity: None,
            format: None,
        }
    }

    /// Text identifying the event source in every entry (required)
    #[must_use = "builder methods return a new value"]
    pub fn metadata(mut self, metadata: impl Into<String>) -> Self {
        self.metadata = Some(metadata.into());
        self
    }

    /// Text identifying the source in user-facing contexts; defaults to `metadata`
    #[must_use = "builder methods return a new value"]
    pub fn metadata_for_user_interaction(mut self, metadata: impl Into<String>) -> Self {
        self.metadata_for_user_interaction = Some(metadata.into());
        self
    }

    /// Events below this severity are tracked but not logged
    #[must_use = "builder methods return a new value"]
    pub fn min_severity(mut self, severity: Severity) -> Self {
        self.min_severity = Some(severity);
        self
    }

    /// Render entries with `format` instead of the default rendering
    #[must_use = "builder methods return a new value"]
    pub fn format(mut self, format: ExecutionInfoFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn build(self) -> Result<EventLogBinding<L>> {
        let metadata = match self.metadata {
            Some(metadata) if !metadata.is_empty() => metadata,
            _ => return Err(LoggerError::config("EventLogBinding", "metadata is required")),
        };
        let metadata: Arc<str> = Arc::from(metadata);
        let metadata_for_user_interaction: Arc<str> = match self.metadata_for_user_interaction {
            Some(user_metadata) => Arc::from(user_metadata),
            None => Arc::clone(&metadata),
        };

        Ok(EventLogBinding {
            metadata,
            metadata_for_user_interaction,
            min_severity: self.min_severity,
            format: self.format,
            tracker: SeverityTracker::new(),
            metrics: BindingMetrics::new(),
            logger: self.logger,
        })
    }
}

/// Serializable construction settings for an [`EventLogBinding`]
///
/// # Example
///
/// ```
/// use pipeline_logging::{BindingConfig, Severity};
///
/// let config = BindingConfig::from_json_str(
///     r#"{ "metadata": "nightly", "min_severity": "warning" }"#,
/// )?;
/// assert_eq!(config.min_severity, Some(Severity::Warning));
/// # Ok::<(), pipeline_logging::LoggerError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BindingConfig {
    pub metadata: String,
    #[serde(default)]
    pub metadata_for_user_interaction: Option<String>,
    #[serde(default)]
    pub min_severity: Option<Severity>,
    #[serde(default)]
    pub format: Option<ExecutionInfoFormat>,
}

impl BindingConfig {
    pub fn new(metadata: impl Into<String>) -> Self {
        Self {
            metadata: metadata.into(),
            metadata_for_user_interaction: None,
            min_severity: None,
            format: None,
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
