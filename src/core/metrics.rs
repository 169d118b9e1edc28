//! Counters for binding and logger observability

use std::sync::atomic::{AtomicU64, Ordering};

/// Counters kept by an [`EventLogBinding`](crate::EventLogBinding).
///
/// `processed` always equals `filtered + forwarded` once every in-flight
/// `process` call has returned.
///
/// # Example
///
/// ```
/// use pipeline_logging::BindingMetrics;
///
/// let metrics = BindingMetrics::new();
/// metrics.record_processed();
/// metrics.record_filtered();
///
/// assert_eq!(metrics.processed(), 1);
/// assert_eq!(metrics.filtered(), 1);
/// assert_eq!(metrics.forwarded(), 0);
/// ```
#[derive(Debug)]
pub struct BindingMetrics {
    /// Events passed to `process`
    processed: AtomicU64,

    /// Events dropped by the minimum severity filter
    filtered: AtomicU64,

    /// Entries handed to the logger
    forwarded: AtomicU64,
}

impl BindingMetrics {
    pub const fn new() -> Self {
        Self {
            processed: AtomicU64::new(0),
            filtered: AtomicU64::new(0),
            forwarded: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn processed(&self) -> u64 {
        self.processed.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn filtered(&self) -> u64 {
        self.filtered.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn forwarded(&self) -> u64 {
        self.forwarded.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn record_processed(&self) -> u64 {
        self.processed.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_filtered(&self) -> u64 {
        self.filtered.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_forwarded(&self) -> u64 {
        self.forwarded.fetch_add(1, Ordering::Relaxed)
    }

    /// Share of processed events that the filter dropped (0.0 - 100.0)
    pub fn filter_rate(&self) -> f64 {
        let processed = self.processed() as f64;
        if processed == 0.0 {
            0.0
        } else {
            (self.filtered() as f64 / processed) * 100.0
        }
    }
}

impl Default for BindingMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for BindingMetrics {
    /// Create a snapshot of the current metrics values
    fn clone(&self) -> Self {
        Self {
            processed: AtomicU64::new(self.processed()),
            filtered: AtomicU64::new(self.filtered()),
            forwarded: AtomicU64::new(self.forwarded()),
        }
    }
}

/// Write counters kept by the bundled loggers.
#[derive(Debug)]
pub struct LoggerMetrics {
    /// Entries successfully written
    written: AtomicU64,

    /// Entries lost to write failures or to logging after close
    failed: AtomicU64,
}

impl LoggerMetrics {
    pub const fn new() -> Self {
        Self {
            written: AtomicU64::new(0),
            failed: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn written(&self) -> u64 {
        self.written.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn failed(&self) -> u64 {
        self.failed.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn record_written(&self) -> u64 {
        self.written.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_failed(&self) -> u64 {
        self.failed.fetch_add(1, Ordering::Relaxed)
    }
}

impl Default for LoggerMetrics {
    fn default() -> Self {
        Self::new()
    }
}
