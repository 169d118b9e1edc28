//! Asynchronous wrapper that moves writes to a worker thread

use crate::core::{EventLogger, LogEntry, LoggerError, LoggerMetrics, Result, Severity};
use crossbeam_channel::{unbounded, Receiver, Sender};
use parking_lot::{Mutex, RwLock};
use std::sync::Arc;
use std::thread;

/// Forwards entries to an inner logger from a dedicated worker thread.
///
/// `log` only enqueues, so a binding's `wait()` returns once entries are
/// queued. Call [`close`](EventLogger::close) to drain the queue: it
/// disconnects the channel, joins the worker after every queued entry was
/// delivered and then closes the inner logger.
///
/// The queue is unbounded; there is no backpressure.
///
/// # Example
///
/// ```
/// use pipeline_logging::prelude::*;
/// use std::sync::Arc;
///
/// let memory = Arc::new(MemoryLogger::new());
/// let logger = AsyncLogger::with_shared(Arc::clone(&memory))?;
/// let binding = EventLogBinding::new("nightly", Arc::new(logger))?;
///
/// binding.process(&ExecutionEvent::new(Severity::Info, "started"));
/// binding.close()?;
/// assert_eq!(memory.len(), 1);
/// # Ok::<(), LoggerError>(())
/// ```
pub struct AsyncLogger<L: EventLogger + ?Sized + 'static> {
    inner: Arc<L>,
    sender: RwLock<Option<Sender<(LogEntry, Severity)>>>,
    worker: Mutex<Option<thread::JoinHandle<()>>>,
    metrics: Arc<LoggerMetrics>,
}

impl<L: EventLogger + 'static> AsyncLogger<L> {
    pub fn new(inner: L) -> Result<Self> {
        Self::with_shared(Arc::new(inner))
    }
}

impl<L: EventLogger + ?Sized + 'static> AsyncLogger<L> {
    /// Wrap a logger that is also referenced elsewhere
    pub fn with_shared(inner: Arc<L>) -> Result<Self> {
        let (sender, receiver) = unbounded();
        let metrics = Arc::new(LoggerMetrics::new());

        let worker = {
            let inner = Arc::clone(&inner);
            let metrics = Arc::clone(&metrics);
            thread::Builder::new()
                .name("pipeline-log-worker".to_string())
                .spawn(move || Self::run_worker(inner, receiver, metrics))
                .map_err(|e| LoggerError::io_operation("spawning log worker", "thread spawn failed", e))?
        };

        Ok(Self {
            inner,
            sender: RwLock::new(Some(sender)),
            worker: Mutex::new(Some(worker)),
            metrics,
        })
    }

    /// Deliver entries until every sender is gone
    ///
    /// Each delivery is wrapped in catch_unwind so one panicking write does
    /// not take the worker, and every entry queued behind it, down.
    fn run_worker(inner: Arc<L>, receiver: Receiver<(LogEntry, Severity)>, metrics: Arc<LoggerMetrics>) {
        for (entry, mode) in receiver.iter() {
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                inner.log(entry, mode)
            }));

            match result {
                Ok(()) => {
                    metrics.record_written();
                }
                Err(panic_info) => {
                    let panic_msg = if let Some(s) = panic_info.downcast_ref::<&str>() {
                        s.to_string()
                    } else if let Some(s) = panic_info.downcast_ref::<String>() {
                        s.clone()
                    } else {
                        "Unknown panic".to_string()
                    };
                    eprintln!(
                        "[LOGGER CRITICAL] Logger '{}' panicked: {}. Worker continues.",
                        inner.name(),
                        panic_msg
                    );
                    metrics.record_failed();
                }
            }
        }
    }

    pub fn inner(&self) -> &Arc<L> {
        &self.inner
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    /// Entries waiting for the worker
    pub fn queued(&self) -> usize {
        self.sender.read().as_ref().map_or(0, Sender::len)
    }

    fn shutdown(&self) -> Result<()> {
        let sender = self.sender.write().take().ok_or(LoggerError::LoggerClosed)?;
        // Disconnecting lets the worker drain the queue and exit
        drop(sender);

        let joined = match self.worker.lock().take() {
            Some(handle) => handle.join().is_ok(),
            None => true,
        };

        // The inner logger is closed even after a worker panic so it can release its resources
        let closed = self.inner.close();
        if !joined {
            return Err(LoggerError::WorkerPanicked);
        }
        closed
    }
}

impl<L: EventLogger + ?Sized + 'static> EventLogger for AsyncLogger<L> {
    fn log(&self, entry: LogEntry, mode: Severity) {
        let sent = match self.sender.read().as_ref() {
            Some(sender) => sender.send((entry, mode)).is_ok(),
            None => false,
        };

        if !sent && self.metrics.record_failed() == 0 {
            eprintln!(
                "[LOGGER WARNING] Entry logged after async logger '{}' was closed; discarding.",
                self.inner.name()
            );
        }
    }

    fn close(&self) -> Result<()> {
        self.shutdown()
    }

    fn name(&self) -> &str {
        "async"
    }
}

impl<L: EventLogger + ?Sized + 'static> Drop for AsyncLogger<L> {
    fn drop(&mut self) {
        if self.sender.get_mut().is_none() {
            return;
        }
        if let Err(e) = self.shutdown() {
            eprintln!("[LOGGER ERROR] Failed to close async logger during drop: {}", e);
        }
    }
}
