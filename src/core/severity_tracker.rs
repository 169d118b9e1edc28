//! Worst-severity register with a completion barrier
//!
//! The maximum and the pending-operation count are independent concerns
//! and use separate locks: a `Mutex<Severity>` for the register and a
//! `Mutex<usize>` + `Condvar` wait group for the barrier.

use super::severity::Severity;
use parking_lot::{Condvar, Mutex};

/// Keeps track of the worst severity seen so far.
///
/// # Example
///
/// ```
/// use pipeline_logging::{Severity, SeverityTracker};
///
/// let tracker = SeverityTracker::new();
/// {
///     let _pending = tracker.process(Severity::Warning);
///     // ... hand the event to a logger ...
/// }
/// tracker.wait();
/// assert_eq!(tracker.value(), Severity::Warning);
/// ```
#[derive(Debug)]
pub struct SeverityTracker {
    severity: Mutex<Severity>,
    pending: Mutex<usize>,
    all_done: Condvar,
}

/// Marks one tracked operation as in flight until dropped.
///
/// Returned by [`SeverityTracker::process`]; keep it alive for as long as the
/// work that belongs to the severity update (the log write) is running.
#[must_use = "the operation counts as complete as soon as the guard is dropped"]
#[derive(Debug)]
pub struct PendingGuard<'a> {
    tracker: &'a SeverityTracker,
}

impl SeverityTracker {
    pub fn new() -> Self {
        Self {
            severity: Mutex::new(Severity::MIN),
            pending: Mutex::new(0),
            all_done: Condvar::new(),
        }
    }

    /// Record `new_severity` and open a tracked operation.
    pub fn process(&self, new_severity: Severity) -> PendingGuard<'_> {
        *self.pending.lock() += 1;
        let guard = PendingGuard { tracker: self };

        let mut severity = self.severity.lock();
        if new_severity > *severity {
            *severity = new_severity;
        }

        guard
    }

    /// The worst severity recorded so far.
    pub fn value(&self) -> Severity {
        *self.severity.lock()
    }

    /// Number of tracked operations still in flight
    pub fn pending(&self) -> usize {
        *self.pending.lock()
    }

    /// Block until every tracked operation has completed.
    ///
    /// There is no timeout: if an operation never finishes, this never returns.
    pub fn wait(&self) {
        let mut pending = self.pending.lock();
        while *pending > 0 {
            self.all_done.wait(&mut pending);
        }
    }

    fn leave(&self) {
        let mut pending = self.pending.lock();
        *pending -= 1;
        if *pending == 0 {
            self.all_done.notify_all();
        }
    }
}

impl Default for SeverityTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        self.tracker.leave();
    }
}
