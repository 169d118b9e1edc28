//! Stress tests for concurrent event processing
//!
//! These tests verify:
//! - `wait()` returns only after every concurrent log call completed
//! - The tracked maximum is exact under contention
//! - Filtered and forwarded counts add up across threads

use pipeline_logging::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Logger that announces each write and then takes its time, so writes
/// are still running when `wait()` is called
struct SlowLogger {
    entered: crossbeam_channel::Sender<()>,
    completed: AtomicUsize,
    delay: Duration,
}

impl EventLogger for SlowLogger {
    fn log(&self, _entry: LogEntry, _mode: Severity) {
        let _ = self.entered.send(());
        thread::sleep(self.delay);
        self.completed.fetch_add(1, Ordering::SeqCst);
    }

    fn close(&self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "slow"
    }
}

#[test]
fn test_wait_covers_concurrent_log_calls() {
    let (entered_tx, entered_rx) = crossbeam_channel::unbounded();
    let logger = Arc::new(SlowLogger {
        entered: entered_tx,
        completed: AtomicUsize::new(0),
        delay: Duration::from_millis(50),
    });
    let binding = Arc::new(EventLogBinding::new("stress", Arc::clone(&logger)).unwrap());

    let severities = Severity::ALL;
    let mut handles = vec![];
    for severity in severities {
        let binding = Arc::clone(&binding);
        handles.push(thread::spawn(move || {
            binding.process(&ExecutionEvent::new(severity, "concurrent"));
        }));
    }

    // Every write is in flight before we start waiting
    for _ in 0..severities.len() {
        entered_rx.recv().unwrap();
    }
    binding.wait();

    assert_eq!(logger.completed.load(Ordering::SeqCst), severities.len());
    assert_eq!(binding.severity(), Severity::MAX);

    for handle in handles {
        handle.join().expect("Thread panicked");
    }
}

#[test]
fn test_concurrent_maximum_and_counts() {
    let logger = Arc::new(MemoryLogger::new());
    let binding = Arc::new(
        EventLogBinding::builder(Arc::clone(&logger))
            .metadata("stress")
            .min_severity(Severity::Warning)
            .build()
            .unwrap(),
    );

    const THREADS: usize = 8;
    const EVENTS_PER_THREAD: usize = 500;

    let mut handles = vec![];
    for thread_id in 0..THREADS {
        let binding = Arc::clone(&binding);
        handles.push(thread::spawn(move || {
            for i in 0..EVENTS_PER_THREAD {
                // Only thread 3 ever reports Fatal, and only once
                let severity = if thread_id == 3 && i == EVENTS_PER_THREAD / 2 {
                    Severity::Fatal
                } else {
                    Severity::ALL[(thread_id + i) % 6]
                };
                binding.process(&ExecutionEvent::new(
                    severity,
                    format!("thread {} event {}", thread_id, i),
                ));
            }
        }));
    }

    for handle in handles {
        handle.join().expect("Thread panicked");
    }
    binding.wait();

    let total = (THREADS * EVENTS_PER_THREAD) as u64;
    let metrics = binding.metrics();
    assert_eq!(metrics.processed(), total);
    assert_eq!(metrics.filtered() + metrics.forwarded(), total);
    assert_eq!(logger.len() as u64, metrics.forwarded());
    assert!(logger
        .entries()
        .iter()
        .all(|(_, mode)| *mode >= Severity::Warning));
    assert_eq!(binding.severity(), Severity::Fatal);
}

#[test]
fn test_concurrent_async_delivery() {
    let memory = Arc::new(MemoryLogger::new());
    let logger = Arc::new(AsyncLogger::with_shared(Arc::clone(&memory)).unwrap());
    let binding = Arc::new(EventLogBinding::new("async-stress", logger).unwrap());

    let mut handles = vec![];
    for thread_id in 0..4 {
        let binding = Arc::clone(&binding);
        handles.push(thread::spawn(move || {
            for i in 0..250 {
                binding.process(&ExecutionEvent::new(
                    Severity::Info,
                    format!("thread {} event {}", thread_id, i),
                ));
            }
        }));
    }
    for handle in handles {
        handle.join().expect("Thread panicked");
    }

    binding.wait();
    binding.close().unwrap();

    assert_eq!(memory.len(), 1000);
}
