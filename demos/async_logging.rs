//! Async logging example
//!
//! Several worker threads report through one binding whose logger writes
//! from a background thread.
//!
//! Run with: cargo run --example async_logging

use pipeline_logging::prelude::*;
use std::sync::Arc;
use std::thread;

fn main() -> Result<()> {
    println!("=== Pipeline Logging - Async Logging Example ===\n");

    let logger = AsyncLogger::new(ConsoleLogger::new())?;
    let binding = Arc::new(EventLogBinding::new("batch-import", Arc::new(logger))?);

    let handles: Vec<_> = (0..4)
        .map(|worker| {
            let binding = Arc::clone(&binding);
            thread::spawn(move || {
                for item in 0..5 {
                    let severity = if worker == 2 && item == 3 {
                        Severity::Loss
                    } else {
                        Severity::Iteration
                    };
                    binding.process(
                        &ExecutionEvent::new(severity, format!("worker {} handled record", worker))
                            .with_item(format!("record-{}", item)),
                    );
                }
            })
        })
        .collect();

    for handle in handles {
        let _ = handle.join();
    }

    binding.wait();
    // Drains the queue before closing the console
    binding.close()?;

    println!("\nWorst severity: {}", binding.severity());
    println!("=== Example completed successfully! ===");

    Ok(())
}
