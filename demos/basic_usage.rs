//! Basic binding usage example
//!
//! Demonstrates severity tracking, filtering and console routing.
//!
//! Run with: cargo run --example basic_usage

use pipeline_logging::emit;
use pipeline_logging::prelude::*;
use std::sync::Arc;

fn main() -> Result<()> {
    println!("=== Pipeline Logging - Basic Usage Example ===\n");

    let binding = EventLogBinding::builder(Arc::new(ConsoleLogger::new()))
        .metadata("build-step-3")
        .min_severity(Severity::Info)
        .build()?;

    println!("1. Events at different severities (DEBUG and PROGRESS are filtered):");
    emit!(binding, Severity::Debug, "resolved {} dependencies", 42);
    emit!(binding, Severity::Progress, "compiling 10%");
    emit!(binding, Severity::Info, "compiled {} crates", 17);
    emit!(binding, Severity::Warning, "unused variable `x`");
    emit!(binding, Severity::Error, "disk full");

    binding.wait();

    println!("\n2. Worst severity seen: {}", binding.severity());
    let metrics = binding.metrics();
    println!(
        "   processed={} forwarded={} filtered={}",
        metrics.processed(),
        metrics.forwarded(),
        metrics.filtered()
    );

    binding.close()?;
    println!("\n=== Example completed successfully! ===");

    Ok(())
}
