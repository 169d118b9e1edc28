//! File logging example
//!
//! Writes one text log and one JSON-lines log from the same events.
//!
//! Run with: cargo run --example file_logging

use pipeline_logging::prelude::*;
use std::sync::Arc;

fn main() -> Result<()> {
    println!("=== Pipeline Logging - File Logging Example ===\n");

    let dir = std::env::temp_dir();
    let text_path = dir.join("pipeline_logging_demo.log");
    let json_path = dir.join("pipeline_logging_demo.jsonl");

    let text = EventLogBinding::builder(Arc::new(FileLogger::new(&text_path)?))
        .metadata("release")
        .format(
            ExecutionInfoFormat::default()
                .with_timestamp(TimestampFormat::Iso8601)
                .with_execution_path(true),
        )
        .build()?;
    let json = EventLogBinding::new(
        "release",
        Arc::new(FileLogger::new(&json_path)?.with_output_format(OutputFormat::Json)),
    )?;

    let events = [
        ExecutionEvent::new(Severity::Info, "tagging v1.4.0").with_step("release"),
        ExecutionEvent::new(Severity::Warning, "changelog is empty")
            .with_step("release")
            .with_step("notes"),
        ExecutionEvent::new(Severity::Info, "uploaded")
            .with_step("release")
            .with_step("publish")
            .with_item("app-1.4.0.tar.gz"),
    ];

    for event in &events {
        text.process(event);
        json.process(event);
    }

    text.close()?;
    json.close()?;

    println!("Text log:  {}", text_path.display());
    println!("{}", std::fs::read_to_string(&text_path)?);
    println!("JSON log:  {}", json_path.display());
    println!("{}", std::fs::read_to_string(&json_path)?);

    Ok(())
}
