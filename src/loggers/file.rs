//! File logger implementation

use crate::core::{
    EventLogger, LogEntry, LoggerError, LoggerMetrics, OutputFormat, Result, Severity,
    TimestampFormat,
};
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Appends one line per entry to a file.
///
/// With the `file` feature the file is held under an exclusive advisory
/// lock until the logger is closed or dropped, so two loggers can never
/// interleave writes to the same file.
pub struct FileLogger {
    path: PathBuf,
    writer: Mutex<Option<BufWriter<File>>>,
    timestamp_format: TimestampFormat,
    output_format: OutputFormat,
    metrics: LoggerMetrics,
}

impl FileLogger {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new().create(true).append(true).open(&path)?;

        #[cfg(feature = "file")]
        fs2::FileExt::try_lock_exclusive(&file)
            .map_err(|_| LoggerError::file_lock(path.display().to_string()))?;

        Ok(Self {
            path,
            writer: Mutex::new(Some(BufWriter::new(file))),
            timestamp_format: TimestampFormat::default(),
            output_format: OutputFormat::default(),
            metrics: LoggerMetrics::new(),
        })
    }

    /// Set the line encoding
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use pipeline_logging::{FileLogger, OutputFormat};
    ///
    /// let logger = FileLogger::new("/var/log/pipeline.jsonl")
    ///     .unwrap()
    ///     .with_output_format(OutputFormat::Json);
    /// ```
    #[must_use]
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    /// Flush buffered lines without closing the file
    pub fn flush(&self) -> Result<()> {
        match self.writer.lock().as_mut() {
            Some(writer) => writer.flush().map_err(|e| {
                LoggerError::io_operation("flushing log file", self.path.display().to_string(), e)
            }),
            None => Err(LoggerError::LoggerClosed),
        }
    }

    fn write_line(&self, writer: &mut BufWriter<File>, entry: &LogEntry, mode: Severity) -> Result<()> {
        let mut output = self.output_format.format(entry, mode, &self.timestamp_format);
        output.push('\n');
        writer.write_all(output.as_bytes())?;
        Ok(())
    }
}

impl EventLogger for FileLogger {
    fn log(&self, entry: LogEntry, mode: Severity) {
        let mut guard = self.writer.lock();
        let Some(writer) = guard.as_mut() else {
            if self.metrics.record_failed() == 0 {
                eprintln!(
                    "[LOGGER WARNING] Entry logged after '{}' was closed; discarding.",
                    self.path.display()
                );
            }
            return;
        };

        match self.write_line(writer, &entry, mode) {
            Ok(()) => {
                self.metrics.record_written();
            }
            Err(e) => {
                self.metrics.record_failed();
                eprintln!("[LOGGER ERROR] Writing to '{}' failed: {}", self.path.display(), e);
            }
        }
    }

    fn close(&self) -> Result<()> {
        let mut writer = self.writer.lock().take().ok_or(LoggerError::LoggerClosed)?;
        writer.flush().map_err(|e| {
            LoggerError::io_operation("closing log file", self.path.display().to_string(), e)
        })?;

        #[cfg(feature = "file")]
        fs2::FileExt::unlock(writer.get_ref()).map_err(|e| {
            LoggerError::io_operation("unlocking log file", self.path.display().to_string(), e)
        })?;

        Ok(())
    }

    fn name(&self) -> &str {
        "file"
    }
}

impl Drop for FileLogger {
    fn drop(&mut self) {
        // Ensure buffered lines reach the disk
        if let Some(writer) = self.writer.get_mut().as_mut() {
            let _ = writer.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ExecutionEvent;
    use tempfile::TempDir;

    fn entry(severity: Severity, message: &str) -> LogEntry {
        LogEntry::new(ExecutionEvent::new(severity, message), "file-test", None)
    }

    #[test]
    fn test_writes_one_line_per_entry() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let log_file = temp_dir.path().join("events.log");

        let logger = FileLogger::new(&log_file).expect("Failed to create logger");
        logger.log(entry(Severity::Info, "first"), Severity::Info);
        logger.log(entry(Severity::Error, "second\nline"), Severity::Error);
        logger.close().expect("Failed to close");

        let content = std::fs::read_to_string(&log_file).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines, vec!["[file-test] INFO: first", "[file-test] ERROR: second\\nline"]);
        assert_eq!(logger.metrics().written(), 2);
    }

    #[test]
    fn test_second_close_fails() {
        let temp_dir = TempDir::new().unwrap();
        let logger = FileLogger::new(temp_dir.path().join("close.log")).unwrap();
        assert!(logger.close().is_ok());
        assert!(matches!(logger.close(), Err(LoggerError::LoggerClosed)));
        assert!(matches!(logger.flush(), Err(LoggerError::LoggerClosed)));
    }

    #[test]
    fn test_log_after_close_is_counted() {
        let temp_dir = TempDir::new().unwrap();
        let logger = FileLogger::new(temp_dir.path().join("late.log")).unwrap();
        logger.close().unwrap();

        logger.log(entry(Severity::Warning, "too late"), Severity::Warning);
        assert_eq!(logger.metrics().failed(), 1);
        assert_eq!(logger.metrics().written(), 0);
    }

    #[cfg(feature = "file")]
    #[test]
    fn test_exclusive_lock() {
        let temp_dir = TempDir::new().unwrap();
        let log_file = temp_dir.path().join("locked.log");

        let first = FileLogger::new(&log_file).unwrap();
        assert!(matches!(
            FileLogger::new(&log_file),
            Err(LoggerError::FileLockError { .. })
        ));

        first.close().unwrap();
        assert!(FileLogger::new(&log_file).is_ok());
    }

    #[test]
    fn test_json_lines() {
        let temp_dir = TempDir::new().unwrap();
        let log_file = temp_dir.path().join("events.jsonl");

        let logger = FileLogger::new(&log_file)
            .unwrap()
            .with_output_format(OutputFormat::Json);
        logger.log(entry(Severity::Fatal, "boom"), Severity::Fatal);
        logger.close().unwrap();

        let content = std::fs::read_to_string(&log_file).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(content.trim()).unwrap();
        assert_eq!(parsed["mode"], "FATAL");
        assert_eq!(parsed["metadata"], "file-test");
    }
}
