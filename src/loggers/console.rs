//! Console logger, the reference [`EventLogger`]

use crate::core::{
    EventLogger, LogEntry, LoggerMetrics, OutputFormat, Result, Severity, TimestampFormat,
};
#[cfg(feature = "console")]
use colored::Colorize;

/// Standard stream an entry is written to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleStream {
    Stdout,
    Stderr,
}

/// Writes every entry to stdout, except that entries whose delivery mode is
/// `Error` or worse go to stderr. Nothing is ever dropped.
pub struct ConsoleLogger {
    use_colors: bool,
    timestamp_format: TimestampFormat,
    output_format: OutputFormat,
    metrics: LoggerMetrics,
}

impl ConsoleLogger {
    pub fn new() -> Self {
        Self {
            use_colors: cfg!(feature = "console"),
            timestamp_format: TimestampFormat::default(),
            output_format: OutputFormat::default(),
            metrics: LoggerMetrics::new(),
        }
    }

    /// Enable or disable colored text output (needs the `console` feature)
    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    /// Set the output format for this logger
    ///
    /// # Example
    ///
    /// ```
    /// use pipeline_logging::{ConsoleLogger, OutputFormat};
    ///
    /// let logger = ConsoleLogger::new().with_output_format(OutputFormat::Json);
    /// ```
    #[must_use]
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    /// Timestamp format for the JSON and logfmt encodings
    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    /// The stream a delivery mode is routed to
    pub fn stream_for(mode: Severity) -> ConsoleStream {
        if mode.is_error() {
            ConsoleStream::Stderr
        } else {
            ConsoleStream::Stdout
        }
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    fn render(&self, entry: &LogEntry, mode: Severity) -> String {
        let line = self.output_format.format(entry, mode, &self.timestamp_format);
        match self.output_format {
            OutputFormat::Text if self.use_colors => Self::colorize(line, mode),
            _ => line,
        }
    }

    #[cfg(feature = "console")]
    fn colorize(line: String, mode: Severity) -> String {
        line.color(mode.color_code()).to_string()
    }

    #[cfg(not(feature = "console"))]
    fn colorize(line: String, _mode: Severity) -> String {
        line
    }
}

impl Default for ConsoleLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl EventLogger for ConsoleLogger {
    fn log(&self, entry: LogEntry, mode: Severity) {
        let output = self.render(&entry, mode);
        match Self::stream_for(mode) {
            ConsoleStream::Stderr => eprintln!("{}", output),
            ConsoleStream::Stdout => println!("{}", output),
        }
        self.metrics.record_written();
    }

    fn close(&self) -> Result<()> {
        use std::io::Write;
        // Flush both streams since we write to both
        std::io::stdout().flush()?;
        std::io::stderr().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}
