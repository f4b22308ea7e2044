//! Logger configuration
//!
//! A [`Logger`] is a plain configuration bundle. It writes nothing by itself;
//! lines are emitted through [`Entry`] values stamped from it with
//! [`Logger::entry`]. Fields are public and may be reassigned at any time.
//! No assignment is validated: a `level` other than `info` or `error` simply
//! silences every entry created afterwards.

use super::entry::Entry;
use super::error_writer::ErrorWriter;
use super::formatter::Formatter;
use super::log_level::LogLevel;
use super::sink::Sink;
use super::timestamp::TimestampFormat;

#[derive(Debug, Clone)]
pub struct Logger {
    /// Rendered as `app` in every line
    pub name: String,
    pub sink: Sink,
    pub time_format: TimestampFormat,
    /// The single severity this logger emits
    pub level: LogLevel,
    pub formatter: Formatter,
}

impl Logger {
    /// Create a logger writing plain text `info` lines to standard output
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sink: Sink::stdout(),
            time_format: TimestampFormat::default(),
            level: LogLevel::default(),
            formatter: Formatter::default(),
        }
    }

    /// Create a builder for Logger
    ///
    /// # Example
    /// ```
    /// use plumbing_logging::prelude::*;
    ///
    /// let logger = Logger::builder("api")
    ///     .level(LogLevel::Error)
    ///     .formatter(Formatter::Json)
    ///     .sink(Sink::stderr())
    ///     .build();
    /// assert_eq!(logger.level, LogLevel::Error);
    /// ```
    #[must_use]
    pub fn builder(name: impl Into<String>) -> LoggerBuilder {
        LoggerBuilder::new(name)
    }

    /// Stamp a new entry from a snapshot of this configuration
    #[must_use]
    pub fn entry(&self) -> Entry {
        Entry::new(self.clone())
    }

    /// Writer that turns every line written to it into an `error` call
    ///
    /// `source` becomes the key of each line and the written text its value.
    #[must_use]
    pub fn error_writer(&self, source: impl Into<String>) -> ErrorWriter {
        ErrorWriter::new(self.entry(), source)
    }

    /// Whether a call of severity `level` passes this logger's gate
    ///
    /// The comparison is exact: there is no ordering between levels.
    #[inline]
    pub fn gate(&self, level: LogLevel) -> bool {
        self.level == level
    }
}

/// Builder for constructing Logger with a fluent API
pub struct LoggerBuilder {
    logger: Logger,
}

impl LoggerBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            logger: Logger::new(name),
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: LogLevel) -> Self {
        self.logger.level = level;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn formatter(mut self, formatter: Formatter) -> Self {
        self.logger.formatter = formatter;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn sink(mut self, sink: Sink) -> Self {
        self.logger.sink = sink;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn time_format(mut self, format: TimestampFormat) -> Self {
        self.logger.time_format = format;
        self
    }

    /// Set a custom timestamp format using a strftime-compatible format string
    #[must_use = "builder methods return a new value"]
    pub fn custom_time_format(mut self, pattern: &str) -> Self {
        self.logger.time_format = TimestampFormat::from(pattern);
        self
    }

    pub fn build(self) -> Logger {
        self.logger
    }
}
