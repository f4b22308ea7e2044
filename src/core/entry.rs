//! Log entries
//!
//! An [`Entry`] is the only way to emit a line. It owns a clone of the
//! [`Logger`] it was created from, so later changes to that logger never
//! reach entries that already exist; only the sink is shared.
//!
//! Gating is exact-match: `info` emits only when the logger level is
//! [`LogLevel::Info`], `error` emits only when it is [`LogLevel::Error`].
//! Failures to log (odd payloads, unformattable values) are reported through
//! `error` itself, so they are gated the same way and vanish on an `info`
//! logger.

use super::error::{LoggerError, Result};
use super::field_value::FieldValue;
use super::log_level::LogLevel;
use super::logger::Logger;
use chrono::Utc;

/// Message attached to a rejected key/value payload
pub const UNABLE_TO_LOG: &str = "unable to log";

/// Message attached to a payload the formatter could not serialize
pub const UNABLE_TO_FORMAT: &str = "unable to format message";

/// Who started the current emission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Origin {
    Caller,
    Diagnostic,
}

/// One log event bound to a snapshot of a [`Logger`]
///
/// An entry can be reused for any number of calls; `data` is empty again
/// after each of them.
#[derive(Debug, Clone)]
pub struct Entry {
    pub logger: Logger,
    /// Alternating keys and values of the call in progress
    pub data: Vec<FieldValue>,
    /// Severity of the most recent emission attempt; gating uses `logger.level`
    ///
    /// A rejected `info` payload is reported through the error path, which
    /// leaves this at [`LogLevel::Error`].
    pub level: LogLevel,
}

impl Entry {
    /// Create an entry owning `logger`; usually reached through [`Logger::entry`]
    pub fn new(logger: Logger) -> Self {
        Self {
            logger,
            data: Vec::new(),
            level: LogLevel::Info,
        }
    }

    /// Emit an info line built from alternating keys and values
    ///
    /// # Example
    ///
    /// ```
    /// use plumbing_logging::{kvs, Logger, MemoryWriter, Sink};
    ///
    /// let memory = MemoryWriter::new();
    /// let mut logger = Logger::new("svc");
    /// logger.sink = Sink::from_writer(memory.clone());
    ///
    /// let mut entry = logger.entry();
    /// entry.info(kvs!["starting", "up", "port", 8080]).unwrap();
    /// assert!(memory.contents().ends_with(" app: svc starting: up port: 8080\n"));
    /// ```
    ///
    /// # Errors
    ///
    /// Only sink write failures are returned. An odd payload is reported as
    /// an error line (when the logger level allows it) and returns `Ok`.
    pub fn info<I>(&mut self, kvs: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Into<FieldValue>,
    {
        self.level = LogLevel::Info;
        let kvs: Vec<FieldValue> = kvs.into_iter().map(Into::into).collect();

        if kvs.len() % 2 != 0 {
            self.data.clear();
            return self.report(LoggerError::UnevenKeyValues, UNABLE_TO_LOG, Origin::Caller);
        }

        if !self.logger.gate(LogLevel::Info) {
            return Ok(());
        }

        self.data = kvs;
        self.emit(Origin::Caller)
    }

    /// Emit an error line: `kvs` followed by `err`'s description and `msg`
    ///
    /// The description becomes a key and `msg` its value.
    ///
    /// # Example
    ///
    /// ```
    /// use plumbing_logging::{kvs, Formatter, LogLevel, Logger, MemoryWriter, Sink};
    ///
    /// let memory = MemoryWriter::new();
    /// let mut logger = Logger::new("svc");
    /// logger.sink = Sink::from_writer(memory.clone());
    /// logger.level = LogLevel::Error;
    /// logger.formatter = Formatter::Json;
    ///
    /// let err = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
    /// logger.entry().error(&err, "write failed", kvs!["path", "/tmp/x"]).unwrap();
    ///
    /// let line: serde_json::Value = serde_json::from_str(&memory.contents()).unwrap();
    /// assert_eq!(line["disk full"], "write failed");
    /// assert_eq!(line["path"], "/tmp/x");
    /// ```
    pub fn error<E, I>(&mut self, err: &E, msg: &str, kvs: I) -> Result<()>
    where
        E: std::error::Error + ?Sized,
        I: IntoIterator,
        I::Item: Into<FieldValue>,
    {
        let kvs: Vec<FieldValue> = kvs.into_iter().map(Into::into).collect();
        self.log_error(err.to_string(), msg, kvs, Origin::Caller)
    }

    fn log_error(
        &mut self,
        description: String,
        msg: &str,
        mut kvs: Vec<FieldValue>,
        origin: Origin,
    ) -> Result<()> {
        self.level = LogLevel::Error;
        if !self.logger.gate(LogLevel::Error) {
            return Ok(());
        }

        if kvs.len() % 2 != 0 {
            self.data.clear();
            return self.report(LoggerError::UnevenKeyValues, UNABLE_TO_LOG, origin);
        }

        kvs.push(FieldValue::String(description));
        kvs.push(FieldValue::from(msg));
        self.data = kvs;
        self.emit(origin)
    }

    /// Format the payload, write it, and leave the payload empty
    fn emit(&mut self, origin: Origin) -> Result<()> {
        let formatted = self.logger.formatter.format(self, &Utc::now());
        self.data.clear();

        match formatted {
            Ok(line) => self.logger.sink.write_line(&line),
            Err(err) => self.report(err, UNABLE_TO_FORMAT, origin),
        }
    }

    /// Self-diagnostic path
    ///
    /// Emits a fixed two-element payload at error severity. A failure while
    /// already reporting is dropped, which bounds the recursion to one hop.
    fn report(&mut self, err: LoggerError, msg: &str, origin: Origin) -> Result<()> {
        if origin == Origin::Diagnostic {
            return Ok(());
        }
        self.log_error(err.to_string(), msg, Vec::new(), Origin::Diagnostic)
    }
}

impl From<Logger> for Entry {
    fn from(logger: Logger) -> Self {
        Entry::new(logger)
    }
}
