//! `io::Write` adapter over the error path
//!
//! Components that only know how to write text to a stream (an HTTP server's
//! internal error log, a child process' stderr) can be pointed at an
//! [`ErrorWriter`]. Each complete line becomes one `Entry::error` call, so it
//! is gated, formatted and written exactly like any other error line.
//!
//! `write` always accepts the whole buffer. A line that fails to reach the
//! sink is kept as a deferred error and returned by the next `flush`.

use super::entry::Entry;
use super::error::LoggerError;
use super::field_value::FieldValue;
use std::io::{self, Write};

pub struct ErrorWriter {
    entry: Entry,
    source: LoggerError,
    pending: Vec<u8>,
    deferred: Option<io::Error>,
}

impl ErrorWriter {
    pub fn new(entry: Entry, source: impl Into<String>) -> Self {
        Self {
            entry,
            source: LoggerError::other(source),
            pending: Vec::new(),
            deferred: None,
        }
    }

    fn emit(&mut self, line: &[u8]) -> io::Result<()> {
        let text = String::from_utf8_lossy(line);
        let text = text.trim_end_matches('\r');
        if text.is_empty() {
            return Ok(());
        }
        self.entry
            .error(&self.source, text, Vec::<FieldValue>::new())
            .map_err(io::Error::other)
    }
}

impl Write for ErrorWriter {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.pending.extend_from_slice(data);
        while let Some(pos) = self.pending.iter().position(|b| *b == b'\n') {
            let line: Vec<u8> = self.pending.drain(..=pos).collect();
            if let Err(e) = self.emit(&line[..pos]) {
                self.deferred.get_or_insert(e);
            }
        }
        Ok(data.len())
    }

    /// Emit any unterminated text as a final line
    fn flush(&mut self) -> io::Result<()> {
        if !self.pending.is_empty() {
            let line = std::mem::take(&mut self.pending);
            if let Err(e) = self.emit(&line) {
                self.deferred.get_or_insert(e);
            }
        }
        if let Some(e) = self.deferred.take() {
            return Err(e);
        }
        self.entry.logger.sink.flush().map_err(io::Error::other)
    }
}

impl Drop for ErrorWriter {
    fn drop(&mut self) {
        if let Err(e) = self.flush() {
            eprintln!("[LOGGER ERROR] Failed to flush error writer: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Formatter, LogLevel, Logger, MemoryWriter, Sink};

    fn error_logger(formatter: Formatter) -> (Logger, MemoryWriter) {
        let memory = MemoryWriter::new();
        let logger = Logger::builder("gateway")
            .level(LogLevel::Error)
            .formatter(formatter)
            .sink(Sink::from_writer(memory.clone()))
            .build();
        (logger, memory)
    }

    #[test]
    fn test_each_line_becomes_an_error() {
        let (logger, memory) = error_logger(Formatter::Json);
        let mut writer = logger.error_writer("http");

        writer
            .write_all(b"TLS handshake error from 10.0.0.1\nhttp: Accept error\n")
            .unwrap();

        let lines = memory.lines();
        assert_eq!(lines.len(), 2);
        let first: serde_json::Value = serde_json::from_str(&lines[0]).unwrap();
        assert_eq!(first["http"], "TLS handshake error from 10.0.0.1");
        assert_eq!(first["app"], "gateway");
    }

    #[test]
    fn test_partial_lines_wait_for_newline() {
        let (logger, memory) = error_logger(Formatter::PlainText);
        let mut writer = logger.error_writer("http");

        writer.write_all(b"half a ").unwrap();
        assert!(memory.is_empty());

        writer.write_all(b"line\r\n").unwrap();
        assert!(memory.contents().ends_with("http: half a line\n"));
    }

    #[test]
    fn test_flush_emits_unterminated_text() {
        let (logger, memory) = error_logger(Formatter::PlainText);
        let mut writer = logger.error_writer("http");

        writer.write_all(b"no newline").unwrap();
        writer.flush().unwrap();

        assert_eq!(memory.lines().len(), 1);
    }

    #[test]
    fn test_write_failure_surfaces_on_flush() {
        struct Closed;
        impl Write for Closed {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let logger = Logger::builder("gateway")
            .level(LogLevel::Error)
            .sink(Sink::named("closed", Closed))
            .build();
        let mut writer = logger.error_writer("http");

        assert_eq!(writer.write(b"first\nsecond\n").unwrap(), 13);
        assert!(writer.flush().is_err());
        assert!(writer.flush().is_ok());
    }

    #[test]
    fn test_gated_at_info() {
        let memory = MemoryWriter::new();
        let logger = Logger::builder("gateway")
            .sink(Sink::from_writer(memory.clone()))
            .build();

        let mut writer = logger.error_writer("http");
        writer.write_all(b"dropped\n").unwrap();
        drop(writer);

        assert!(memory.is_empty());
    }
}
