//! # Plumbing Logging
//!
//! Synchronous key/value logging. A [`Logger`] holds the configuration, an
//! [`Entry`] stamped from it emits lines:
//!
//! ```
//! use plumbing_logging::prelude::*;
//!
//! let memory = MemoryWriter::new();
//! let logger = Logger::builder("svc")
//!     .sink(Sink::from_writer(memory.clone()))
//!     .build();
//!
//! let mut entry = logger.entry();
//! entry.info(kvs!["starting", "up", "port", 8080]).unwrap();
//! assert_eq!(memory.lines().len(), 1);
//! ```
//!
//! ## Features
//!
//! - **Exact-match gating**: a logger emits either `info` or `error` lines, never both
//! - **Three formats**: JSON, tab-aligned text, plain text
//! - **Self-diagnostics**: malformed calls are reported as error lines
//! - **`network`**: preconfigured hardened HTTP server settings that route
//!   the server's error stream into a logger

pub mod core;
pub mod macros;

#[cfg(feature = "network")]
pub mod network;

pub mod prelude {
    pub use crate::core::{
        Entry, ErrorWriter, FieldValue, Formatter, LogLevel, Logger, LoggerBuilder, LoggerConfig,
        LoggerError, MemoryWriter, OutputTarget, Result, Sink, TimestampFormat,
    };
    pub use crate::kvs;
}

pub use crate::core::{
    Entry, ErrorWriter, FieldValue, Formatter, LogLevel, Logger, LoggerBuilder, LoggerConfig,
    LoggerError, MemoryWriter, OutputTarget, Result, Sink, TabSettings, TabWriter,
    TimestampFormat, DEFAULT_TIME_FORMAT, UNABLE_TO_FORMAT, UNABLE_TO_LOG,
};
