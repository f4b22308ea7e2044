//! Core logger types

pub mod config;
pub mod entry;
pub mod error;
pub mod error_writer;
pub mod field_value;
pub mod formatter;
pub mod log_level;
pub mod logger;
pub mod sink;
pub mod tab_writer;
pub mod timestamp;

pub use config::{LoggerConfig, OutputTarget};
pub use entry::{Entry, UNABLE_TO_FORMAT, UNABLE_TO_LOG};
pub use error::{LoggerError, Result};
pub use error_writer::ErrorWriter;
pub use field_value::FieldValue;
pub use formatter::Formatter;
pub use log_level::LogLevel;
pub use logger::{Logger, LoggerBuilder};
pub use sink::{MemoryWriter, Sink};
pub use tab_writer::{TabSettings, TabWriter};
pub use timestamp::{TimestampFormat, DEFAULT_TIME_FORMAT};
