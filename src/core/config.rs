//! Logger configuration loaded from structured data
//!
//! ```
//! use plumbing_logging::{Formatter, LogLevel, LoggerConfig};
//!
//! let config = LoggerConfig::from_json(r#"{
//!     "name": "api",
//!     "level": "error",
//!     "formatter": "json",
//!     "output": "stderr"
//! }"#).unwrap();
//!
//! let logger = config.build().unwrap();
//! assert_eq!(logger.level, LogLevel::Error);
//! assert_eq!(logger.formatter, Formatter::Json);
//! ```

use super::error::{LoggerError, Result};
use super::formatter::Formatter;
use super::log_level::LogLevel;
use super::logger::Logger;
use super::sink::Sink;
use super::timestamp::TimestampFormat;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where lines go
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputTarget {
    #[default]
    Stdout,
    Stderr,
    File(PathBuf),
}

impl OutputTarget {
    pub fn open(&self) -> Result<Sink> {
        match self {
            OutputTarget::Stdout => Ok(Sink::stdout()),
            OutputTarget::Stderr => Ok(Sink::stderr()),
            OutputTarget::File(path) => Sink::file(path),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggerConfig {
    pub name: String,
    /// Severity tag, parsed case-insensitively
    pub level: String,
    /// strftime pattern; empty means the default
    pub time_format: String,
    pub formatter: Formatter,
    pub output: OutputTarget,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME").to_string(),
            level: LogLevel::default().to_string(),
            time_format: String::new(),
            formatter: Formatter::default(),
            output: OutputTarget::default(),
        }
    }
}

impl LoggerConfig {
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn level(&self) -> Result<LogLevel> {
        self.level
            .parse()
            .map_err(|message: String| LoggerError::config("level", message))
    }

    /// Open the output and assemble the logger
    pub fn build(&self) -> Result<Logger> {
        if self.name.trim().is_empty() {
            return Err(LoggerError::config("name", "logger name must not be empty"));
        }

        Ok(Logger {
            name: self.name.clone(),
            sink: self.output.open()?,
            time_format: TimestampFormat::from(self.time_format.as_str()),
            level: self.level()?,
            formatter: self.formatter,
        })
    }
}
