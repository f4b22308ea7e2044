//! Timestamp formatting utilities
//!
//! Every emitted line carries the wall-clock time of the call rendered with
//! the logger's `TimestampFormat`. The default is `YYYY-MM-DD HH:MM:SS`.

use super::error::{LoggerError, Result};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// strftime pattern of [`TimestampFormat::DateTime`]
pub const DEFAULT_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Timestamp format options
///
/// # Examples
///
/// ```
/// use plumbing_logging::TimestampFormat;
/// use chrono::{TimeZone, Utc};
///
/// let at = Utc.with_ymd_and_hms(2025, 1, 8, 10, 30, 45).unwrap();
/// assert_eq!(TimestampFormat::default().format(&at).unwrap(), "2025-01-08 10:30:45");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// Date and time to the second: `2025-01-08 10:30:45`
    #[default]
    DateTime,

    /// ISO 8601 with milliseconds: `2025-01-08T10:30:45.123Z`
    Iso8601,

    /// RFC 3339 format: `2025-01-08T10:30:45+00:00`
    Rfc3339,

    /// Unix timestamp in seconds: `1736332245`
    Unix,

    /// Unix timestamp in milliseconds: `1736332245123`
    UnixMillis,

    /// Custom strftime format
    ///
    /// ```
    /// use plumbing_logging::TimestampFormat;
    ///
    /// // Apache log format
    /// let format = TimestampFormat::Custom("%d/%b/%Y:%H:%M:%S %z".to_string());
    /// ```
    Custom(String),
}

impl TimestampFormat {
    /// Format a `DateTime<Utc>` according to this format
    ///
    /// Fails only for a `Custom` pattern that chrono cannot render.
    pub fn format(&self, datetime: &DateTime<Utc>) -> Result<String> {
        match self {
            TimestampFormat::DateTime => Self::strftime(datetime, DEFAULT_TIME_FORMAT),
            TimestampFormat::Iso8601 => Self::strftime(datetime, "%Y-%m-%dT%H:%M:%S%.3fZ"),
            TimestampFormat::Rfc3339 => Ok(datetime.to_rfc3339()),
            TimestampFormat::Unix => Ok(datetime.timestamp().to_string()),
            TimestampFormat::UnixMillis => Ok(datetime.timestamp_millis().to_string()),
            TimestampFormat::Custom(pattern) => Self::strftime(datetime, pattern),
        }
    }

    fn strftime(datetime: &DateTime<Utc>, pattern: &str) -> Result<String> {
        let items: Vec<Item<'_>> = StrftimeItems::new(pattern).collect();
        if items.iter().any(|item| matches!(item, Item::Error)) {
            return Err(LoggerError::formatter(
                "time",
                format!("invalid time format '{}'", pattern),
            ));
        }

        let mut rendered = String::new();
        write!(rendered, "{}", datetime.format_with_items(items.iter())).map_err(|_| {
            LoggerError::formatter("time", format!("cannot render time format '{}'", pattern))
        })?;
        Ok(rendered)
    }
}

impl From<&str> for TimestampFormat {
    fn from(pattern: &str) -> Self {
        if pattern.is_empty() || pattern == DEFAULT_TIME_FORMAT {
            TimestampFormat::DateTime
        } else {
            TimestampFormat::Custom(pattern.to_string())
        }
    }
}

impl From<String> for TimestampFormat {
    fn from(pattern: String) -> Self {
        TimestampFormat::from(pattern.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_datetime() -> DateTime<Utc> {
        // 2025-01-08 10:30:45.123456 UTC
        Utc.with_ymd_and_hms(2025, 1, 8, 10, 30, 45)
            .single()
            .expect("valid datetime")
            + chrono::Duration::microseconds(123456)
    }

    #[test]
    fn test_default_format() {
        let result = TimestampFormat::default().format(&fixed_datetime()).unwrap();
        assert_eq!(result, "2025-01-08 10:30:45");
    }

    #[test]
    fn test_iso8601_format() {
        let result = TimestampFormat::Iso8601.format(&fixed_datetime()).unwrap();
        assert_eq!(result, "2025-01-08T10:30:45.123Z");
    }

    #[test]
    fn test_rfc3339_format() {
        let result = TimestampFormat::Rfc3339.format(&fixed_datetime()).unwrap();
        assert!(result.starts_with("2025-01-08T10:30:45"));
        assert!(result.contains("+00:00") || result.ends_with('Z'));
    }

    #[test]
    fn test_unix_formats() {
        let secs: i64 = TimestampFormat::Unix
            .format(&fixed_datetime())
            .unwrap()
            .parse()
            .expect("valid unix timestamp");
        let millis: i64 = TimestampFormat::UnixMillis
            .format(&fixed_datetime())
            .unwrap()
            .parse()
            .expect("valid unix millis timestamp");
        assert_eq!(millis / 1000, secs);
    }

    #[test]
    fn test_custom_apache_format() {
        let format = TimestampFormat::Custom("%d/%b/%Y:%H:%M:%S +0000".to_string());
        let result = format.format(&fixed_datetime()).unwrap();
        assert_eq!(result, "08/Jan/2025:10:30:45 +0000");
    }

    #[test]
    fn test_invalid_custom_format() {
        let format = TimestampFormat::Custom("%Q %Y".to_string());
        let err = format.format(&fixed_datetime()).unwrap_err();
        assert!(matches!(err, LoggerError::FormatterError { .. }));
    }

    #[test]
    fn test_from_pattern() {
        assert_eq!(TimestampFormat::from(""), TimestampFormat::DateTime);
        assert_eq!(TimestampFormat::from("%Y-%m-%d %H:%M:%S"), TimestampFormat::DateTime);
        assert_eq!(
            TimestampFormat::from("%H:%M"),
            TimestampFormat::Custom("%H:%M".to_string())
        );
    }

    #[test]
    fn test_deserialization() {
        let format: TimestampFormat =
            serde_json::from_str("\"DateTime\"").expect("deserialize DateTime");
        assert_eq!(format, TimestampFormat::DateTime);

        let format: TimestampFormat =
            serde_json::from_str(r#"{"Custom":"%Y-%m-%d"}"#).expect("deserialize Custom");
        assert_eq!(format, TimestampFormat::Custom("%Y-%m-%d".to_string()));
    }
}
