//! Output formats for log lines
//!
//! Provides three interchangeable formats:
//! - Json: one JSON object per line
//! - TabText: `key:` / `value` cells aligned through [`TabWriter`](super::tab_writer::TabWriter)
//! - PlainText: space-delimited `key: value` pairs (default)

use super::entry::Entry;
use super::error::{LoggerError, Result};
use super::tab_writer::TabWriter;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write as _};
use std::io::Write as _;
use std::str::FromStr;

/// Output format for log lines
///
/// Formatting is pure: the same entry and time always give the same bytes.
/// The trailing newline is added by the sink, not here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Formatter {
    /// JSON object seeded with `app` and `time`
    ///
    /// Example: `{"app":"svc","starting":"up","time":"2025-01-08 10:30:45"}`
    #[cfg_attr(feature = "json-default", default)]
    Json,

    /// Tab-separated cells passed through the column aligner
    ///
    /// Example: `time: 2025-01-08 10:30:45 app: svc starting: up`
    #[serde(alias = "tab")]
    TabText,

    /// Space-delimited text
    ///
    /// Example: `time: 2025-01-08 10:30:45 app: svc starting: up`
    #[cfg_attr(not(feature = "json-default"), default)]
    #[serde(alias = "plain", alias = "text")]
    PlainText,
}

impl Formatter {
    /// Format the entry's payload as of `now`
    pub fn format(&self, entry: &Entry, now: &DateTime<Utc>) -> Result<Vec<u8>> {
        let time = entry.logger.time_format.format(now)?;
        match self {
            Formatter::Json => format_json(entry, time),
            Formatter::TabText => format_tab(entry, &time),
            Formatter::PlainText => Ok(format_plain(entry, &time)?.into_bytes()),
        }
    }

    pub fn to_str(&self) -> &'static str {
        match self {
            Formatter::Json => "json",
            Formatter::TabText => "tabtext",
            Formatter::PlainText => "plaintext",
        }
    }
}

fn format_json(entry: &Entry, time: String) -> Result<Vec<u8>> {
    let mut json_obj = serde_json::Map::new();
    json_obj.insert(
        "app".to_string(),
        serde_json::Value::String(entry.logger.name.clone()),
    );
    json_obj.insert("time".to_string(), serde_json::Value::String(time));

    for pair in entry.data.chunks_exact(2) {
        let key = pair[0].to_string();
        let value = pair[1].to_json_value().map_err(|e| match e {
            LoggerError::FormatterError { message, .. } => {
                LoggerError::formatter("json", format!("key `{}`: {}", key, message))
            }
            other => other,
        })?;
        json_obj.insert(key, value);
    }

    Ok(serde_json::to_vec(&serde_json::Value::Object(json_obj))?)
}

fn format_tab(entry: &Entry, time: &str) -> Result<Vec<u8>> {
    let mut writer = TabWriter::new(Vec::new());
    write!(writer, "time: {}\tapp: {}", time, entry.logger.name)?;
    for pair in entry.data.chunks_exact(2) {
        write!(writer, "\t{}:\t{}", pair[0], pair[1])?;
    }
    Ok(writer.into_inner()?)
}

fn format_plain(entry: &Entry, time: &str) -> Result<String> {
    let mut line = String::new();
    write!(line, "time: {} app: {}", time, entry.logger.name).map_err(text_error)?;
    for pair in entry.data.chunks_exact(2) {
        write!(line, " {}: {}", pair[0], pair[1]).map_err(text_error)?;
    }
    Ok(line)
}

fn text_error(_: fmt::Error) -> LoggerError {
    LoggerError::formatter("text", "value could not be rendered")
}

impl fmt::Display for Formatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for Formatter {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(Formatter::Json),
            "tab" | "tabtext" => Ok(Formatter::TabText),
            "plain" | "plaintext" | "text" => Ok(Formatter::PlainText),
            _ => Err(format!("Invalid formatter: '{}'", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FieldValue, Logger};
    use chrono::TimeZone;

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 8, 10, 30, 45).unwrap()
    }

    fn entry_with(data: Vec<FieldValue>) -> Entry {
        let mut entry = Logger::new("svc").entry();
        entry.data = data;
        entry
    }

    fn render(formatter: Formatter, entry: &Entry) -> String {
        String::from_utf8(formatter.format(entry, &at()).unwrap()).unwrap()
    }

    #[test]
    fn test_plain_format() {
        let entry = entry_with(crate::kvs!["starting", "up", "port", 8080]);
        assert_eq!(
            render(Formatter::PlainText, &entry),
            "time: 2025-01-08 10:30:45 app: svc starting: up port: 8080"
        );
    }

    #[test]
    fn test_plain_format_without_pairs() {
        let entry = entry_with(Vec::new());
        assert_eq!(
            render(Formatter::PlainText, &entry),
            "time: 2025-01-08 10:30:45 app: svc"
        );
    }

    #[test]
    fn test_plain_format_does_not_escape() {
        let entry = entry_with(crate::kvs!["msg", "two\nlines"]);
        assert!(render(Formatter::PlainText, &entry).ends_with("msg: two\nlines"));
    }

    #[test]
    fn test_tab_format_single_line() {
        let entry = entry_with(crate::kvs!["starting", "up"]);
        assert_eq!(
            render(Formatter::TabText, &entry),
            "time: 2025-01-08 10:30:45 app: svc starting: up"
        );
    }

    #[test]
    fn test_tab_format_aligns_continuation_lines() {
        let entry = entry_with(crate::kvs!["note", "first\nsecond", "id", 7]);
        assert_eq!(
            render(Formatter::TabText, &entry),
            format!(
                "time: 2025-01-08 10:30:45 app: svc note: first\n{:<26}{:<9}7",
                "second", "id:"
            )
        );
    }

    #[test]
    fn test_json_format() {
        let entry = entry_with(crate::kvs!["starting", "up", "attempt", 3, "ok", true]);
        let parsed: serde_json::Value =
            serde_json::from_slice(&Formatter::Json.format(&entry, &at()).unwrap()).unwrap();

        assert_eq!(parsed["app"], "svc");
        assert_eq!(parsed["time"], "2025-01-08 10:30:45");
        assert_eq!(parsed["starting"], "up");
        assert_eq!(parsed["attempt"], 3);
        assert_eq!(parsed["ok"], true);
        assert_eq!(parsed.as_object().unwrap().len(), 5);
    }

    #[test]
    fn test_json_format_stringifies_keys() {
        let entry = entry_with(crate::kvs![42, "answer"]);
        let parsed: serde_json::Value =
            serde_json::from_slice(&Formatter::Json.format(&entry, &at()).unwrap()).unwrap();
        assert_eq!(parsed["42"], "answer");
    }

    #[test]
    fn test_json_caller_keys_override_seeded_keys() {
        let entry = entry_with(crate::kvs!["app", "other"]);
        let parsed: serde_json::Value =
            serde_json::from_slice(&Formatter::Json.format(&entry, &at()).unwrap()).unwrap();
        assert_eq!(parsed["app"], "other");
    }

    #[test]
    fn test_json_format_is_single_line() {
        let entry = entry_with(crate::kvs!["msg", "two\nlines"]);
        let line = render(Formatter::Json, &entry);
        assert!(!line.contains('\n'));
    }

    #[test]
    fn test_json_format_fails_on_nan() {
        let entry = entry_with(crate::kvs!["ratio", f64::NAN]);
        let err = Formatter::Json.format(&entry, &at()).unwrap_err();

        assert!(matches!(err, LoggerError::FormatterError { .. }));
        assert!(err.to_string().contains("ratio"));
    }

    #[test]
    fn test_text_formats_accept_nan() {
        let entry = entry_with(crate::kvs!["ratio", f64::NAN]);
        assert!(render(Formatter::PlainText, &entry).ends_with("ratio: NaN"));
        assert!(Formatter::TabText.format(&entry, &at()).is_ok());
    }

    #[test]
    fn test_invalid_time_format_fails_every_variant() {
        let mut entry = entry_with(Vec::new());
        entry.logger.time_format = "%Q".into();

        for formatter in [Formatter::Json, Formatter::TabText, Formatter::PlainText] {
            assert!(formatter.format(&entry, &at()).is_err());
        }
    }

    #[test]
    fn test_formatter_parse() {
        assert_eq!("JSON".parse::<Formatter>(), Ok(Formatter::Json));
        assert_eq!("tab".parse::<Formatter>(), Ok(Formatter::TabText));
        assert_eq!("text".parse::<Formatter>(), Ok(Formatter::PlainText));
        assert!("xml".parse::<Formatter>().is_err());
    }

    #[cfg(not(feature = "json-default"))]
    #[test]
    fn test_default_is_plain_text() {
        assert_eq!(Formatter::default(), Formatter::PlainText);
    }
}
