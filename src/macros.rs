//! Macros for building key/value payloads.
//!
//! Payload elements usually have mixed types, which an array literal cannot
//! hold. These macros convert every element into a
//! [`FieldValue`](crate::FieldValue) first.
//!
//! # Examples
//!
//! ```
//! use plumbing_logging::prelude::*;
//! use plumbing_logging::{error, info};
//!
//! let logger = Logger::builder("svc")
//!     .sink(Sink::from_writer(MemoryWriter::new()))
//!     .build();
//! let mut entry = logger.entry();
//!
//! info!(entry, "starting", "up", "port", 8080).unwrap();
//!
//! let err = std::io::Error::new(std::io::ErrorKind::NotFound, "config missing");
//! error!(entry, &err, "startup failed", "path", "/etc/svc.toml").unwrap();
//! ```

/// Build a `Vec<FieldValue>` from alternating keys and values.
///
/// # Examples
///
/// ```
/// use plumbing_logging::{kvs, FieldValue};
///
/// let payload = kvs!["user", "alice", "attempt", 3, "admin", false];
/// assert_eq!(payload.len(), 6);
/// assert_eq!(payload[3], FieldValue::Int(3));
///
/// let empty = kvs![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! kvs {
    () => {
        ::std::vec::Vec::<$crate::FieldValue>::new()
    };
    ($($value:expr),+ $(,)?) => {
        ::std::vec![$($crate::FieldValue::from($value)),+]
    };
}

/// Emit an info line through an entry.
#[macro_export]
macro_rules! info {
    ($entry:expr $(, $value:expr)* $(,)?) => {
        $entry.info($crate::kvs![$($value),*])
    };
}

/// Emit an error line through an entry.
#[macro_export]
macro_rules! error {
    ($entry:expr, $err:expr, $msg:expr $(, $value:expr)* $(,)?) => {
        $entry.error($err, $msg, $crate::kvs![$($value),*])
    };
}
