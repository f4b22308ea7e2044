//! Basic logger usage example
//!
//! Demonstrates exact-match gating and the three output formats.
//!
//! Run with: cargo run --example basic_usage

use plumbing_logging::prelude::*;
use plumbing_logging::{error, info};

#[derive(Debug, thiserror::Error)]
#[error("connection refused")]
struct ConnectionRefused;

fn main() -> Result<()> {
    println!("=== Plumbing Logging - Basic Usage Example ===\n");

    // Plain text, info only
    let mut logger = Logger::new("basic-usage");

    println!("1. Info logger, plain text:");
    let mut entry = logger.entry();
    info!(entry, "starting", "up", "port", 8080)?;
    error!(entry, &ConnectionRefused, "hidden: info loggers never emit errors")?;
    info!(entry, "odd number of values is dropped")?;

    println!("\n2. Error logger, JSON:");
    logger.level = LogLevel::Error;
    logger.formatter = Formatter::Json;
    let mut entry = logger.entry();
    error!(entry, &ConnectionRefused, "dial failed", "host", "db-1", "attempt", 3)?;
    info!(entry, "hidden", "error loggers never emit info")?;
    info!(entry, "reported as a diagnostic")?;

    println!("\n3. Info logger, tab-aligned text:");
    logger.level = LogLevel::Info;
    logger.formatter = Formatter::TabText;
    let mut entry = logger.entry();
    info!(entry, "user", "alice", "items", vec![1, 2, 3])?;

    println!("\n4. Entries keep the configuration they were created with:");
    let mut before = logger.entry();
    logger.name = "renamed".to_string();
    info!(before, "still", "basic-usage")?;
    info!(logger.entry(), "now", "renamed")?;

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
