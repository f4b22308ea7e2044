//! File logging example
//!
//! Builds a logger from a JSON configuration and appends to a file.
//!
//! Run with: cargo run --example file_logging

use plumbing_logging::prelude::*;
use std::fs;

fn main() -> Result<()> {
    println!("=== Plumbing Logging - File Logging Example ===\n");

    let dir = std::env::temp_dir().join("plumbing_logging_demo");
    fs::create_dir_all(&dir)?;
    let path = dir.join("app.log");

    let config = LoggerConfig {
        name: "file-logging".to_string(),
        level: "info".to_string(),
        time_format: "%Y-%m-%dT%H:%M:%S".to_string(),
        formatter: Formatter::Json,
        output: OutputTarget::File(path.clone()),
    };
    println!("Configuration:\n{}\n", serde_json::to_string_pretty(&config)?);

    let logger = config.build()?;
    let mut entry = logger.entry();
    for i in 0..5 {
        entry.info(kvs!["batch", i, "records", i * 100])?;
    }
    logger.sink.flush()?;

    println!("Wrote to {}:", path.display());
    print!("{}", fs::read_to_string(&path)?);

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
