//! HTTP server settings example
//!
//! Shows the hardened defaults and how the server's error stream lands in a
//! logger.
//!
//! Run with: cargo run --example http_server

use plumbing_logging::network::{http_server, ServerParameters};
use plumbing_logging::prelude::*;
use std::io::Write;

fn main() -> Result<()> {
    println!("=== Plumbing Logging - HTTP Server Example ===\n");

    let logger = Logger::builder("http-server")
        .level(LogLevel::Error)
        .formatter(Formatter::Json)
        .build();

    let mut server = http_server(ServerParameters {
        logger,
        port: "8443".to_string(),
        handler: |path: &str| format!("served {}", path),
        certificates: Vec::new(),
    });

    println!("{:#?}\n", server);
    println!("handler: {}\n", (server.handler)("/health"));

    println!("Server error stream:");
    writeln!(server.error_log, "http: TLS handshake error from 10.0.0.7:5121: EOF")?;
    server.error_log.flush()?;

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
