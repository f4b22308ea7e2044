//! Preconfigured HTTP server settings
//!
//! [`http_server`] turns a port, a request handler and a list of
//! certificates into a [`Server`] with fixed, hardened defaults:
//! 30 second timeouts, TLS 1.3 only, a short curve preference list and two
//! AES-256-GCM cipher suites. The server's own error stream is an
//! [`ErrorWriter`] over the supplied logger, so transport errors show up as
//! regular error lines.
//!
//! Nothing here opens sockets; the result is handed to whichever HTTP stack
//! the application runs.
//!
//! # Example
//!
//! ```
//! use plumbing_logging::network::{http_server, ServerParameters, TlsVersion};
//! use plumbing_logging::Logger;
//!
//! let server = http_server(ServerParameters {
//!     logger: Logger::new("gateway"),
//!     port: "8443".to_string(),
//!     handler: |path: &str| format!("hello from {}", path),
//!     certificates: Vec::new(),
//! });
//!
//! assert_eq!(server.addr, ":8443");
//! assert_eq!(server.tls.min_version, TlsVersion::Tls13);
//! assert_eq!((server.handler)("/"), "hello from /");
//! ```

use crate::core::{ErrorWriter, Logger};
use std::fmt;
use std::time::Duration;

pub const READ_TIMEOUT: Duration = Duration::from_secs(30);
pub const READ_HEADER_TIMEOUT: Duration = Duration::from_secs(30);
pub const WRITE_TIMEOUT: Duration = Duration::from_secs(30);

/// Key under which server error lines are logged
pub const ERROR_LOG_SOURCE: &str = "http server";

/// Lowest protocol version the server accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TlsVersion {
    Tls13,
}

/// Named elliptic curves, in preference order when listed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Curve {
    P521,
    P384,
    P256,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CipherSuite {
    EcdheEcdsaWithAes256GcmSha384,
    EcdheRsaWithAes256GcmSha384,
}

impl CipherSuite {
    /// IANA registry name
    pub fn iana_name(&self) -> &'static str {
        match self {
            CipherSuite::EcdheEcdsaWithAes256GcmSha384 => {
                "TLS_ECDHE_ECDSA_WITH_AES_256_GCM_SHA384"
            }
            CipherSuite::EcdheRsaWithAes256GcmSha384 => "TLS_ECDHE_RSA_WITH_AES_256_GCM_SHA384",
        }
    }

    /// IANA registry code point
    pub fn id(&self) -> u16 {
        match self {
            CipherSuite::EcdheEcdsaWithAes256GcmSha384 => 0xc02c,
            CipherSuite::EcdheRsaWithAes256GcmSha384 => 0xc030,
        }
    }
}

impl fmt::Display for CipherSuite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.iana_name())
    }
}

/// DER encoded certificate chain and its private key
#[derive(Clone, PartialEq, Eq)]
pub struct Certificate {
    pub chain: Vec<Vec<u8>>,
    pub private_key: Vec<u8>,
}

impl fmt::Debug for Certificate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Certificate")
            .field("chain_len", &self.chain.len())
            .field("private_key", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TlsSettings {
    pub certificates: Vec<Certificate>,
    pub min_version: TlsVersion,
    pub curve_preferences: Vec<Curve>,
    pub cipher_suites: Vec<CipherSuite>,
}

impl TlsSettings {
    pub fn hardened(certificates: Vec<Certificate>) -> Self {
        Self {
            certificates,
            min_version: TlsVersion::Tls13,
            curve_preferences: vec![Curve::P521, Curve::P384, Curve::P256],
            cipher_suites: vec![
                CipherSuite::EcdheEcdsaWithAes256GcmSha384,
                CipherSuite::EcdheRsaWithAes256GcmSha384,
            ],
        }
    }
}

pub struct ServerParameters<H> {
    pub logger: Logger,
    pub port: String,
    pub handler: H,
    pub certificates: Vec<Certificate>,
}

pub struct Server<H> {
    pub logger: Logger,
    /// Listen address, `:<port>` on all interfaces
    pub addr: String,
    pub handler: H,
    pub read_timeout: Duration,
    pub read_header_timeout: Duration,
    pub write_timeout: Duration,
    pub tls: TlsSettings,
    /// Protocols offered for upgrade after the TLS handshake; empty disables HTTP/2
    pub next_protocols: Vec<String>,
    /// Sink for the server's internal error messages
    pub error_log: ErrorWriter,
}

impl<H> fmt::Debug for Server<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Server")
            .field("addr", &self.addr)
            .field("read_timeout", &self.read_timeout)
            .field("read_header_timeout", &self.read_header_timeout)
            .field("write_timeout", &self.write_timeout)
            .field("tls", &self.tls)
            .field("next_protocols", &self.next_protocols)
            .finish_non_exhaustive()
    }
}

/// Build a server with the hardened defaults
pub fn http_server<H>(parameters: ServerParameters<H>) -> Server<H> {
    let error_log = parameters.logger.error_writer(ERROR_LOG_SOURCE);

    Server {
        addr: format!(":{}", parameters.port),
        handler: parameters.handler,
        read_timeout: READ_TIMEOUT,
        read_header_timeout: READ_HEADER_TIMEOUT,
        write_timeout: WRITE_TIMEOUT,
        tls: TlsSettings::hardened(parameters.certificates),
        next_protocols: Vec::new(),
        error_log,
        logger: parameters.logger,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Formatter, LogLevel, MemoryWriter, Sink};
    use std::io::Write;

    fn parameters(logger: Logger) -> ServerParameters<()> {
        ServerParameters {
            logger,
            port: "8443".to_string(),
            handler: (),
            certificates: vec![Certificate {
                chain: vec![vec![0x30, 0x82]],
                private_key: vec![0x01],
            }],
        }
    }

    #[test]
    fn test_hardened_defaults() {
        let server = http_server(parameters(Logger::new("gateway")));

        assert_eq!(server.addr, ":8443");
        assert_eq!(server.read_timeout, Duration::from_secs(30));
        assert_eq!(server.read_header_timeout, Duration::from_secs(30));
        assert_eq!(server.write_timeout, Duration::from_secs(30));
        assert_eq!(server.tls.min_version, TlsVersion::Tls13);
        assert_eq!(
            server.tls.curve_preferences,
            vec![Curve::P521, Curve::P384, Curve::P256]
        );
        assert_eq!(
            server
                .tls
                .cipher_suites
                .iter()
                .map(CipherSuite::id)
                .collect::<Vec<_>>(),
            vec![0xc02c, 0xc030]
        );
        assert_eq!(server.tls.certificates.len(), 1);
        assert!(server.next_protocols.is_empty());
    }

    #[test]
    fn test_error_log_routes_to_logger() {
        let memory = MemoryWriter::new();
        let logger = Logger::builder("gateway")
            .level(LogLevel::Error)
            .formatter(Formatter::Json)
            .sink(Sink::from_writer(memory.clone()))
            .build();
        let mut server = http_server(parameters(logger));

        server
            .error_log
            .write_all(b"http: TLS handshake error from 10.0.0.7:5121: EOF\n")
            .unwrap();

        let line: serde_json::Value = serde_json::from_str(&memory.contents()).unwrap();
        assert_eq!(
            line[ERROR_LOG_SOURCE],
            "http: TLS handshake error from 10.0.0.7:5121: EOF"
        );
        assert_eq!(line["app"], "gateway");
    }

    #[test]
    fn test_certificate_debug_redacts_key() {
        let cert = Certificate {
            chain: vec![vec![1, 2, 3]],
            private_key: vec![4, 5, 6],
        };
        let debug = format!("{:?}", cert);
        assert!(debug.contains("<redacted>"));
        assert!(!debug.contains("4, 5, 6"));
    }
}
