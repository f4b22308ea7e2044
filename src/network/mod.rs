//! Network collaborators

pub mod server;

pub use server::{
    http_server, Certificate, CipherSuite, Curve, Server, ServerParameters, TlsSettings,
    TlsVersion, ERROR_LOG_SOURCE, READ_HEADER_TIMEOUT, READ_TIMEOUT, WRITE_TIMEOUT,
};
