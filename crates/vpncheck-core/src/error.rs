//! Error types for the vpncheck system
//!
//! This module defines all error types used throughout the crate.

use thiserror::Error;

/// Result type alias for vpncheck operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for the vpncheck system
#[derive(Error, Debug)]
pub enum Error {
    /// The input is not a syntactically valid IPv4 or IPv6 address.
    ///
    /// Raised before any store interaction; an invalid address never
    /// reaches the store.
    #[error("invalid IP address: {ip}")]
    InvalidAddress {
        /// The rejected input
        ip: String,
    },

    /// The store connection could not be established or maintained
    #[error("store connection error: {0}")]
    Connection(String),

    /// A query was attempted without an open connection (sequencing error)
    #[error("store client is not connected")]
    NotConnected,

    /// The store is reachable but the specific operation failed
    #[error("store query error: {0}")]
    Query(String),

    /// Sanitized checker-level failure naming only the offending IP.
    ///
    /// The underlying transport error is logged at the point of occurrence
    /// and deliberately not carried here.
    #[error("session lookup failed for IP {ip}")]
    LookupFailed {
        /// The IP whose lookup failed
        ip: String,
    },

    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create an invalid-address error
    pub fn invalid_address(ip: impl Into<String>) -> Self {
        Self::InvalidAddress { ip: ip.into() }
    }

    /// Create a connection error
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::Connection(msg.into())
    }

    /// Create a query error
    pub fn query(msg: impl Into<String>) -> Self {
        Self::Query(msg.into())
    }

    /// Create a sanitized lookup failure naming only the IP
    pub fn lookup_failed(ip: impl Into<String>) -> Self {
        Self::LookupFailed { ip: ip.into() }
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

/// Helper for converting anyhow::Error at integration boundaries
impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Self::Query(err.to_string())
    }
}
