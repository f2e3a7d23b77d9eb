//! Error types for quake-proxy

use thiserror::Error;

/// Main error type for quake-proxy operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// The backing API answered with a non-success status
    #[error("Upstream returned status {status}: {body}")]
    Upstream { status: u16, body: String },

    /// Transport-level failure (DNS, refused connection, reset, ...)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backing API answered with bytes that are not UTF-8 text
    #[error("Upstream body is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Server error: {0}")]
    Server(String),
}

impl Error {
    /// Upstream HTTP status, if this error carries one
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            Error::Upstream { status, .. } => Some(*status),
            Error::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Result type alias for quake-proxy operations
pub type Result<T> = std::result::Result<T, Error>;
