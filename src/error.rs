//! Unified error types.
//!
//! Errors only travel as far as the boundary of each independent data source.
//! The aggregator and the transaction feed log them and degrade; they never
//! hand them to presentation.

use thiserror::Error;

/// Top-level crate error.
#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// HTTP-layer errors. Every variant means "source unavailable" to callers.
#[derive(Error, Debug)]
pub enum HttpError {
    /// The request never produced a response (DNS, connect, TLS, timeout).
    #[cfg(feature = "http")]
    #[error("Network failure: {0}")]
    Network(#[from] reqwest::Error),

    /// The upstream answered with a non-2xx status.
    #[error("Upstream error {status}: {body}")]
    Upstream { status: u16, body: String },

    /// The body was not JSON, or did not have the expected shape.
    #[error("Malformed response: {0}")]
    Malformed(String),

    #[error("Max retries exceeded after {attempts} attempts: {last_error}")]
    MaxRetriesExceeded { attempts: u32, last_error: String },
}

impl HttpError {
    /// Short label used in log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            #[cfg(feature = "http")]
            HttpError::Network(_) => "network_failure",
            HttpError::Upstream { .. } => "upstream_error",
            HttpError::Malformed(_) => "malformed_response",
            HttpError::MaxRetriesExceeded { .. } => "max_retries_exceeded",
        }
    }
}
