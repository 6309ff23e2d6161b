//! Transport-level error types.
//!
//! Internal to the clients; mapped to the core `UpstreamError` at the port
//! boundary.

use orbitdash_core::UpstreamError;
use thiserror::Error;

/// Result type alias for upstream HTTP operations.
pub type UpstreamResult<T> = Result<T, UpstreamHttpError>;

/// Errors raised while talking to an upstream over HTTP.
#[derive(Debug, Error)]
pub enum UpstreamHttpError {
    /// The request completed with a non-success status.
    #[error("request to {url} failed with status {status}")]
    Status {
        /// HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
    },

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// Required configuration is missing.
    #[error("{0}")]
    NotConfigured(String),
}

impl UpstreamHttpError {
    /// Map to the port error for `service`.
    pub(crate) fn into_port(self, service: &'static str) -> UpstreamError {
        match self {
            Self::Status { status, .. } => UpstreamError::Status { service, status },
            Self::Network(e) if e.is_decode() => UpstreamError::InvalidResponse {
                service,
                message: e.to_string(),
            },
            Self::Network(e) => UpstreamError::Unavailable {
                service,
                message: e.to_string(),
            },
            Self::InvalidUrl(e) => UpstreamError::NotConfigured {
                service,
                message: format!("invalid base URL: {e}"),
            },
            Self::JsonParse(e) => UpstreamError::InvalidResponse {
                service,
                message: e.to_string(),
            },
            Self::NotConfigured(message) => UpstreamError::NotConfigured { service, message },
        }
    }
}
