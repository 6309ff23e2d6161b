//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types or raw
//! JSON where a route passes an upstream body straight through.
//!
//! # Design Rules
//!
//! - No `sqlx` or `reqwest` types in any signature
//! - Traits are minimal; normalization happens in the domain layer

pub mod astro;
pub mod jwst;
pub mod page_repository;
pub mod telemetry;

use std::sync::Arc;
use thiserror::Error;

pub use astro::AstroPort;
pub use jwst::JwstPort;
pub use page_repository::PageRepository;
pub use telemetry::TelemetryPort;

/// Container for all port trait objects.
///
/// Lives in core so that `DashboardCore` can accept it without depending on
/// the adapter crates.
#[derive(Clone)]
pub struct Ports {
    /// ISS telemetry service (also serves OSDR listings).
    pub telemetry: Arc<dyn TelemetryPort>,
    /// JWST image API.
    pub jwst: Arc<dyn JwstPort>,
    /// Astronomy events API.
    pub astro: Arc<dyn AstroPort>,
    /// CMS page storage.
    pub pages: Arc<dyn PageRepository>,
}

impl Ports {
    /// Create a new Ports container.
    pub fn new(
        telemetry: Arc<dyn TelemetryPort>,
        jwst: Arc<dyn JwstPort>,
        astro: Arc<dyn AstroPort>,
        pages: Arc<dyn PageRepository>,
    ) -> Self {
        Self {
            telemetry,
            jwst,
            astro,
            pages,
        }
    }
}

/// Domain-specific errors for repository operations.
///
/// Abstracts away storage implementation details (e.g., sqlx errors).
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The requested entity was not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Storage backend error (database, filesystem, etc.).
    #[error("Storage error: {0}")]
    Storage(String),

    /// A constraint was violated (e.g., invalid slug).
    #[error("Constraint violation: {0}")]
    Constraint(String),
}

/// Errors from calls to upstream HTTP services.
///
/// `service` names the upstream ("telemetry", "jwst", "astro") so that logs
/// and error bodies say which dependency failed.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// The upstream needs credentials or a URL that were not configured.
    #[error("{service} is not configured: {message}")]
    NotConfigured {
        service: &'static str,
        message: String,
    },

    /// The upstream could not be reached.
    #[error("{service} is unavailable: {message}")]
    Unavailable {
        service: &'static str,
        message: String,
    },

    /// The upstream answered with a non-success status.
    #[error("{service} answered with status {status}")]
    Status { service: &'static str, status: u16 },

    /// The upstream answered with something that could not be parsed.
    #[error("{service} returned an invalid response: {message}")]
    InvalidResponse {
        service: &'static str,
        message: String,
    },
}

impl UpstreamError {
    /// Name of the upstream that failed.
    pub const fn service(&self) -> &'static str {
        match self {
            Self::NotConfigured { service, .. }
            | Self::Unavailable { service, .. }
            | Self::Status { service, .. }
            | Self::InvalidResponse { service, .. } => *service,
        }
    }
}

/// Core error type for semantic domain errors.
///
/// Adapters map this to their own error types (HTTP status codes, CLI exit
/// codes).
#[derive(Debug, Error)]
pub enum CoreError {
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// Upstream call failed.
    #[error(transparent)]
    Upstream(#[from] UpstreamError),

    /// Validation error (invalid input).
    #[error("Validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_error_names_service() {
        let err = UpstreamError::Status {
            service: "jwst",
            status: 503,
        };
        assert_eq!(err.service(), "jwst");
        assert!(err.to_string().contains("503"));
    }

    #[test]
    fn core_error_is_transparent_over_sources() {
        let err: CoreError = RepositoryError::NotFound("page 'x'".to_string()).into();
        assert_eq!(err.to_string(), "Not found: page 'x'");
    }
}
