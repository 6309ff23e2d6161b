//! HTTP clients for the services the dashboard reads from.
//!
//! - [`IssClient`]: the ISS telemetry service (positions, trend, OSDR listings)
//! - [`JwstClient`]: the JWST image API
//! - [`AstroClient`]: the Astronomy API events endpoint
//!
//! Each client implements the matching port from `orbitdash-core` and maps
//! transport failures to `UpstreamError`.

#![deny(unsafe_code)]
// Allow private types in public type aliases - the backend is an
// implementation detail reached only through the port traits
#![allow(private_interfaces, private_bounds)]

mod clients;
mod config;
mod error;
mod http;

// ============================================================================
// Public API
// ============================================================================

// Clients
pub use clients::{
    AstroClient, DefaultAstroClient, DefaultIssClient, DefaultJwstClient, IssClient, JwstClient,
};

// Configuration
pub use config::{
    DEFAULT_ASTRO_BASE_URL, DEFAULT_ISS_BASE_URL, DEFAULT_JWST_BASE_URL, UpstreamConfig,
};

// Errors
pub use error::UpstreamHttpError;
