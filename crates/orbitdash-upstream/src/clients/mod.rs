//! Upstream clients, one per service.
//!
//! Each client is generic over an HTTP backend so unit tests can run against
//! canned responses. Production code uses the `Default*` aliases.

mod astro;
mod jwst;
mod telemetry;

use crate::http::ReqwestBackend;

pub use astro::AstroClient;
pub use jwst::JwstClient;
pub use telemetry::IssClient;

// ============================================================================
// Type Aliases
// ============================================================================

/// ISS telemetry client using the reqwest HTTP backend.
pub type DefaultIssClient = IssClient<ReqwestBackend>;

/// JWST client using the reqwest HTTP backend.
pub type DefaultJwstClient = JwstClient<ReqwestBackend>;

/// Astronomy API client using the reqwest HTTP backend.
pub type DefaultAstroClient = AstroClient<ReqwestBackend>;
