//! ISS telemetry service port.

use async_trait::async_trait;
use serde_json::Value;

use super::UpstreamError;

/// The telemetry service that collects ISS positions and OSDR listings.
///
/// Methods return the upstream JSON body untouched; the dashboard's proxy
/// routes hand it to clients as-is.
#[async_trait]
pub trait TelemetryPort: Send + Sync {
    /// Last collected ISS sample.
    async fn last(&self) -> Result<Value, UpstreamError>;

    /// Movement trend between recent samples. `query` is a raw query string
    /// forwarded unchanged (without the leading `?`).
    async fn trend(&self, query: Option<&str>) -> Result<Value, UpstreamError>;

    /// Most recent OSDR datasets, at most `limit`.
    async fn osdr_list(&self, limit: u32) -> Result<Value, UpstreamError>;
}
