//! ISS telemetry service.

use std::sync::Arc;

use serde_json::Value;

use crate::domain::{IssOverview, IssSnapshot, IssTrend};
use crate::ports::{CoreError, TelemetryPort};

/// Reads ISS telemetry from the telemetry service.
///
/// The raw methods back the JSON proxy routes and are never cached, so
/// clients always see what the upstream has right now.
pub struct IssService {
    telemetry: Arc<dyn TelemetryPort>,
}

impl IssService {
    pub fn new(telemetry: Arc<dyn TelemetryPort>) -> Self {
        Self { telemetry }
    }

    /// Upstream `/last` body, unchanged.
    pub async fn last_raw(&self) -> Result<Value, CoreError> {
        Ok(self.telemetry.last().await?)
    }

    /// Upstream `/iss/trend` body, unchanged. The query string is forwarded.
    pub async fn trend_raw(&self, query: Option<&str>) -> Result<Value, CoreError> {
        let query = query.map(str::trim).filter(|q| !q.is_empty());
        Ok(self.telemetry.trend(query).await?)
    }

    /// Parsed last position, `None` if the upstream has no sample yet.
    pub async fn snapshot(&self) -> Result<Option<IssSnapshot>, CoreError> {
        let body = self.telemetry.last().await?;
        Ok(IssSnapshot::from_value(&body))
    }

    /// Parsed movement trend.
    pub async fn trend(&self) -> Result<Option<IssTrend>, CoreError> {
        let body = self.telemetry.trend(None).await?;
        Ok(IssTrend::from_value(&body))
    }

    /// Position and trend fetched concurrently. Failures are logged and leave
    /// the corresponding part empty.
    pub async fn overview(&self) -> IssOverview {
        let (snapshot, trend) = tokio::join!(self.snapshot(), self.trend());

        let snapshot = snapshot.unwrap_or_else(|e| {
            tracing::warn!(target: "orbitdash.iss", error = %e, "ISS position unavailable");
            None
        });
        let trend = trend.unwrap_or_else(|e| {
            tracing::warn!(target: "orbitdash.iss", error = %e, "ISS trend unavailable");
            None
        });

        IssOverview { snapshot, trend }
    }
}
