//! Astronomy events API port.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde_json::Value;

use super::UpstreamError;
use crate::domain::AstroEventsQuery;

/// Source of astronomical events.
#[async_trait]
pub trait AstroPort: Send + Sync {
    /// Fetch the raw events response for `query` between two dates.
    async fn events(
        &self,
        query: &AstroEventsQuery,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Value, UpstreamError>;
}
