//! JWST image API port.

use async_trait::async_trait;
use serde_json::Value;

use super::UpstreamError;
use crate::domain::JwstFeedQuery;

/// Source of raw JWST product listings.
#[async_trait]
pub trait JwstPort: Send + Sync {
    /// Fetch the raw items for one page of `query`.
    async fn fetch(&self, query: &JwstFeedQuery) -> Result<Vec<Value>, UpstreamError>;
}
