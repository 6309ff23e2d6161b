//! Client for the ISS telemetry service.

use async_trait::async_trait;
use orbitdash_core::{TelemetryPort, UpstreamError};
use serde_json::Value;
use url::Url;

use crate::config::UpstreamConfig;
use crate::error::UpstreamResult;
use crate::http::{Auth, HttpBackend, ReqwestBackend, endpoint};

const SERVICE: &str = "telemetry";

/// Client for the telemetry service that samples the ISS and mirrors OSDR.
///
/// Bodies are returned as received so the proxy routes can pass them on.
pub struct IssClient<B: HttpBackend> {
    backend: B,
    base_url: Url,
}

impl IssClient<ReqwestBackend> {
    /// Create a client from `config`. Fails if the base URL does not parse.
    pub fn new(config: &UpstreamConfig) -> UpstreamResult<Self> {
        Ok(Self {
            backend: ReqwestBackend::new(config)?,
            base_url: Url::parse(&config.iss_base_url)?,
        })
    }
}

impl<B: HttpBackend> IssClient<B> {
    #[cfg(test)]
    pub(crate) const fn with_backend(base_url: Url, backend: B) -> Self {
        Self { backend, base_url }
    }

    async fn fetch(&self, url: UpstreamResult<Url>) -> Result<Value, UpstreamError> {
        let url = url.map_err(|e| e.into_port(SERVICE))?;
        self.backend
            .get_json(&url, &Auth::None)
            .await
            .map_err(|e| e.into_port(SERVICE))
    }
}

#[async_trait]
impl<B: HttpBackend> TelemetryPort for IssClient<B> {
    async fn last(&self) -> Result<Value, UpstreamError> {
        self.fetch(endpoint(&self.base_url, &["last"])).await
    }

    async fn trend(&self, query: Option<&str>) -> Result<Value, UpstreamError> {
        let url = endpoint(&self.base_url, &["iss", "trend"]).map(|mut url| {
            url.set_query(query.filter(|q| !q.is_empty()));
            url
        });
        self.fetch(url).await
    }

    async fn osdr_list(&self, limit: u32) -> Result<Value, UpstreamError> {
        let url = endpoint(&self.base_url, &["osdr", "list"]).map(|mut url| {
            url.query_pairs_mut()
                .append_pair("limit", &limit.to_string());
            url
        });
        self.fetch(url).await
    }
}
