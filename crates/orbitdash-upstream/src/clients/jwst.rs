//! Client for the JWST image API.

use async_trait::async_trait;
use orbitdash_core::{JwstFeedQuery, JwstPort, JwstSource, UpstreamError};
use serde_json::Value;
use url::Url;

use crate::config::UpstreamConfig;
use crate::error::{UpstreamHttpError, UpstreamResult};
use crate::http::{Auth, HttpBackend, ReqwestBackend, endpoint};

const SERVICE: &str = "jwst";
const API_KEY_HEADER: &str = "X-API-KEY";

/// Client for the JWST product listings.
pub struct JwstClient<B: HttpBackend> {
    backend: B,
    base_url: Url,
    api_key: Option<String>,
}

impl JwstClient<ReqwestBackend> {
    /// Create a client from `config`.
    ///
    /// A missing API key is not an error here; every fetch reports
    /// `NotConfigured` instead so the dashboard can render without JWST.
    pub fn new(config: &UpstreamConfig) -> UpstreamResult<Self> {
        Ok(Self {
            backend: ReqwestBackend::new(config)?,
            base_url: Url::parse(&config.jwst_base_url)?,
            api_key: config.jwst_api_key.clone(),
        })
    }
}

impl<B: HttpBackend> JwstClient<B> {
    #[cfg(test)]
    pub(crate) const fn with_backend(base_url: Url, api_key: Option<String>, backend: B) -> Self {
        Self {
            backend,
            base_url,
            api_key,
        }
    }

    fn listing_url(&self, query: &JwstFeedQuery) -> UpstreamResult<Url> {
        let segments: [&str; 3] = match &query.source {
            JwstSource::Jpg => ["all", "type", "jpg"],
            JwstSource::Suffix(suffix) => ["all", "suffix", suffix.as_str()],
            JwstSource::Program(program) => ["program", "id", program.as_str()],
        };
        let mut url = endpoint(&self.base_url, &segments)?;
        url.query_pairs_mut()
            .append_pair("page", &query.page.to_string())
            .append_pair("perPage", &query.per_page.to_string());
        Ok(url)
    }
}

/// Items live under `body`; some deployments return a bare array.
fn items_from_response(value: Value) -> Option<Vec<Value>> {
    match value {
        Value::Array(items) => Some(items),
        Value::Object(mut map) => match map.remove("body") {
            Some(Value::Array(items)) => Some(items),
            _ => None,
        },
        _ => None,
    }
}

#[async_trait]
impl<B: HttpBackend> JwstPort for JwstClient<B> {
    async fn fetch(&self, query: &JwstFeedQuery) -> Result<Vec<Value>, UpstreamError> {
        let Some(key) = &self.api_key else {
            return Err(UpstreamError::NotConfigured {
                service: SERVICE,
                message: "JWST_API_KEY is not set".to_string(),
            });
        };

        let url = self.listing_url(query).map_err(|e| e.into_port(SERVICE))?;
        let auth = Auth::Header {
            name: API_KEY_HEADER,
            value: key.clone(),
        };
        let value: Value = self
            .backend
            .get_json(&url, &auth)
            .await
            .map_err(|e| e.into_port(SERVICE))?;

        items_from_response(value).ok_or_else(|| {
            UpstreamHttpError::JsonParse(<serde_json::Error as serde::de::Error>::custom(
                "expected an array of products under `body`",
            ))
            .into_port(SERVICE)
        })
    }
}
