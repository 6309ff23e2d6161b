//! HTTP backend abstraction for the upstream clients.
//!
//! The production backend uses reqwest and retries transient failures with
//! exponential backoff. Tests swap in [`testing::FakeBackend`].

use crate::config::UpstreamConfig;
use crate::error::{UpstreamHttpError, UpstreamResult};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

// ============================================================================
// Authentication
// ============================================================================

/// How a request authenticates against its upstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Auth {
    None,
    /// A single header, e.g. `X-API-KEY`.
    Header { name: &'static str, value: String },
    /// HTTP basic auth.
    Basic { user: String, password: String },
}

// ============================================================================
// HTTP Backend Trait
// ============================================================================

/// Trait for HTTP backends that can fetch JSON from URLs.
///
/// Implementation detail; callers go through the core port traits.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// Fetch JSON from a URL and deserialize it.
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url, auth: &Auth)
    -> UpstreamResult<T>;
}

/// Append path segments to `base`, keeping any path it already has.
///
/// Segments are percent-encoded, so user-supplied values cannot escape the
/// endpoint.
pub fn endpoint(base: &Url, segments: &[&str]) -> UpstreamResult<Url> {
    let mut url = base.clone();
    {
        let mut path = url.path_segments_mut().map_err(|()| {
            UpstreamHttpError::NotConfigured(format!("{base} cannot be used as a base URL"))
        })?;
        path.pop_if_empty().extend(segments);
    }
    Ok(url)
}

// ============================================================================
// Reqwest Backend
// ============================================================================

/// Production HTTP backend using reqwest with retry logic.
///
/// Server errors (5xx) and network errors are retried; client errors fail on
/// the first attempt.
pub struct ReqwestBackend {
    client: reqwest::Client,
    max_retries: u8,
    retry_base_delay: Duration,
}

impl ReqwestBackend {
    /// Create a new reqwest backend with the given configuration.
    pub fn new(config: &UpstreamConfig) -> UpstreamResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            client,
            max_retries: config.max_retries,
            retry_base_delay: config.retry_base_delay,
        })
    }

    fn build_request(&self, url: &Url, auth: &Auth) -> reqwest::RequestBuilder {
        let request = self
            .client
            .get(url.as_str())
            .header(reqwest::header::ACCEPT, "application/json");
        match auth {
            Auth::None => request,
            Auth::Header { name, value } => request.header(*name, value),
            Auth::Basic { user, password } => request.basic_auth(user, Some(password)),
        }
    }

    /// Fetch a URL with automatic retry for transient errors.
    async fn fetch_with_retry(&self, url: &Url, auth: &Auth) -> UpstreamResult<reqwest::Response> {
        let mut last_error: Option<UpstreamHttpError> = None;

        for attempt in 0..=self.max_retries {
            if attempt > 0 {
                let delay = self.retry_base_delay * 2u32.pow(u32::from(attempt) - 1);
                tokio::time::sleep(delay).await;
            }

            tracing::debug!(url = %redact(url), attempt, "upstream request");

            match self.build_request(url, auth).send().await {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        return Ok(response);
                    }

                    let error = UpstreamHttpError::Status {
                        status: status.as_u16(),
                        url: redact(url),
                    };

                    if status.is_server_error() && attempt < self.max_retries {
                        tracing::warn!(status = status.as_u16(), attempt, "upstream error, retrying");
                        last_error = Some(error);
                        continue;
                    }

                    return Err(error);
                }
                Err(e) => {
                    if attempt < self.max_retries {
                        tracing::warn!(error = %e, attempt, "upstream unreachable, retrying");
                        last_error = Some(e.into());
                        continue;
                    }
                    return Err(e.into());
                }
            }
        }

        Err(last_error.unwrap_or_else(|| {
            UpstreamHttpError::NotConfigured("no request attempts were made".to_string())
        }))
    }
}

/// URL without its query string, for logs and error messages.
fn redact(url: &Url) -> String {
    let mut url = url.clone();
    url.set_query(None);
    url.to_string()
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn get_json<T: DeserializeOwned + Send>(
        &self,
        url: &Url,
        auth: &Auth,
    ) -> UpstreamResult<T> {
        let response = self.fetch_with_retry(url, auth).await?;
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================

#[cfg(test)]
pub mod testing {
    use super::*;
    use std::sync::Mutex;

    /// A fake HTTP backend that returns canned responses.
    ///
    /// Patterns are matched against the full URL in insertion order. Every
    /// request is recorded together with the auth it carried.
    #[derive(Default)]
    pub struct FakeBackend {
        responses: Vec<(String, Result<serde_json::Value, u16>)>,
        requests: Mutex<Vec<(String, Auth)>>,
    }

    impl FakeBackend {
        pub fn new() -> Self {
            Self::default()
        }

        /// Answer URLs containing `url_contains` with `json`.
        pub fn with_response(mut self, url_contains: &str, json: serde_json::Value) -> Self {
            self.responses.push((url_contains.to_string(), Ok(json)));
            self
        }

        /// Answer URLs containing `url_contains` with an error status.
        pub fn with_status(mut self, url_contains: &str, status: u16) -> Self {
            self.responses.push((url_contains.to_string(), Err(status)));
            self
        }

        /// URLs and auth of all requests seen so far.
        pub fn requests(&self) -> Vec<(String, Auth)> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl HttpBackend for FakeBackend {
        async fn get_json<T: DeserializeOwned + Send>(
            &self,
            url: &Url,
            auth: &Auth,
        ) -> UpstreamResult<T> {
            self.requests
                .lock()
                .unwrap()
                .push((url.to_string(), auth.clone()));

            let canned = self
                .responses
                .iter()
                .find(|(pattern, _)| url.as_str().contains(pattern.as_str()))
                .map_or(Err(404), |(_, response)| response.clone());

            match canned {
                Ok(json) => serde_json::from_value(json).map_err(Into::into),
                Err(status) => Err(UpstreamHttpError::Status {
                    status,
                    url: url.to_string(),
                }),
            }
        }
    }
}
