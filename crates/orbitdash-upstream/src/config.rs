//! Public configuration for the upstream clients.

use std::time::Duration;

/// Where the ISS telemetry service listens inside the deployment.
pub const DEFAULT_ISS_BASE_URL: &str = "http://rust_iss:3000";

/// Public JWST image API.
pub const DEFAULT_JWST_BASE_URL: &str = "https://api.jwstapi.com";

/// Astronomy API v2.
pub const DEFAULT_ASTRO_BASE_URL: &str = "https://api.astronomyapi.com/api/v2";

/// Configuration shared by all upstream clients.
///
/// # Example
///
/// ```
/// use orbitdash_upstream::UpstreamConfig;
/// use std::time::Duration;
///
/// let config = UpstreamConfig::new()
///     .with_iss_base_url("http://localhost:3000")
///     .with_jwst_api_key("secret")
///     .with_timeout(Duration::from_secs(5));
/// assert_eq!(config.iss_base_url(), "http://localhost:3000");
/// ```
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    pub(crate) iss_base_url: String,
    pub(crate) jwst_base_url: String,
    pub(crate) jwst_api_key: Option<String>,
    pub(crate) astro_base_url: String,
    pub(crate) astro_app_id: Option<String>,
    pub(crate) astro_app_secret: Option<String>,
    pub(crate) user_agent: String,
    pub(crate) timeout: Duration,
    pub(crate) max_retries: u8,
    pub(crate) retry_base_delay: Duration,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            iss_base_url: DEFAULT_ISS_BASE_URL.to_string(),
            jwst_base_url: DEFAULT_JWST_BASE_URL.to_string(),
            jwst_api_key: None,
            astro_base_url: DEFAULT_ASTRO_BASE_URL.to_string(),
            astro_app_id: None,
            astro_app_secret: None,
            user_agent: concat!("orbitdash/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs(10),
            max_retries: 2,
            retry_base_delay: Duration::from_millis(300),
        }
    }
}

/// Treat blank strings from env vars or flags as "not set".
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl UpstreamConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Base URL of the ISS telemetry service.
    #[must_use]
    pub fn with_iss_base_url(mut self, url: impl Into<String>) -> Self {
        self.iss_base_url = url.into();
        self
    }

    /// Base URL of the JWST API.
    #[must_use]
    pub fn with_jwst_base_url(mut self, url: impl Into<String>) -> Self {
        self.jwst_base_url = url.into();
        self
    }

    /// API key sent as `X-API-KEY` to the JWST API.
    #[must_use]
    pub fn with_jwst_api_key(mut self, key: impl Into<String>) -> Self {
        self.jwst_api_key = non_blank(Some(key.into()));
        self
    }

    /// Set an optional JWST API key.
    #[must_use]
    pub fn with_optional_jwst_api_key(mut self, key: Option<String>) -> Self {
        self.jwst_api_key = non_blank(key);
        self
    }

    /// Base URL of the Astronomy API.
    #[must_use]
    pub fn with_astro_base_url(mut self, url: impl Into<String>) -> Self {
        self.astro_base_url = url.into();
        self
    }

    /// Application id and secret for the Astronomy API (HTTP basic auth).
    #[must_use]
    pub fn with_astro_credentials(
        mut self,
        app_id: Option<String>,
        app_secret: Option<String>,
    ) -> Self {
        self.astro_app_id = non_blank(app_id);
        self.astro_app_secret = non_blank(app_secret);
        self
    }

    /// Set the user agent string for HTTP requests.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the per-request timeout.
    ///
    /// Defaults to 10 seconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the maximum number of retry attempts for transient errors.
    ///
    /// Defaults to 2 retries.
    #[must_use]
    pub const fn with_max_retries(mut self, retries: u8) -> Self {
        self.max_retries = retries;
        self
    }

    /// Set the base delay for exponential backoff retries.
    ///
    /// Defaults to 300ms.
    #[must_use]
    pub const fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_base_delay = delay;
        self
    }

    pub fn iss_base_url(&self) -> &str {
        &self.iss_base_url
    }

    pub fn jwst_base_url(&self) -> &str {
        &self.jwst_base_url
    }

    pub fn astro_base_url(&self) -> &str {
        &self.astro_base_url
    }

    /// Whether a JWST API key is set.
    pub const fn has_jwst_key(&self) -> bool {
        self.jwst_api_key.is_some()
    }

    /// Whether both Astronomy API credentials are set.
    pub const fn has_astro_credentials(&self) -> bool {
        self.astro_app_id.is_some() && self.astro_app_secret.is_some()
    }
}
