//! Client for the Astronomy API events endpoint.

use async_trait::async_trait;
use chrono::NaiveDate;
use orbitdash_core::{AstroEventsQuery, AstroPort, UpstreamError};
use serde_json::Value;
use url::Url;

use crate::config::UpstreamConfig;
use crate::error::UpstreamResult;
use crate::http::{Auth, HttpBackend, ReqwestBackend, endpoint};

const SERVICE: &str = "astro";

/// Client for `bodies/events/{body}`.
pub struct AstroClient<B: HttpBackend> {
    backend: B,
    base_url: Url,
    credentials: Option<(String, String)>,
}

impl AstroClient<ReqwestBackend> {
    /// Create a client from `config`. Missing credentials surface per request.
    pub fn new(config: &UpstreamConfig) -> UpstreamResult<Self> {
        let credentials = config
            .astro_app_id
            .clone()
            .zip(config.astro_app_secret.clone());
        Ok(Self {
            backend: ReqwestBackend::new(config)?,
            base_url: Url::parse(&config.astro_base_url)?,
            credentials,
        })
    }
}

impl<B: HttpBackend> AstroClient<B> {
    #[cfg(test)]
    pub(crate) const fn with_backend(
        base_url: Url,
        credentials: Option<(String, String)>,
        backend: B,
    ) -> Self {
        Self {
            backend,
            base_url,
            credentials,
        }
    }

    fn events_url(
        &self,
        query: &AstroEventsQuery,
        from: NaiveDate,
        to: NaiveDate,
    ) -> UpstreamResult<Url> {
        let mut url = endpoint(&self.base_url, &["bodies", "events", query.body.as_str()])?;
        url.query_pairs_mut()
            .append_pair("latitude", &query.lat.to_string())
            .append_pair("longitude", &query.lon.to_string())
            .append_pair("elevation", &query.elevation.to_string())
            .append_pair("from_date", &from.format("%Y-%m-%d").to_string())
            .append_pair("to_date", &to.format("%Y-%m-%d").to_string())
            .append_pair("time", "00:00:00");
        Ok(url)
    }
}

#[async_trait]
impl<B: HttpBackend> AstroPort for AstroClient<B> {
    async fn events(
        &self,
        query: &AstroEventsQuery,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Value, UpstreamError> {
        let Some((user, password)) = &self.credentials else {
            return Err(UpstreamError::NotConfigured {
                service: SERVICE,
                message: "ASTRO_APP_ID and ASTRO_APP_SECRET must both be set".to_string(),
            });
        };

        let url = self
            .events_url(query, from, to)
            .map_err(|e| e.into_port(SERVICE))?;
        let auth = Auth::Basic {
            user: user.clone(),
            password: password.clone(),
        };
        self.backend
            .get_json(&url, &auth)
            .await
            .map_err(|e| e.into_port(SERVICE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::testing::FakeBackend;
    use serde_json::json;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn client(backend: FakeBackend) -> AstroClient<FakeBackend> {
        AstroClient::with_backend(
            Url::parse("https://api.astronomyapi.com/api/v2").unwrap(),
            Some(("id".to_string(), "secret".to_string())),
            backend,
        )
    }

    #[tokio::test]
    async fn builds_events_url_with_window() {
        let client = client(FakeBackend::new().with_response("/bodies/events/moon", json!({"data": {}})));
        let query = AstroEventsQuery {
            lat: 10.5,
            lon: -3.0,
            elevation: 0.0,
            days: 3,
            body: "moon".to_string(),
        };
        client
            .events(&query, date("2026-01-01"), date("2026-01-04"))
            .await
            .unwrap();

        let (url, auth) = client.backend.requests().remove(0);
        assert_eq!(
            url,
            "https://api.astronomyapi.com/api/v2/bodies/events/moon?latitude=10.5&longitude=-3&elevation=0&from_date=2026-01-01&to_date=2026-01-04&time=00%3A00%3A00"
        );
        assert_eq!(
            auth,
            Auth::Basic {
                user: "id".to_string(),
                password: "secret".to_string()
            }
        );
    }

    #[tokio::test]
    async fn missing_credentials_are_not_configured() {
        let client = AstroClient::with_backend(
            Url::parse("https://api.astronomyapi.com/api/v2").unwrap(),
            None,
            FakeBackend::new(),
        );
        let err = client
            .events(&AstroEventsQuery::default(), date("2026-01-01"), date("2026-01-08"))
            .await
            .unwrap_err();
        assert!(matches!(err, UpstreamError::NotConfigured { service: "astro", .. }));
    }
}
