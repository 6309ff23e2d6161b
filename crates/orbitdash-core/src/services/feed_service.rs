//! Cached, normalized upstream feeds: JWST images, astronomy events and
//! OSDR datasets.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};

use super::FeedCache;
use crate::domain::{
    AstroEvents, AstroEventsQuery, JwstFeed, JwstFeedQuery, OsdrDataset, clamp_osdr_limit,
};
use crate::ports::{AstroPort, CoreError, JwstPort, TelemetryPort};
use crate::settings::CacheSettings;

/// Normalizes upstream feeds and keeps them for a while.
pub struct FeedService {
    telemetry: Arc<dyn TelemetryPort>,
    jwst: Arc<dyn JwstPort>,
    astro: Arc<dyn AstroPort>,
    jwst_cache: FeedCache<JwstFeed>,
    astro_cache: FeedCache<AstroEvents>,
    osdr_cache: FeedCache<Vec<OsdrDataset>>,
}

impl FeedService {
    pub fn new(
        telemetry: Arc<dyn TelemetryPort>,
        jwst: Arc<dyn JwstPort>,
        astro: Arc<dyn AstroPort>,
        cache: &CacheSettings,
    ) -> Self {
        Self {
            telemetry,
            jwst,
            astro,
            jwst_cache: FeedCache::new(cache.jwst_ttl),
            astro_cache: FeedCache::new(cache.astro_ttl),
            osdr_cache: FeedCache::new(cache.osdr_ttl),
        }
    }

    /// One page of the JWST gallery.
    pub async fn jwst_feed(&self, query: &JwstFeedQuery) -> Result<JwstFeed, CoreError> {
        self.jwst_cache
            .get_or_try_fetch(&query.cache_key(), || async {
                let raw = self.jwst.fetch(query).await?;
                let feed = JwstFeed::from_raw_items(query, &raw);
                tracing::debug!(
                    target: "orbitdash.jwst",
                    source = query.source.name(),
                    raw = raw.len(),
                    kept = feed.count,
                    "normalized JWST feed"
                );
                Ok::<_, CoreError>(feed)
            })
            .await
    }

    /// Events for the window starting today (UTC).
    pub async fn astro_events(&self, query: &AstroEventsQuery) -> Result<AstroEvents, CoreError> {
        self.astro_events_on(query, Utc::now().date_naive()).await
    }

    /// Events for the window starting on `today`.
    pub async fn astro_events_on(
        &self,
        query: &AstroEventsQuery,
        today: NaiveDate,
    ) -> Result<AstroEvents, CoreError> {
        let (from, to) = query.window(today);
        self.astro_cache
            .get_or_try_fetch(&query.cache_key(today), || async {
                let body = self.astro.events(query, from, to).await?;
                Ok::<_, CoreError>(AstroEvents::from_value(from, to, &body))
            })
            .await
    }

    /// Most recent OSDR datasets. `limit` is clamped to the allowed range.
    pub async fn osdr_datasets(&self, limit: Option<u32>) -> Result<Vec<OsdrDataset>, CoreError> {
        let limit = clamp_osdr_limit(limit);
        self.osdr_cache
            .get_or_try_fetch(&limit.to_string(), || async {
                let body = self.telemetry.osdr_list(limit).await?;
                Ok::<_, CoreError>(OsdrDataset::list_from_value(&body))
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::UpstreamError;
    use async_trait::async_trait;
    use serde_json::{Value, json};
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct StubTelemetry {
        limits: Mutex<Vec<u32>>,
    }

    #[async_trait]
    impl TelemetryPort for StubTelemetry {
        async fn last(&self) -> Result<Value, UpstreamError> {
            Ok(json!({}))
        }
        async fn trend(&self, _query: Option<&str>) -> Result<Value, UpstreamError> {
            Ok(json!({}))
        }
        async fn osdr_list(&self, limit: u32) -> Result<Value, UpstreamError> {
            self.limits.lock().unwrap().push(limit);
            Ok(json!({"items": [{"id": 1, "dataset_id": "OSD-1"}]}))
        }
    }

    #[derive(Default)]
    struct StubJwst {
        calls: AtomicUsize,
        fail: bool,
    }

    #[async_trait]
    impl JwstPort for StubJwst {
        async fn fetch(&self, _query: &JwstFeedQuery) -> Result<Vec<Value>, UpstreamError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(UpstreamError::Status {
                    service: "jwst",
                    status: 500,
                });
            }
            Ok(vec![
                json!({"location": "https://cdn.example/a.jpg", "details": {"instruments": [{"instrument": "NIRCAM"}]}}),
                json!({"location": "https://cdn.example/b.fits"}),
            ])
        }
    }

    struct StubAstro {
        windows: Mutex<Vec<(NaiveDate, NaiveDate)>>,
    }

    #[async_trait]
    impl AstroPort for StubAstro {
        async fn events(
            &self,
            _query: &AstroEventsQuery,
            from: NaiveDate,
            to: NaiveDate,
        ) -> Result<Value, UpstreamError> {
            self.windows.lock().unwrap().push((from, to));
            Ok(json!({"data": {"table": {"rows": [
                {"entry": {"name": "Sun"}, "cells": [{"type": "annular_solar_eclipse"}]}
            ]}}}))
        }
    }

    fn service(jwst: Arc<StubJwst>, telemetry: Arc<StubTelemetry>) -> (FeedService, Arc<StubAstro>) {
        let astro = Arc::new(StubAstro {
            windows: Mutex::new(Vec::new()),
        });
        let svc = FeedService::new(telemetry, jwst, astro.clone(), &CacheSettings::default());
        (svc, astro)
    }

    #[tokio::test]
    async fn jwst_feed_is_normalized_and_cached() {
        let jwst = Arc::new(StubJwst::default());
        let (svc, _) = service(jwst.clone(), Arc::default());

        let query = JwstFeedQuery::default();
        let feed = svc.jwst_feed(&query).await.unwrap();
        assert_eq!(feed.count, 1);
        assert_eq!(feed.items[0].instruments, vec!["NIRCAM".to_string()]);

        svc.jwst_feed(&query).await.unwrap();
        assert_eq!(jwst.calls.load(Ordering::SeqCst), 1);

        let other_page = JwstFeedQuery {
            page: 2,
            ..JwstFeedQuery::default()
        };
        svc.jwst_feed(&other_page).await.unwrap();
        assert_eq!(jwst.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn jwst_failures_surface_and_are_retried() {
        let jwst = Arc::new(StubJwst {
            fail: true,
            ..StubJwst::default()
        });
        let (svc, _) = service(jwst.clone(), Arc::default());

        for _ in 0..2 {
            let err = svc.jwst_feed(&JwstFeedQuery::default()).await.unwrap_err();
            assert!(matches!(
                err,
                CoreError::Upstream(UpstreamError::Status { status: 500, .. })
            ));
        }
        assert_eq!(jwst.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn astro_events_use_the_query_window() {
        let (svc, astro) = service(Arc::default(), Arc::default());
        let today = NaiveDate::from_ymd_opt(2025, 1, 30).unwrap();
        let query = AstroEventsQuery {
            days: 3,
            ..AstroEventsQuery::default()
        };

        let events = svc.astro_events_on(&query, today).await.unwrap();
        assert_eq!(events.events.len(), 1);
        assert_eq!(events.to_date, NaiveDate::from_ymd_opt(2025, 2, 2).unwrap());
        assert_eq!(
            astro.windows.lock().unwrap().as_slice(),
            &[(today, NaiveDate::from_ymd_opt(2025, 2, 2).unwrap())]
        );
    }

    #[tokio::test]
    async fn osdr_limit_is_clamped_before_fetching() {
        let telemetry = Arc::new(StubTelemetry::default());
        let (svc, _) = service(Arc::default(), telemetry.clone());

        let rows = svc.osdr_datasets(Some(10_000)).await.unwrap();
        assert_eq!(rows.len(), 1);
        svc.osdr_datasets(None).await.unwrap();
        assert_eq!(
            telemetry.limits.lock().unwrap().as_slice(),
            &[crate::domain::OSDR_MAX_LIMIT, crate::domain::OSDR_DEFAULT_LIMIT]
        );
    }
}
