//! Fake upstreams and request helpers shared by the route tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode};
use chrono::NaiveDate;
use http_body_util::BodyExt;
use orbitdash_axum::{AxumContext, CorsConfig, create_router};
use orbitdash_core::{
    AstroEventsQuery, AstroPort, CacheSettings, DashboardCore, JwstFeedQuery, JwstPort, Ports,
    TelemetryPort, UpstreamError,
};
use orbitdash_db::{DbFactory, seed_default_pages, setup_test_database};
use serde_json::{Value, json};
use tower::ServiceExt;

fn unavailable(service: &'static str) -> UpstreamError {
    UpstreamError::Unavailable {
        service,
        message: "connection refused".to_string(),
    }
}

/// Telemetry service answering with fixed bodies. `None` fails the call.
#[derive(Default)]
pub struct FakeTelemetry {
    pub last: Option<Value>,
    pub trend: Option<Value>,
    pub osdr: Option<Value>,
    pub trend_queries: Mutex<Vec<Option<String>>>,
}

#[async_trait]
impl TelemetryPort for FakeTelemetry {
    async fn last(&self) -> Result<Value, UpstreamError> {
        self.last.clone().ok_or_else(|| unavailable("telemetry"))
    }

    async fn trend(&self, query: Option<&str>) -> Result<Value, UpstreamError> {
        self.trend_queries
            .lock()
            .unwrap()
            .push(query.map(ToString::to_string));
        self.trend.clone().ok_or_else(|| unavailable("telemetry"))
    }

    async fn osdr_list(&self, _limit: u32) -> Result<Value, UpstreamError> {
        self.osdr.clone().ok_or_else(|| unavailable("telemetry"))
    }
}

/// JWST API stand-in. `None` behaves like a missing API key.
#[derive(Default)]
pub struct FakeJwst {
    pub items: Option<Vec<Value>>,
}

#[async_trait]
impl JwstPort for FakeJwst {
    async fn fetch(&self, _query: &JwstFeedQuery) -> Result<Vec<Value>, UpstreamError> {
        self.items.clone().ok_or_else(|| UpstreamError::NotConfigured {
            service: "jwst",
            message: "JWST_API_KEY is not set".to_string(),
        })
    }
}

#[derive(Default)]
pub struct FakeAstro {
    pub response: Option<Value>,
}

#[async_trait]
impl AstroPort for FakeAstro {
    async fn events(
        &self,
        _query: &AstroEventsQuery,
        _from: NaiveDate,
        _to: NaiveDate,
    ) -> Result<Value, UpstreamError> {
        self.response.clone().ok_or_else(|| unavailable("astro"))
    }
}

pub fn healthy_telemetry() -> FakeTelemetry {
    FakeTelemetry {
        last: Some(json!({
            "id": 42,
            "fetched_at": "2026-03-01T12:00:00Z",
            "payload": {
                "latitude": 51.5,
                "longitude": -0.12,
                "altitude": 420.1,
                "velocity": 27580.0,
                "visibility": "daylight"
            }
        })),
        trend: Some(json!({
            "movement": true,
            "delta_km": 1234.5,
            "dt_sec": 180.0,
            "velocity_kmh": 27600.0
        })),
        osdr: Some(json!({
            "items": [
                {"id": 1, "dataset_id": "OSD-101", "title": "Rodent Research 1", "status": "public"},
                {"id": 2, "raw": {"OSD-202": {"REST_URL": "https://osdr.example/OSD-202"}}}
            ]
        })),
        trend_queries: Mutex::new(Vec::new()),
    }
}

pub fn healthy_jwst() -> FakeJwst {
    FakeJwst {
        items: Some(vec![
            json!({
                "id": "jw02734-o001",
                "location": "https://stsci.example/jw02734_nircam.jpg",
                "program": "2734",
                "details": {"suffix": "_i2d", "instruments": [{"instrument": "NIRCam"}]}
            }),
            json!({"id": "no-image", "location": "https://stsci.example/data.fits"}),
        ]),
    }
}

pub fn healthy_astro() -> FakeAstro {
    FakeAstro {
        response: Some(json!({
            "data": {
                "table": {
                    "rows": [{
                        "entry": {"id": "sun", "name": "Sun"},
                        "cells": [{
                            "type": "total_solar_eclipse",
                            "eventHighlights": {"peak": {"date": "2026-08-12T17:46:00Z"}},
                            "rise": "2026-08-12T05:10:00Z",
                            "set": "2026-08-12T19:30:00Z",
                            "extraInfo": {"obscuration": 1.0}
                        }]
                    }]
                }
            }
        })),
    }
}

/// Router over the given fakes and a seeded in-memory database.
pub async fn app_with(
    telemetry: Arc<FakeTelemetry>,
    jwst: FakeJwst,
    astro: FakeAstro,
) -> Router {
    let pool = setup_test_database().await.unwrap();
    seed_default_pages(&pool).await.unwrap();

    let ports = Ports::new(
        telemetry,
        Arc::new(jwst),
        Arc::new(astro),
        DbFactory::build_pages(pool),
    );
    let core = DashboardCore::new(ports, &CacheSettings::disabled());
    create_router(AxumContext::new(Arc::new(core)), &CorsConfig::AllowAll)
}

/// Every upstream answering.
pub async fn healthy_app() -> Router {
    app_with(
        Arc::new(healthy_telemetry()),
        healthy_jwst(),
        healthy_astro(),
    )
    .await
}

/// Every upstream failing.
pub async fn broken_app() -> Router {
    app_with(
        Arc::new(FakeTelemetry::default()),
        FakeJwst::default(),
        FakeAstro::default(),
    )
    .await
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body).unwrap()
    }

    pub fn content_type(&self) -> &str {
        self.headers
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
    }
}

pub async fn get(app: &Router, uri: &str) -> TestResponse {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    TestResponse {
        status,
        headers,
        body: String::from_utf8_lossy(&bytes).into_owned(),
    }
}
