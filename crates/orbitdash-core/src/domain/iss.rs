//! ISS telemetry as served by the upstream telemetry service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::utils::{haversine_km, pick_f64, pick_str, pick_time};

/// Last known ISS position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssSnapshot {
    pub latitude: f64,
    pub longitude: f64,
    pub altitude_km: Option<f64>,
    pub velocity_kmh: Option<f64>,
    pub visibility: Option<String>,
    pub fetched_at: Option<DateTime<Utc>>,
}

impl IssSnapshot {
    /// Parse the body of the upstream `/last` endpoint.
    ///
    /// The position lives under `payload`; the fetch time sits next to it.
    /// A bare payload object (no wrapper) is accepted too. Returns `None`
    /// when latitude or longitude is missing, e.g. before the first sample
    /// has been collected.
    pub fn from_value(value: &Value) -> Option<Self> {
        let payload = value.get("payload").unwrap_or(value);

        let latitude = pick_f64(payload, &["latitude", "lat"])?;
        let longitude = pick_f64(payload, &["longitude", "lon", "lng"])?;

        Some(Self {
            latitude,
            longitude,
            altitude_km: pick_f64(payload, &["altitude", "altitude_km"]),
            velocity_kmh: pick_f64(payload, &["velocity", "velocity_kmh"]),
            visibility: pick_str(payload, &["visibility"]),
            fetched_at: pick_time(value, &["fetched_at"])
                .or_else(|| pick_time(payload, &["timestamp"])),
        })
    }
}

/// Movement between the two most recent samples.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IssTrend {
    pub movement: bool,
    pub delta_km: f64,
    pub dt_sec: f64,
    pub velocity_kmh: Option<f64>,
    pub from_time: Option<DateTime<Utc>>,
    pub to_time: Option<DateTime<Utc>>,
    pub from_lat: Option<f64>,
    pub from_lon: Option<f64>,
    pub to_lat: Option<f64>,
    pub to_lon: Option<f64>,
}

impl IssTrend {
    /// Parse the body of the upstream `/iss/trend` endpoint.
    ///
    /// When `delta_km` is absent it is computed from the endpoints, and the
    /// velocity from that distance over `dt_sec`.
    pub fn from_value(value: &Value) -> Option<Self> {
        let mut trend: Self = serde_json::from_value(value.clone()).ok()?;

        if value.get("delta_km").is_none_or(Value::is_null) {
            if let Some(distance) = trend.endpoint_distance_km() {
                trend.delta_km = distance;
                if trend.velocity_kmh.is_none() && trend.dt_sec > 0.0 {
                    trend.velocity_kmh = Some(distance / trend.dt_sec * 3600.0);
                }
            }
        }
        Some(trend)
    }

    fn endpoint_distance_km(&self) -> Option<f64> {
        Some(haversine_km(
            self.from_lat?,
            self.from_lon?,
            self.to_lat?,
            self.to_lon?,
        ))
    }
}

/// What the dashboard shows about the ISS. Either part may be missing when
/// the upstream is down.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct IssOverview {
    pub snapshot: Option<IssSnapshot>,
    pub trend: Option<IssTrend>,
}
