//! Astronomical events (eclipses and the like) from the Astronomy API.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::utils::{pick_f64, pick_str};

/// Bodies the events endpoint understands.
pub const ASTRO_BODIES: &[&str] = &[
    "sun", "moon", "mercury", "venus", "mars", "jupiter", "saturn", "uranus", "neptune", "pluto",
];

pub const ASTRO_DEFAULT_LAT: f64 = 55.7558;
pub const ASTRO_DEFAULT_LON: f64 = 37.6176;
pub const ASTRO_DEFAULT_DAYS: u32 = 7;
pub const ASTRO_MAX_DAYS: u32 = 30;

/// Validated events request.
#[derive(Debug, Clone, PartialEq)]
pub struct AstroEventsQuery {
    pub lat: f64,
    pub lon: f64,
    pub elevation: f64,
    pub days: u32,
    pub body: String,
}

impl Default for AstroEventsQuery {
    fn default() -> Self {
        Self {
            lat: ASTRO_DEFAULT_LAT,
            lon: ASTRO_DEFAULT_LON,
            elevation: 0.0,
            days: ASTRO_DEFAULT_DAYS,
            body: "sun".to_string(),
        }
    }
}

impl AstroEventsQuery {
    /// Build a query from request parameters, applying defaults.
    ///
    /// # Errors
    ///
    /// Returns an error message when a coordinate is out of range or the
    /// body is not one of [`ASTRO_BODIES`].
    pub fn from_params(
        lat: Option<f64>,
        lon: Option<f64>,
        elevation: Option<f64>,
        days: Option<u32>,
        body: Option<&str>,
    ) -> Result<Self, String> {
        let defaults = Self::default();
        let lat = lat.unwrap_or(defaults.lat);
        let lon = lon.unwrap_or(defaults.lon);

        if !(-90.0..=90.0).contains(&lat) {
            return Err(format!("latitude {lat} is outside -90..=90"));
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(format!("longitude {lon} is outside -180..=180"));
        }

        let body = match body.map(|b| b.trim().to_ascii_lowercase()) {
            None => defaults.body,
            Some(b) if b.is_empty() => defaults.body,
            Some(b) if ASTRO_BODIES.contains(&b.as_str()) => b,
            Some(b) => return Err(format!("unknown body '{b}'")),
        };

        Ok(Self {
            lat,
            lon,
            elevation: elevation.filter(|e| e.is_finite()).unwrap_or(0.0),
            days: days.unwrap_or(ASTRO_DEFAULT_DAYS).clamp(1, ASTRO_MAX_DAYS),
            body,
        })
    }

    /// Date window `[today, today + days]` covered by this query.
    pub fn window(&self, today: NaiveDate) -> (NaiveDate, NaiveDate) {
        let to = today
            .checked_add_days(Days::new(u64::from(self.days)))
            .unwrap_or(today);
        (today, to)
    }

    /// Key used for caching this query's result on a given day.
    pub fn cache_key(&self, today: NaiveDate) -> String {
        format!(
            "{}:{:.4}:{:.4}:{:.0}:{}:{}",
            self.body, self.lat, self.lon, self.elevation, self.days, today
        )
    }
}

/// One event for one body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AstroEvent {
    pub body: String,
    pub kind: String,
    pub peak: Option<String>,
    pub rise: Option<String>,
    pub set: Option<String>,
    pub obscuration: Option<f64>,
}

/// Events found in a date window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AstroEvents {
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
    pub events: Vec<AstroEvent>,
}

impl AstroEvents {
    /// Normalize an Astronomy API `bodies/events` response.
    ///
    /// Rows are read from `data.table.rows` (or `data.rows`); each row names
    /// its body under `entry` (or `body`) and lists events under `cells` (or
    /// `events`). Events are ordered by peak time, then kind.
    pub fn from_value(from_date: NaiveDate, to_date: NaiveDate, value: &Value) -> Self {
        let data = value.get("data").unwrap_or(value);
        let rows = data
            .get("table")
            .and_then(|t| t.get("rows"))
            .or_else(|| data.get("rows"))
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default();

        let mut events: Vec<AstroEvent> = rows.iter().flat_map(events_in_row).collect();
        events.sort_by(|a, b| a.peak.cmp(&b.peak).then_with(|| a.kind.cmp(&b.kind)));

        Self {
            from_date,
            to_date,
            events,
        }
    }
}

fn events_in_row(row: &Value) -> Vec<AstroEvent> {
    let entry = row.get("entry").or_else(|| row.get("body")).unwrap_or(&Value::Null);
    let body = pick_str(entry, &["name", "id"]).unwrap_or_else(|| "unknown".to_string());

    row.get("cells")
        .or_else(|| row.get("events"))
        .and_then(Value::as_array)
        .map(|cells| {
            cells
                .iter()
                .map(|cell| {
                    let highlights = cell.get("eventHighlights").unwrap_or(&Value::Null);
                    let peak = highlights
                        .get("peak")
                        .and_then(|p| pick_str(p, &["date"]))
                        .or_else(|| pick_str(cell, &["date", "peak"]));
                    let obscuration = cell
                        .get("extraInfo")
                        .and_then(|info| pick_f64(info, &["obscuration"]));

                    AstroEvent {
                        body: body.clone(),
                        kind: pick_str(cell, &["type", "kind"])
                            .unwrap_or_else(|| "event".to_string()),
                        peak,
                        rise: pick_str(cell, &["rise"]),
                        set: pick_str(cell, &["set"]),
                        obscuration,
                    }
                })
                .collect()
        })
        .unwrap_or_default()
}
