//! Astronomical events feed.

use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use orbitdash_core::{AstroEvents, AstroEventsQuery};
use serde::Deserialize;

use crate::error::HttpError;
use crate::state::AppState;

/// Query parameters for `GET /api/astro/events`.
#[derive(Debug, Default, Deserialize)]
pub struct AstroEventsParams {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub elevation: Option<f64>,
    pub days: Option<u32>,
    pub body: Option<String>,
}

/// `GET /api/astro/events`.
pub async fn events(
    State(state): State<AppState>,
    params: Result<Query<AstroEventsParams>, QueryRejection>,
) -> Result<Json<AstroEvents>, HttpError> {
    let Query(params) = params.map_err(|e| HttpError::BadRequest(e.body_text()))?;
    let query = AstroEventsQuery::from_params(
        params.lat,
        params.lon,
        params.elevation,
        params.days,
        params.body.as_deref(),
    )
    .map_err(HttpError::BadRequest)?;

    Ok(Json(state.core.feeds().astro_events(&query).await?))
}
