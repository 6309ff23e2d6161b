//! ISS telemetry: proxy endpoints and the ISS page.

use axum::Json;
use axum::extract::{RawQuery, State};
use axum::response::Html;
use serde_json::Value;

use super::html;
use crate::error::HttpError;
use crate::state::AppState;
use crate::views;

/// `GET /api/iss/last`: the telemetry service's last sample, unchanged.
pub async fn last(State(state): State<AppState>) -> Result<Json<Value>, HttpError> {
    Ok(Json(state.core.iss().last_raw().await?))
}

/// `GET /api/iss/trend`: the movement trend, unchanged. The request's query
/// string is forwarded as-is.
pub async fn trend(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<Json<Value>, HttpError> {
    Ok(Json(state.core.iss().trend_raw(query.as_deref()).await?))
}

/// `GET /iss`.
pub async fn page(State(state): State<AppState>) -> Html<String> {
    html(views::iss_page(&state.core.iss().overview().await))
}
