//! JWST gallery feed.

use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use orbitdash_core::{JwstFeed, JwstFeedQuery};
use serde::Deserialize;

use crate::error::HttpError;
use crate::state::AppState;

/// Query parameters for `GET /api/jwst/feed`.
#[derive(Debug, Default, Deserialize)]
pub struct JwstFeedParams {
    pub source: Option<String>,
    pub suffix: Option<String>,
    pub program: Option<String>,
    pub instrument: Option<String>,
    pub page: Option<u32>,
    #[serde(rename = "perPage", alias = "per_page")]
    pub per_page: Option<u32>,
}

/// `GET /api/jwst/feed`.
pub async fn feed(
    State(state): State<AppState>,
    params: Result<Query<JwstFeedParams>, QueryRejection>,
) -> Result<Json<JwstFeed>, HttpError> {
    let Query(params) = params.map_err(|e| HttpError::BadRequest(e.body_text()))?;
    let query = JwstFeedQuery::from_params(
        params.source.as_deref(),
        params.suffix.as_deref(),
        params.program.as_deref(),
        params.instrument.as_deref(),
        params.page,
        params.per_page,
    )
    .map_err(HttpError::BadRequest)?;

    Ok(Json(state.core.feeds().jwst_feed(&query).await?))
}
