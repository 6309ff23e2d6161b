//! OSDR dataset listing page.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::response::Html;
use serde::Deserialize;

use super::html;
use crate::state::AppState;
use crate::views;

#[derive(Debug, Default, Deserialize)]
pub struct OsdrParams {
    pub limit: Option<u32>,
}

/// `GET /osdr`. An unreachable upstream is reported inline, not as an error
/// status.
///
/// A malformed `limit` falls back to the default page size.
pub async fn page(
    State(state): State<AppState>,
    params: Result<Query<OsdrParams>, QueryRejection>,
) -> Html<String> {
    let limit = params.ok().and_then(|Query(p)| p.limit);

    match state.core.feeds().osdr_datasets(limit).await {
        Ok(datasets) => html(views::osdr_page(Ok(datasets.as_slice()))),
        Err(e) => {
            tracing::warn!(target: "orbitdash.osdr", error = %e, "OSDR listing unavailable");
            let message = format!("OSDR data is unavailable: {e}");
            html(views::osdr_page(Err(message.as_str())))
        }
    }
}
