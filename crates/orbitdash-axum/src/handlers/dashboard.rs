//! Landing redirect and the dashboard page.

use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{Html, IntoResponse};
use orbitdash_core::{AstroEventsQuery, JwstFeedQuery};

use super::html;
use crate::state::AppState;
use crate::views::{self, DashboardView};

/// `GET /`: `302 Found` to the dashboard.
pub async fn root() -> impl IntoResponse {
    (StatusCode::FOUND, [(header::LOCATION, "/dashboard")])
}

/// `GET /dashboard`.
///
/// Sections load concurrently and fail independently; the page itself always
/// renders.
pub async fn index(State(state): State<AppState>) -> Html<String> {
    let jwst_query = JwstFeedQuery::default();
    let astro_query = AstroEventsQuery::default();

    let (iss, jwst, astro) = tokio::join!(
        state.core.iss().overview(),
        state.core.feeds().jwst_feed(&jwst_query),
        state.core.feeds().astro_events(&astro_query),
    );

    let jwst = jwst.map_err(|e| {
        tracing::warn!(target: "orbitdash.dashboard", error = %e, "JWST section unavailable");
        e.to_string()
    });
    let astro = astro.map_err(|e| {
        tracing::warn!(target: "orbitdash.dashboard", error = %e, "astro section unavailable");
        e.to_string()
    });

    html(views::dashboard(&DashboardView { iss, jwst, astro }))
}
