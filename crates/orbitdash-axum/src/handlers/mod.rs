//! HTTP request handlers for the Axum web server.
//!
//! Handlers are thin: they parse the request, call into `DashboardCore` and
//! pick a representation (JSON for `/api`, HTML elsewhere).

pub mod astro;
pub mod cms;
pub mod dashboard;
pub mod iss;
pub mod jwst;
pub mod osdr;

use axum::response::Html;
use maud::Markup;

/// Render markup as an HTML response body.
pub(crate) fn html(markup: Markup) -> Html<String> {
    Html(markup.into_string())
}
