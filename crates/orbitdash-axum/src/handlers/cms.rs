//! CMS pages and the HTML 404.

use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::http::Uri;
use axum::response::Html;

use super::html;
use crate::error::PageError;
use crate::state::AppState;
use crate::views;

/// `GET /page/{slug}`.
///
/// Any slug is accepted; one that cannot name a stored page (bad encoding,
/// invalid characters, too long) is a plain 404.
pub async fn page(
    State(state): State<AppState>,
    slug: Result<Path<String>, PathRejection>,
) -> Result<Html<String>, PageError> {
    let Ok(Path(slug)) = slug else {
        return Err(PageError::not_found("No such page."));
    };

    match state.core.pages().get(&slug).await? {
        Some(page) => Ok(html(views::cms_page(&page))),
        None => {
            tracing::debug!(target: "orbitdash.cms", slug = %slug, "page not found");
            Err(PageError::not_found("No such page."))
        }
    }
}

/// Fallback for unknown paths.
pub async fn not_found(uri: Uri) -> PageError {
    tracing::debug!(path = %uri.path(), "no route");
    PageError::not_found(format!("Nothing lives at {}.", uri.path()))
}
