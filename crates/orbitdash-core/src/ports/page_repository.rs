//! CMS page repository trait definition.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::{NewPage, Page};

/// Repository for slug-addressed CMS pages.
///
/// # Design Rules
///
/// - No `sqlx` types in signatures
/// - `get_by_slug` returns `Ok(None)` for a missing page; `NotFound` is
///   reserved for operations that require the page to exist
#[async_trait]
pub trait PageRepository: Send + Sync {
    /// Look up a page by slug.
    async fn get_by_slug(&self, slug: &str) -> Result<Option<Page>, RepositoryError>;

    /// All pages ordered by slug.
    async fn list(&self) -> Result<Vec<Page>, RepositoryError>;

    /// Insert a page or replace the one with the same slug.
    async fn upsert(&self, page: &NewPage) -> Result<Page, RepositoryError>;

    /// Delete a page.
    async fn delete(&self, slug: &str) -> Result<(), RepositoryError>;
}
