//! Composition utilities for building repositories with `SQLite` backends.

use std::sync::Arc;

use sqlx::SqlitePool;

use orbitdash_core::PageRepository;

use crate::repositories::SqlitePageRepository;

/// Factory for creating repository instances with `SQLite` backends.
///
/// Construction only; no domain logic.
pub struct DbFactory;

impl DbFactory {
    /// Page repository as the trait object the core expects.
    pub fn build_pages(pool: SqlitePool) -> Arc<dyn PageRepository> {
        Arc::new(SqlitePageRepository::new(pool))
    }
}
