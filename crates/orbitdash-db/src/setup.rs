//! Database setup and initialization.
//!
//! Entry points call `setup_database()` with the resolved database path.

use anyhow::Result;
use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use std::path::Path;

use orbitdash_core::{NewPage, PageRepository};

use crate::repositories::SqlitePageRepository;

/// Sets up the `SQLite` database connection and ensures the schema exists.
///
/// Creates the parent directory and the database file when missing. Safe to
/// call on an existing database.
///
/// # Example
///
/// ```rust,no_run
/// use orbitdash_db::setup_database;
/// use std::path::Path;
///
/// # async fn example() -> anyhow::Result<()> {
/// let pool = setup_database(Path::new("/var/lib/orbitdash/orbitdash.db")).await?;
/// # Ok(())
/// # }
/// ```
pub async fn setup_database(db_path: &Path) -> Result<SqlitePool> {
    // Ensure parent directory exists
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let pool = SqlitePool::connect_with(
        SqliteConnectOptions::new()
            .filename(db_path)
            .create_if_missing(true),
    )
    .await?;

    create_schema(&pool).await?;

    tracing::debug!(target: "orbitdash.db", path = %db_path.display(), "database ready");
    Ok(pool)
}

/// Sets up an in-memory `SQLite` database for testing.
///
/// The pool is limited to one connection: every new in-memory connection
/// would otherwise see its own empty database.
#[cfg(any(test, feature = "test-utils"))]
pub async fn setup_test_database() -> Result<SqlitePool> {
    let pool = sqlx::sqlite::SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await?;
    create_schema(&pool).await?;
    Ok(pool)
}

/// Creates the complete database schema. Idempotent.
async fn create_schema(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS cms_pages (
            slug TEXT PRIMARY KEY NOT NULL,
            title TEXT NOT NULL,
            body TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

/// Insert the starter pages when the page table is empty.
///
/// Returns the number of pages inserted (zero when any page already exists).
pub async fn seed_default_pages(pool: &SqlitePool) -> Result<usize> {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM cms_pages")
        .fetch_one(pool)
        .await?;
    if count > 0 {
        return Ok(0);
    }

    let repo = SqlitePageRepository::new(pool.clone());
    let defaults = [
        NewPage::new(
            "welcome",
            "Welcome",
            "<h3>Space Dashboard</h3><p>Live ISS position, JWST imagery, OSDR datasets and upcoming sky events.</p>",
        ),
        NewPage::new(
            "about",
            "About",
            "<p>Telemetry is collected by the ISS service and proxied through this dashboard.</p>",
        ),
    ];
    for page in &defaults {
        repo.upsert(page).await?;
    }

    tracing::info!(target: "orbitdash.db", pages = defaults.len(), "seeded default pages");
    Ok(defaults.len())
}
