//! `SQLite` implementation of the `PageRepository` trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use orbitdash_core::{NewPage, Page, PageRepository, RepositoryError};

/// `SQLite` implementation of the `PageRepository` trait.
///
/// Timestamps are stored as RFC 3339 text.
pub struct SqlitePageRepository {
    pool: SqlitePool,
}

impl SqlitePageRepository {
    /// Create a new `SQLite` page repository.
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

fn storage(e: sqlx::Error) -> RepositoryError {
    RepositoryError::Storage(e.to_string())
}

fn row_to_page(row: &SqliteRow) -> Result<Page, RepositoryError> {
    let updated_at: String = row.try_get("updated_at").map_err(storage)?;
    let updated_at = DateTime::parse_from_rfc3339(&updated_at)
        .map_err(|e| RepositoryError::Storage(format!("bad updated_at '{updated_at}': {e}")))?
        .with_timezone(&Utc);

    Ok(Page {
        slug: row.try_get("slug").map_err(storage)?,
        title: row.try_get("title").map_err(storage)?,
        body: row.try_get("body").map_err(storage)?,
        updated_at,
    })
}

#[async_trait]
impl PageRepository for SqlitePageRepository {
    async fn get_by_slug(&self, slug: &str) -> Result<Option<Page>, RepositoryError> {
        let row = sqlx::query("SELECT slug, title, body, updated_at FROM cms_pages WHERE slug = ?")
            .bind(slug)
            .fetch_optional(&self.pool)
            .await
            .map_err(storage)?;

        row.as_ref().map(row_to_page).transpose()
    }

    async fn list(&self) -> Result<Vec<Page>, RepositoryError> {
        let rows = sqlx::query("SELECT slug, title, body, updated_at FROM cms_pages ORDER BY slug")
            .fetch_all(&self.pool)
            .await
            .map_err(storage)?;

        rows.iter().map(row_to_page).collect()
    }

    async fn upsert(&self, page: &NewPage) -> Result<Page, RepositoryError> {
        let updated_at = Utc::now();

        sqlx::query(
            r#"
            INSERT INTO cms_pages (slug, title, body, updated_at)
            VALUES (?, ?, ?, ?)
            ON CONFLICT(slug) DO UPDATE SET
                title = excluded.title,
                body = excluded.body,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(&page.slug)
        .bind(&page.title)
        .bind(&page.body)
        .bind(updated_at.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(storage)?;

        Ok(Page {
            slug: page.slug.clone(),
            title: page.title.clone(),
            body: page.body.clone(),
            updated_at,
        })
    }

    async fn delete(&self, slug: &str) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM cms_pages WHERE slug = ?")
            .bind(slug)
            .execute(&self.pool)
            .await
            .map_err(storage)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!("page '{slug}'")));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::setup::setup_test_database;

    async fn repo() -> SqlitePageRepository {
        SqlitePageRepository::new(setup_test_database().await.unwrap())
    }

    #[tokio::test]
    async fn missing_slug_is_none() {
        let repo = repo().await;
        assert!(repo.get_by_slug("nope").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn upsert_then_get_round_trips() {
        let repo = repo().await;
        let saved = repo
            .upsert(&NewPage::new("mission", "Mission", "<p>Go</p>"))
            .await
            .unwrap();

        let loaded = repo.get_by_slug("mission").await.unwrap().unwrap();
        assert_eq!(loaded, saved);
    }

    #[tokio::test]
    async fn upsert_replaces_existing_page() {
        let repo = repo().await;
        repo.upsert(&NewPage::new("faq", "FAQ", "v1")).await.unwrap();
        repo.upsert(&NewPage::new("faq", "FAQ v2", "v2")).await.unwrap();

        let pages = repo.list().await.unwrap();
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].title, "FAQ v2");
        assert_eq!(pages[0].body, "v2");
    }

    #[tokio::test]
    async fn list_is_ordered_by_slug() {
        let repo = repo().await;
        for slug in ["zeta", "alpha", "mid"] {
            repo.upsert(&NewPage::new(slug, slug, "")).await.unwrap();
        }
        let slugs: Vec<String> = repo.list().await.unwrap().into_iter().map(|p| p.slug).collect();
        assert_eq!(slugs, vec!["alpha", "mid", "zeta"]);
    }

    #[tokio::test]
    async fn delete_missing_page_is_not_found() {
        let repo = repo().await;
        repo.upsert(&NewPage::new("gone", "Gone", "")).await.unwrap();
        repo.delete("gone").await.unwrap();
        assert!(matches!(
            repo.delete("gone").await,
            Err(RepositoryError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn hostile_slugs_are_plain_parameters() {
        let repo = repo().await;
        repo.upsert(&NewPage::new("safe", "Safe", "")).await.unwrap();
        assert!(
            repo.get_by_slug("x' OR '1'='1")
                .await
                .unwrap()
                .is_none()
        );
        assert_eq!(repo.list().await.unwrap().len(), 1);
    }
}
