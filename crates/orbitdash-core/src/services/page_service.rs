//! CMS page service.

use std::sync::Arc;

use crate::domain::{NewPage, Page, is_valid_slug};
use crate::ports::{CoreError, PageRepository, RepositoryError};

/// Slug-addressed page lookup and authoring.
pub struct PageService {
    repo: Arc<dyn PageRepository>,
}

impl PageService {
    pub fn new(repo: Arc<dyn PageRepository>) -> Self {
        Self { repo }
    }

    /// Look up a page. Any string is accepted; slugs that could never be
    /// stored resolve to `None` without touching the repository.
    pub async fn get(&self, slug: &str) -> Result<Option<Page>, CoreError> {
        if !is_valid_slug(slug) {
            return Ok(None);
        }
        Ok(self.repo.get_by_slug(slug).await?)
    }

    pub async fn list(&self) -> Result<Vec<Page>, CoreError> {
        Ok(self.repo.list().await?)
    }

    /// Create or replace a page.
    pub async fn save(&self, page: &NewPage) -> Result<Page, CoreError> {
        if !is_valid_slug(&page.slug) {
            return Err(CoreError::Validation(format!(
                "invalid slug '{}': use 1-128 characters of a-z, 0-9, '-' or '_'",
                page.slug
            )));
        }
        if page.title.trim().is_empty() {
            return Err(CoreError::Validation("page title is empty".to_string()));
        }
        Ok(self.repo.upsert(page).await?)
    }

    /// Delete a page.
    pub async fn remove(&self, slug: &str) -> Result<(), CoreError> {
        if !is_valid_slug(slug) {
            return Err(RepositoryError::NotFound(format!("page '{slug}'")).into());
        }
        Ok(self.repo.delete(slug).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::Utc;
    use std::collections::BTreeMap;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct MemoryPages {
        pages: Mutex<BTreeMap<String, Page>>,
        lookups: AtomicUsize,
    }

    #[async_trait]
    impl PageRepository for MemoryPages {
        async fn get_by_slug(&self, slug: &str) -> Result<Option<Page>, RepositoryError> {
            self.lookups.fetch_add(1, Ordering::SeqCst);
            Ok(self.pages.lock().unwrap().get(slug).cloned())
        }
        async fn list(&self) -> Result<Vec<Page>, RepositoryError> {
            Ok(self.pages.lock().unwrap().values().cloned().collect())
        }
        async fn upsert(&self, page: &NewPage) -> Result<Page, RepositoryError> {
            let stored = Page {
                slug: page.slug.clone(),
                title: page.title.clone(),
                body: page.body.clone(),
                updated_at: Utc::now(),
            };
            self.pages
                .lock()
                .unwrap()
                .insert(page.slug.clone(), stored.clone());
            Ok(stored)
        }
        async fn delete(&self, slug: &str) -> Result<(), RepositoryError> {
            self.pages
                .lock()
                .unwrap()
                .remove(slug)
                .map(|_| ())
                .ok_or_else(|| RepositoryError::NotFound(format!("page '{slug}'")))
        }
    }

    #[tokio::test]
    async fn invalid_slugs_never_reach_the_repository() {
        let repo = Arc::new(MemoryPages::default());
        let service = PageService::new(repo.clone());

        let long = "x".repeat(4096);
        for slug in ["", "../../secret", "Ünïcode", "a.b", long.as_str()] {
            assert!(service.get(slug).await.unwrap().is_none());
        }
        assert_eq!(repo.lookups.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn save_validates_and_stores() {
        let service = PageService::new(Arc::new(MemoryPages::default()));

        let err = service
            .save(&NewPage::new("Bad Slug", "t", "b"))
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));

        let err = service
            .save(&NewPage::new("ok", "   ", "b"))
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));

        service
            .save(&NewPage::new("about", "About", "<p>hi</p>"))
            .await
            .unwrap();
        let page = service.get("about").await.unwrap().unwrap();
        assert_eq!(page.title, "About");
        assert_eq!(service.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn remove_reports_missing_pages() {
        let service = PageService::new(Arc::new(MemoryPages::default()));
        let err = service.remove("ghost").await.unwrap_err();
        assert!(matches!(
            err,
            CoreError::Repository(RepositoryError::NotFound(_))
        ));
    }
}
