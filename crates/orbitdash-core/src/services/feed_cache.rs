//! Time-bounded cache for normalized upstream feeds.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Mutex, RwLock};
use tokio::time::Instant;

struct CacheEntry<T> {
    stored_at: Instant,
    value: T,
}

/// String-keyed cache whose entries expire after a fixed TTL.
///
/// Failed fetches are never stored, so an upstream outage is retried on the
/// next request instead of being served from cache. A zero TTL turns the
/// cache into a pass-through.
///
/// Misses are single-flight per key: while one caller fetches, others asking
/// for the same key wait for it and then read the stored value.
pub struct FeedCache<T> {
    ttl: Duration,
    entries: RwLock<HashMap<String, CacheEntry<T>>>,
    inflight: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl<T: Clone + Send + Sync> FeedCache<T> {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: RwLock::new(HashMap::new()),
            inflight: Mutex::new(HashMap::new()),
        }
    }

    fn is_fresh(&self, entry: &CacheEntry<T>) -> bool {
        entry.stored_at.elapsed() < self.ttl
    }

    /// Fresh value for `key`, if any.
    pub async fn get(&self, key: &str) -> Option<T> {
        let entries = self.entries.read().await;
        entries
            .get(key)
            .filter(|entry| self.is_fresh(entry))
            .map(|entry| entry.value.clone())
    }

    /// Store `value` under `key`, dropping expired entries on the way.
    pub async fn insert(&self, key: impl Into<String>, value: T) {
        if self.ttl.is_zero() {
            return;
        }
        let mut entries = self.entries.write().await;
        let ttl = self.ttl;
        entries.retain(|_, entry| entry.stored_at.elapsed() < ttl);
        entries.insert(
            key.into(),
            CacheEntry {
                stored_at: Instant::now(),
                value,
            },
        );
    }

    /// Return the cached value for `key` or run `fetch` and cache its
    /// success.
    ///
    /// Only one `fetch` per key runs at a time. Callers queued behind a
    /// failed fetch try their own.
    pub async fn get_or_try_fetch<F, Fut, E>(&self, key: &str, fetch: F) -> Result<T, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        if let Some(hit) = self.get(key).await {
            tracing::debug!(target: "orbitdash.cache", key, "cache hit");
            return Ok(hit);
        }
        if self.ttl.is_zero() {
            return fetch().await;
        }

        let gate = {
            let mut inflight = self.inflight.lock().await;
            Arc::clone(inflight.entry(key.to_string()).or_default())
        };
        let result = {
            let _turn = gate.lock().await;
            if let Some(hit) = self.get(key).await {
                tracing::debug!(target: "orbitdash.cache", key, "filled by concurrent fetch");
                Ok(hit)
            } else {
                let fetched = fetch().await;
                if let Ok(value) = &fetched {
                    self.insert(key, value.clone()).await;
                }
                fetched
            }
        };

        // The map and this caller hold the only references when nobody waits.
        let mut inflight = self.inflight.lock().await;
        if Arc::strong_count(&gate) <= 2 {
            inflight.remove(key);
        }
        result
    }

    /// Number of stored entries, fresh or not.
    #[cfg(test)]
    async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    #[cfg(test)]
    async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}
