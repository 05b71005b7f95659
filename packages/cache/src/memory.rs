use std::any::Any;
use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard};

use tracing::debug;

use crate::key::QueryKey;

struct Entry {
    value: Option<Arc<dyn Any + Send + Sync>>,
    stale: bool,
    invalidations: u64,
}

impl Entry {
    fn empty() -> Self {
        Self {
            value: None,
            stale: true,
            invalidations: 0,
        }
    }
}

/// In-memory query cache shared by every component.
///
/// Cloning is cheap and all clones see the same entries. The app creates one
/// instance and hands it to components through context.
#[derive(Clone, Default)]
pub struct QueryCache {
    entries: Arc<Mutex<HashMap<QueryKey, Entry>>>,
}

impl std::fmt::Debug for QueryCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let keys: Vec<String> = self.lock().keys().map(|k| k.to_string()).collect();
        f.debug_struct("QueryCache").field("keys", &keys).finish()
    }
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<QueryKey, Entry>> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Store a freshly fetched value.
    pub fn set<T: Send + Sync + 'static>(&self, key: &QueryKey, value: T) {
        let mut entries = self.lock();
        let entry = entries.entry(key.clone()).or_insert_with(Entry::empty);
        entry.value = Some(Arc::new(value));
        entry.stale = false;
    }

    /// Cached value, fresh or stale.
    pub fn get<T: Clone + 'static>(&self, key: &QueryKey) -> Option<T> {
        self.lock()
            .get(key)
            .and_then(|e| e.value.as_ref())
            .and_then(|v| v.downcast_ref::<T>())
            .cloned()
    }

    /// Cached value only if it has not been invalidated since it was stored.
    pub fn get_fresh<T: Clone + 'static>(&self, key: &QueryKey) -> Option<T> {
        let entries = self.lock();
        let entry = entries.get(key)?;
        if entry.stale {
            return None;
        }
        entry.value.as_ref()?.downcast_ref::<T>().cloned()
    }

    /// Missing entries count as stale.
    pub fn is_stale(&self, key: &QueryKey) -> bool {
        self.lock().get(key).map_or(true, |e| e.stale)
    }

    /// Mark `key` and every key below it stale so the next read refetches.
    /// Returns how many entries were affected.
    pub fn invalidate(&self, key: &QueryKey) -> usize {
        let mut entries = self.lock();
        let mut affected = 0;
        for (k, entry) in entries.iter_mut() {
            if key.is_prefix_of(k) {
                entry.stale = true;
                entry.invalidations += 1;
                affected += 1;
            }
        }
        if !entries.contains_key(key) {
            // Remember the invalidation even if nothing was fetched yet.
            let mut entry = Entry::empty();
            entry.invalidations = 1;
            entries.insert(key.clone(), entry);
            affected += 1;
        }
        debug!("Invalidated {} ({} entries)", key, affected);
        affected
    }

    /// How many times `key` has been invalidated.
    pub fn invalidation_count(&self, key: &QueryKey) -> u64 {
        self.lock().get(key).map_or(0, |e| e.invalidations)
    }

    pub fn remove(&self, key: &QueryKey) {
        self.lock().remove(key);
    }

    /// Return the fresh cached value, or run `fetcher` and cache its result.
    ///
    /// Errors are returned as-is and leave the entry untouched.
    pub async fn fetch<T, E, F, Fut>(&self, key: &QueryKey, fetcher: F) -> Result<T, E>
    where
        T: Clone + Send + Sync + 'static,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        if let Some(value) = self.get_fresh::<T>(key) {
            return Ok(value);
        }
        debug!("Fetching {}", key);
        let value = fetcher().await?;
        self.set(key, value.clone());
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Clone, Debug, PartialEq)]
    struct User {
        name: String,
    }

    fn ana() -> User {
        User {
            name: "Ana".to_string(),
        }
    }

    #[test]
    fn test_set_get_and_invalidate() {
        let cache = QueryCache::new();
        let key = QueryKey::user();

        assert!(cache.is_stale(&key));
        assert_eq!(cache.get::<User>(&key), None);

        cache.set(&key, ana());
        assert!(!cache.is_stale(&key));
        assert_eq!(cache.get_fresh::<User>(&key), Some(ana()));

        assert_eq!(cache.invalidate(&key), 1);
        assert!(cache.is_stale(&key));
        assert_eq!(cache.get_fresh::<User>(&key), None);
        // Stale data is still readable while the refetch runs.
        assert_eq!(cache.get::<User>(&key), Some(ana()));
        assert_eq!(cache.invalidation_count(&key), 1);
    }

    #[test]
    fn test_wrong_type_is_a_miss() {
        let cache = QueryCache::new();
        cache.set(&QueryKey::user(), ana());
        assert_eq!(cache.get::<String>(&QueryKey::user()), None);
    }

    #[test]
    fn test_prefix_invalidation() {
        let cache = QueryCache::new();
        let p1 = QueryKey::new(["project", "p1"]);
        let p2 = QueryKey::new(["project", "p2"]);
        cache.set(&p1, 1u32);
        cache.set(&p2, 2u32);
        cache.set(&QueryKey::user(), ana());

        cache.invalidate(&QueryKey::new(["project"]));
        assert!(cache.is_stale(&p1));
        assert!(cache.is_stale(&p2));
        assert!(!cache.is_stale(&QueryKey::user()));
    }

    #[test]
    fn test_clones_share_entries() {
        let cache = QueryCache::new();
        let other = cache.clone();
        cache.set(&QueryKey::user(), ana());
        other.invalidate(&QueryKey::user());
        assert!(cache.is_stale(&QueryKey::user()));
        assert_eq!(cache.invalidation_count(&QueryKey::user()), 1);
    }

    #[tokio::test]
    async fn test_fetch_uses_cache_until_invalidated() {
        let cache = QueryCache::new();
        let key = QueryKey::user();
        let counter = Cell::new(0);
        let calls = &counter;

        let fetch = move || async move {
            calls.set(calls.get() + 1);
            Ok::<_, String>(ana())
        };

        assert_eq!(cache.fetch(&key, fetch).await, Ok(ana()));
        assert_eq!(cache.fetch(&key, fetch).await, Ok(ana()));
        assert_eq!(calls.get(), 1);

        cache.invalidate(&key);
        assert_eq!(cache.fetch(&key, fetch).await, Ok(ana()));
        assert_eq!(calls.get(), 2);
        assert!(!cache.is_stale(&key));
    }

    #[tokio::test]
    async fn test_fetch_error_leaves_entry_stale() {
        let cache = QueryCache::new();
        let key = QueryKey::user();

        let result = cache
            .fetch(&key, || async { Err::<User, _>("offline".to_string()) })
            .await;
        assert_eq!(result, Err("offline".to_string()));
        assert!(cache.is_stale(&key));
        assert_eq!(cache.get::<User>(&key), None);
    }
}
