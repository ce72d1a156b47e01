//! In-process [`Cache`] backed by a locked [`CacheStore`].

use std::time::Duration;

use parking_lot::Mutex;

use crate::cache::{Cache, CacheStats, CacheStore};
use crate::error::Result;

/// Thread-safe wrapper that lets one [`CacheStore`] serve many handlers.
#[derive(Debug)]
pub struct LocalCache<V> {
    store: Mutex<CacheStore<V>>,
}

impl<V: Clone> LocalCache<V> {
    pub fn new(max_entries: usize) -> Self {
        Self {
            store: Mutex::new(CacheStore::new(max_entries)),
        }
    }

    pub fn len(&self) -> usize {
        self.store.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.lock().is_empty()
    }
}

impl<V: Clone + Send> Cache<V> for LocalCache<V> {
    fn get(&self, key: &str) -> Option<V> {
        self.store.lock().get(key)
    }

    fn set(&self, key: &str, value: V, ttl: Duration) -> Result<()> {
        self.store.lock().set(key, value, ttl)
    }

    fn delete(&self, key: &str) -> Result<bool> {
        Ok(self.store.lock().delete(key))
    }

    fn stats(&self) -> CacheStats {
        self.store.lock().stats()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_shared_between_threads() {
        let cache: Arc<LocalCache<u32>> = Arc::new(LocalCache::new(100));

        let handles: Vec<_> = (0..4)
            .map(|i| {
                let cache = Arc::clone(&cache);
                std::thread::spawn(move || {
                    cache
                        .set(&format!("key{}", i), i, Duration::from_secs(60))
                        .unwrap();
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(cache.len(), 4);
        assert_eq!(cache.get("key2"), Some(2));
    }

    #[test]
    fn test_used_through_trait_object() {
        let cache: Arc<dyn Cache<String>> = Arc::new(LocalCache::<String>::new(10));

        cache
            .set("k", "v".to_string(), Duration::from_secs(60))
            .unwrap();
        assert_eq!(cache.get("k").as_deref(), Some("v"));
        assert!(cache.delete("k").unwrap());
        assert!(cache.get("k").is_none());

        let stats = cache.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.invalidations, 1);
    }
}
