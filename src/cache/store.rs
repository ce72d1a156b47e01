//! Cache Store Module
//!
//! HashMap storage combined with LRU tracking and lazy TTL expiration.

use std::collections::HashMap;
use std::time::Duration;

use crate::cache::{CacheEntry, CacheStats, LruTracker, MAX_KEY_LENGTH};
use crate::error::{MenuError, Result};

// == Cache Store ==
/// Single-owner cache storage. Wrap it in [`LocalCache`](super::LocalCache)
/// to share it.
#[derive(Debug)]
pub struct CacheStore<V> {
    entries: HashMap<String, CacheEntry<V>>,
    lru: LruTracker,
    stats: CacheStats,
    max_entries: usize,
}

impl<V: Clone> CacheStore<V> {
    /// Creates an empty store holding at most `max_entries` keys.
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: HashMap::new(),
            lru: LruTracker::new(),
            stats: CacheStats::new(),
            max_entries,
        }
    }

    // == Set ==
    /// Stores `value` under `key` for `ttl`.
    ///
    /// Overwriting resets the TTL. Inserting a new key into a full store evicts
    /// the least recently used entry first.
    pub fn set(&mut self, key: &str, value: V, ttl: Duration) -> Result<()> {
        if key.is_empty() || key.len() > MAX_KEY_LENGTH {
            return Err(MenuError::InvalidRequest(format!(
                "Cache key must be 1..={} bytes",
                MAX_KEY_LENGTH
            )));
        }

        if !self.entries.contains_key(key) && self.entries.len() >= self.max_entries {
            match self.lru.evict_oldest() {
                Some(evicted) => {
                    self.entries.remove(&evicted);
                    self.stats.record_eviction();
                }
                None => {
                    return Err(MenuError::CacheFull(format!(
                        "No room for '{}' and nothing to evict",
                        key
                    )));
                }
            }
        }

        self.entries
            .insert(key.to_string(), CacheEntry::new(value, ttl));
        self.lru.touch(key);
        self.stats.set_total_entries(self.entries.len());

        Ok(())
    }

    // == Get ==
    /// Returns a clone of the live value under `key`.
    ///
    /// Expired entries are dropped on access and count as misses.
    pub fn get(&mut self, key: &str) -> Option<V> {
        let expired = match self.entries.get(key) {
            Some(entry) => entry.is_expired(),
            None => {
                self.stats.record_miss();
                return None;
            }
        };

        if expired {
            self.entries.remove(key);
            self.lru.remove(key);
            self.stats.set_total_entries(self.entries.len());
            self.stats.record_miss();
            return None;
        }

        self.stats.record_hit();
        self.lru.touch(key);
        self.entries.get(key).map(|entry| entry.value.clone())
    }

    // == Delete ==
    /// Removes `key`, returning whether it was present.
    pub fn delete(&mut self, key: &str) -> bool {
        if self.entries.remove(key).is_none() {
            return false;
        }

        self.lru.remove(key);
        self.stats.record_invalidation();
        self.stats.set_total_entries(self.entries.len());
        true
    }

    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
