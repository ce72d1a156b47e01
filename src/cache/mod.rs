//! Cache Module
//!
//! Key-value cache capability used for derived menu data, plus an in-process
//! implementation with TTL expiration and LRU eviction.

mod entry;
mod local;
mod lru;
mod stats;
mod store;

use std::time::Duration;

use crate::error::Result;

// Re-export public types
pub use entry::CacheEntry;
pub use local::LocalCache;
pub use lru::LruTracker;
pub use stats::CacheStats;
pub use store::CacheStore;

// == Public Constants ==
/// Maximum allowed key length in bytes
pub const MAX_KEY_LENGTH: usize = 256;

// == Cache Capability ==
/// A shared key-value cache keyed by string.
///
/// Implementations are accessed through `&self` so one instance can be shared
/// between the read path and the invalidator. Swapping the backing store only
/// requires another implementation of this trait.
pub trait Cache<V>: Send + Sync {
    /// Returns the live value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<V>;

    /// Stores `value` under `key` for `ttl`, replacing any previous value.
    fn set(&self, key: &str, value: V, ttl: Duration) -> Result<()>;

    /// Removes `key`. Returns whether an entry was present.
    fn delete(&self, key: &str) -> Result<bool>;

    /// Snapshot of hit/miss/eviction counters.
    fn stats(&self) -> CacheStats;
}
