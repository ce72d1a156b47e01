//! Cache Entry Module
//!
//! A stored value plus its absolute expiry time.

use std::time::Duration;

use chrono::Utc;

// == Cache Entry ==
/// A single cached value with its expiry timestamp.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// Expiration timestamp (Unix milliseconds)
    pub expires_at: i64,
}

impl<V> CacheEntry<V> {
    /// Creates an entry that expires `ttl` from now.
    pub fn new(value: V, ttl: Duration) -> Self {
        let now = current_timestamp_ms();
        let ttl_ms = i64::try_from(ttl.as_millis()).unwrap_or(i64::MAX);

        Self {
            value,
            expires_at: now.saturating_add(ttl_ms),
        }
    }

    /// Whether the entry has outlived its TTL.
    ///
    /// The entry is expired once the current time reaches `expires_at`, so a
    /// zero TTL produces an entry that is never served.
    pub fn is_expired(&self) -> bool {
        current_timestamp_ms() >= self.expires_at
    }
}

/// Current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> i64 {
    Utc::now().timestamp_millis()
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_creation() {
        let entry = CacheEntry::new(vec![1, 2, 3], Duration::from_secs(60));

        assert_eq!(entry.value, vec![1, 2, 3]);
        assert!(entry.expires_at > current_timestamp_ms());
        assert!(!entry.is_expired());
    }

    #[test]
    fn test_zero_ttl_is_expired() {
        let entry = CacheEntry::new("value", Duration::ZERO);
        assert!(entry.is_expired());
    }

    #[test]
    fn test_expiry_is_ttl_from_now() {
        let before = current_timestamp_ms();
        let entry = CacheEntry::new("value", Duration::from_secs(10));
        let after = current_timestamp_ms();

        assert!(entry.expires_at >= before + 10_000);
        assert!(entry.expires_at <= after + 10_000);
    }

    #[test]
    fn test_huge_ttl_does_not_overflow() {
        let entry = CacheEntry::new("value", Duration::MAX);
        assert_eq!(entry.expires_at, i64::MAX);
        assert!(!entry.is_expired());
    }
}
