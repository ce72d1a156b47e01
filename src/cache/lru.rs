//! LRU Tracker Module
//!
//! Access ordering used to pick an eviction victim when the cache is full.

use std::collections::VecDeque;

// == LRU Tracker ==
/// Keys ordered from most recently used (front) to least recently used (back).
#[derive(Debug, Default)]
pub struct LruTracker {
    order: VecDeque<String>,
}

impl LruTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves `key` to the most recently used position, inserting it if new.
    pub fn touch(&mut self, key: &str) {
        self.remove(key);
        self.order.push_front(key.to_string());
    }

    pub fn remove(&mut self, key: &str) {
        self.order.retain(|k| k != key);
    }

    /// Pops the least recently used key.
    pub fn evict_oldest(&mut self) -> Option<String> {
        self.order.pop_back()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evicts_in_insertion_order_without_access() {
        let mut lru = LruTracker::new();
        lru.touch("menu_items_main");
        lru.touch("menu_items_footer");

        assert_eq!(lru.evict_oldest().as_deref(), Some("menu_items_main"));
        assert_eq!(lru.evict_oldest().as_deref(), Some("menu_items_footer"));
        assert!(lru.evict_oldest().is_none());
    }

    #[test]
    fn test_touch_promotes_existing_key() {
        let mut lru = LruTracker::new();
        lru.touch("a");
        lru.touch("b");
        lru.touch("a");

        assert_eq!(lru.evict_oldest().as_deref(), Some("b"));
        assert_eq!(lru.evict_oldest().as_deref(), Some("a"));
        assert!(lru.evict_oldest().is_none());
    }

    #[test]
    fn test_remove() {
        let mut lru = LruTracker::new();
        lru.touch("a");
        lru.remove("a");
        lru.remove("missing");

        assert!(lru.evict_oldest().is_none());
    }
}
