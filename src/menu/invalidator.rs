//! Cache Invalidator
//!
//! Evicts a menu's cached item list whenever one of its items is written.

use std::sync::Arc;

use tracing::{debug, warn};

use super::menu_cache_key;
use crate::cache::Cache;
use crate::models::MenuItem;
use crate::store::{ChangeEvent, ChangeListener};

/// Store listener that keeps the menu item cache write-invalidated.
pub struct CacheInvalidator {
    cache: Arc<dyn Cache<Vec<MenuItem>>>,
}

impl CacheInvalidator {
    pub fn new(cache: Arc<dyn Cache<Vec<MenuItem>>>) -> Self {
        Self { cache }
    }

    fn evict(&self, menu_name: &str) {
        let key = menu_cache_key(menu_name);
        match self.cache.delete(&key) {
            Ok(true) => debug!("Invalidated cached menu '{}'", menu_name),
            Ok(false) => debug!("Menu '{}' was not cached", menu_name),
            // the write already happened; a stale entry lives until its TTL
            Err(e) => warn!("Failed to invalidate cached menu '{}': {}", menu_name, e),
        }
    }
}

impl ChangeListener for CacheInvalidator {
    fn on_change(&self, event: &ChangeEvent) {
        let Some(item) = &event.instance else {
            debug!("Ignoring {:?} event without an instance", event.kind);
            return;
        };

        self.evict(&item.menu_name);

        // an item moved between menus leaves the old menu stale too
        if let Some(previous) = &event.previous {
            if previous.menu_name != item.menu_name {
                self.evict(&previous.menu_name);
            }
        }
    }
}
