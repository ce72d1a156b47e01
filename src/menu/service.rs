//! Menu Service
//!
//! Read-through access to a menu's items and the render entry point.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use super::{build_menu_tree, menu_cache_key, CacheInvalidator, MenuTree, UrlResolver};
use crate::cache::Cache;
use crate::error::Result;
use crate::models::MenuItem;
use crate::store::MenuItemStore;

/// Ties the record store, the item cache and the URL resolver together.
///
/// Constructing a service subscribes a [`CacheInvalidator`] to the store, so
/// every write through that store evicts the affected menu.
pub struct MenuService {
    store: Arc<dyn MenuItemStore>,
    cache: Arc<dyn Cache<Vec<MenuItem>>>,
    resolver: Arc<dyn UrlResolver>,
    ttl: Duration,
}

impl MenuService {
    pub fn new(
        store: Arc<dyn MenuItemStore>,
        cache: Arc<dyn Cache<Vec<MenuItem>>>,
        resolver: Arc<dyn UrlResolver>,
        ttl: Duration,
    ) -> Self {
        store.subscribe(Arc::new(CacheInvalidator::new(Arc::clone(&cache))));
        Self {
            store,
            cache,
            resolver,
            ttl,
        }
    }

    // == Get Items ==
    /// Items of `menu_name` in store order, from the cache when possible.
    ///
    /// A miss reads the store once and caches the result for the configured
    /// TTL. Failing to cache is logged; the fetched items are still returned.
    pub fn get_items(&self, menu_name: &str) -> Result<Vec<MenuItem>> {
        let key = menu_cache_key(menu_name);
        if let Some(items) = self.cache.get(&key) {
            debug!("Menu '{}' served from cache", menu_name);
            return Ok(items);
        }

        let items = self.store.filter(menu_name)?;
        debug!("Menu '{}' loaded {} item(s) from store", menu_name, items.len());

        if let Err(e) = self.cache.set(&key, items.clone(), self.ttl) {
            warn!("Failed to cache menu '{}': {}", menu_name, e);
        }
        Ok(items)
    }

    // == Draw Menu ==
    /// Annotated forest for `menu_name` as seen from `current_path`.
    pub fn draw_menu(&self, menu_name: &str, current_path: &str) -> Result<MenuTree> {
        let items = self.get_items(menu_name)?;
        Ok(build_menu_tree(
            menu_name,
            &items,
            current_path,
            self.resolver.as_ref(),
        ))
    }

    pub fn store(&self) -> &dyn MenuItemStore {
        self.store.as_ref()
    }

    pub fn cache(&self) -> &dyn Cache<Vec<MenuItem>> {
        self.cache.as_ref()
    }

    pub fn resolver(&self) -> &dyn UrlResolver {
        self.resolver.as_ref()
    }
}
