//! Menu Module
//!
//! Tree assembly with active-path resolution, URL resolution, and the cache
//! coherence glue between the record store and the item cache.

mod invalidator;
mod service;
mod tree;
mod urls;


pub use invalidator::CacheInvalidator;
pub use service::MenuService;
pub use tree::{build_menu_tree, MenuNode, MenuTree, Nodes};
pub use urls::{RouteTable, UrlResolver};

/// Cache key holding the flat item list of `menu_name`.
pub fn menu_cache_key(menu_name: &str) -> String {
    format!("menu_items_{}", menu_name)
}
