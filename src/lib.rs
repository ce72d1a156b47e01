//! Menu Tree - hierarchical navigation menus
//!
//! Assembles flat, parent-referencing menu items into an annotated forest,
//! marks the branch matching the current request path, and caches each menu's
//! items behind a write-invalidated read-through cache.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod menu;
pub mod models;
pub mod store;

pub use api::AppState;
pub use config::Config;
pub use menu::{build_menu_tree, MenuNode, MenuService, MenuTree};
