//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;

use crate::menu::RouteTable;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Maximum number of menus the cache can hold
    pub max_entries: usize,
    /// Lifetime in seconds of a cached menu item list
    pub menu_cache_ttl: u64,
    /// Named routes used to resolve `named_url` values
    pub routes: RouteTable,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `MAX_ENTRIES` - Maximum cached menus (default: 1000)
    /// - `MENU_CACHE_TTL` - Cached menu lifetime in seconds (default: 3600)
    /// - `MENU_ROUTES` - Comma-separated `name=/path` pairs (default: empty)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.server_port),
            max_entries: env::var("MAX_ENTRIES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_entries),
            menu_cache_ttl: env::var("MENU_CACHE_TTL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.menu_cache_ttl),
            routes: env::var("MENU_ROUTES")
                .map(|v| RouteTable::parse(&v))
                .unwrap_or_default(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            max_entries: 1000,
            menu_cache_ttl: 3600,
            routes: RouteTable::default(),
        }
    }
}
