//! Response DTOs for the menu service API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;
use uuid::Uuid;

use super::MenuItem;
use crate::cache::CacheStats;

/// One row of the item listing (GET /items) and the body returned by
/// create/update.
#[derive(Debug, Clone, Serialize)]
pub struct ItemResponse {
    #[serde(flatten)]
    pub item: MenuItem,
    /// Resolved URL, with a placeholder for items that link nowhere
    pub url: String,
    pub has_children: bool,
}

/// Response body for DELETE /items/:id
#[derive(Debug, Clone, Serialize)]
pub struct DeleteResponse {
    pub message: String,
    /// Every removed id, the requested item first, then cascaded descendants
    pub deleted: Vec<Uuid>,
}

impl DeleteResponse {
    pub fn new(deleted: Vec<Uuid>) -> Self {
        Self {
            message: format!("Deleted {} menu item(s)", deleted.len()),
            deleted,
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub invalidations: u64,
    pub total_entries: usize,
    pub hit_rate: f64,
}

impl From<CacheStats> for StatsResponse {
    fn from(stats: CacheStats) -> Self {
        Self {
            hit_rate: stats.hit_rate(),
            hits: stats.hits,
            misses: stats.misses,
            evictions: stats.evictions,
            invalidations: stats.invalidations,
            total_entries: stats.total_entries,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_response_is_flat() {
        let item = MenuItem::new("main_menu", "Home").with_explicit_url("/");
        let resp = ItemResponse {
            item,
            url: "/".to_string(),
            has_children: false,
        };

        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["name"], "Home");
        assert_eq!(json["menu_name"], "main_menu");
        assert_eq!(json["url"], "/");
        assert_eq!(json["has_children"], false);
    }

    #[test]
    fn test_delete_response_message() {
        let resp = DeleteResponse::new(vec![Uuid::new_v4(), Uuid::new_v4()]);
        assert_eq!(resp.message, "Deleted 2 menu item(s)");
    }

    #[test]
    fn test_stats_response_from_stats() {
        let mut stats = CacheStats::new();
        stats.record_hit();
        stats.record_miss();

        let resp = StatsResponse::from(stats);
        assert_eq!(resp.hit_rate, 0.5);
    }

    #[test]
    fn test_health_response() {
        let resp = HealthResponse::healthy();
        assert_eq!(resp.status, "healthy");
        assert!(!resp.timestamp.is_empty());
    }
}
