//! API Handlers
//!
//! HTTP request handlers for each menu service endpoint.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use tracing::info;
use uuid::Uuid;

use crate::cache::LocalCache;
use crate::config::Config;
use crate::error::{MenuError, Result};
use crate::menu::{MenuService, MenuTree};
use crate::models::{
    DeleteResponse, HealthResponse, ItemResponse, ItemsQuery, MenuItem, MenuItemRequest,
    MenuQuery, StatsResponse, MAX_MENU_DEPTH,
};
use crate::store::{nesting_depth, InMemoryStore};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub menus: Arc<MenuService>,
}

impl AppState {
    pub fn new(menus: MenuService) -> Self {
        Self {
            menus: Arc::new(menus),
        }
    }

    /// In-memory store and cache sized and timed from the Config.
    pub fn from_config(config: &Config) -> Self {
        let service = MenuService::new(
            Arc::new(InMemoryStore::new()),
            Arc::new(LocalCache::<Vec<MenuItem>>::new(config.max_entries)),
            Arc::new(config.routes.clone()),
            Duration::from_secs(config.menu_cache_ttl),
        );
        Self::new(service)
    }

    fn item_response(&self, item: MenuItem) -> Result<ItemResponse> {
        Ok(ItemResponse {
            url: item.admin_url(self.menus.resolver()),
            has_children: self.menus.store().has_children(item.id)?,
            item,
        })
    }

    /// Rejects an item whose subtree would sit below [`MAX_MENU_DEPTH`].
    fn check_depth(&self, item: &MenuItem) -> Result<()> {
        let depth = nesting_depth(self.menus.store(), item)?;
        if depth > MAX_MENU_DEPTH {
            return Err(MenuError::InvalidRequest(format!(
                "Menu nesting of {} levels exceeds the limit of {}",
                depth, MAX_MENU_DEPTH
            )));
        }
        Ok(())
    }
}

/// Handler for GET /menus/:menu_name
///
/// Renders the menu as seen from `?path=` (default `/`).
pub async fn draw_menu_handler(
    State(state): State<AppState>,
    path: std::result::Result<Path<String>, PathRejection>,
    query: std::result::Result<Query<MenuQuery>, QueryRejection>,
) -> Result<Json<MenuTree>> {
    let Path(menu_name) = path?;
    let Query(query) = query?;
    let current_path = query.path.as_deref().unwrap_or("/");
    let tree = state.menus.draw_menu(&menu_name, current_path)?;
    Ok(Json(tree))
}

/// Handler for GET /items
pub async fn list_items_handler(
    State(state): State<AppState>,
    query: std::result::Result<Query<ItemsQuery>, QueryRejection>,
) -> Result<Json<Vec<ItemResponse>>> {
    let Query(query) = query?;
    let store = state.menus.store();
    let items = match query.menu_name.as_deref() {
        Some(menu_name) => store.filter(menu_name)?,
        None => store.all()?,
    };

    let rows = items
        .into_iter()
        .map(|item| state.item_response(item))
        .collect::<Result<Vec<_>>>()?;
    Ok(Json(rows))
}

/// Handler for POST /items
pub async fn create_item_handler(
    State(state): State<AppState>,
    req: std::result::Result<Json<MenuItemRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ItemResponse>)> {
    let Json(req) = req?;
    if let Some(error_msg) = req.validate() {
        return Err(MenuError::InvalidRequest(error_msg));
    }

    let item = req.into_item(Uuid::new_v4());
    state.check_depth(&item)?;
    info!("Creating menu item '{}'", item);
    state.menus.store().save(item.clone())?;

    Ok((StatusCode::CREATED, Json(state.item_response(item)?)))
}

/// Handler for PUT /items/:id
pub async fn update_item_handler(
    State(state): State<AppState>,
    path: std::result::Result<Path<Uuid>, PathRejection>,
    req: std::result::Result<Json<MenuItemRequest>, JsonRejection>,
) -> Result<Json<ItemResponse>> {
    let Path(id) = path?;
    let Json(req) = req?;
    if let Some(error_msg) = req.validate() {
        return Err(MenuError::InvalidRequest(error_msg));
    }

    let item = req.into_item(id);
    state.check_depth(&item)?;
    info!("Updating menu item '{}'", item);
    state.menus.store().update(item.clone())?;

    Ok(Json(state.item_response(item)?))
}

/// Handler for DELETE /items/:id
pub async fn delete_item_handler(
    State(state): State<AppState>,
    path: std::result::Result<Path<Uuid>, PathRejection>,
) -> Result<Json<DeleteResponse>> {
    let Path(id) = path?;
    let removed = state.menus.store().delete(id)?;
    info!("Deleted {} menu item(s) starting at {}", removed.len(), id);

    Ok(Json(DeleteResponse::new(
        removed.into_iter().map(|item| item.id).collect(),
    )))
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse::from(state.menus.cache().stats()))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
