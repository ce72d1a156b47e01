//! API Module
//!
//! HTTP handlers and routing for the menu service.
//!
//! # Endpoints
//! - `GET /menus/:menu_name?path=...` - Render a menu for a request path
//! - `GET /items?menu_name=...` - List stored items
//! - `POST /items` - Create an item
//! - `PUT /items/:id` - Replace an item
//! - `DELETE /items/:id` - Delete an item and its descendants
//! - `GET /stats` - Item cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
