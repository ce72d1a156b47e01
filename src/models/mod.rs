//! Data Models Module
//!
//! The persisted menu item entity and the HTTP request/response DTOs.

mod menu_item;
mod requests;
mod responses;

pub use menu_item::*;
pub use requests::*;
pub use responses::*;
