//! Request DTOs for the menu service API
//!
//! Defines the structure of incoming HTTP request bodies and query strings.

use serde::Deserialize;
use uuid::Uuid;

use super::{
    MenuItem, MAX_EXPLICIT_URL_LENGTH, MAX_MENU_NAME_LENGTH, MAX_NAMED_URL_LENGTH,
    MAX_NAME_LENGTH,
};

/// Request body for creating (POST /items) or replacing (PUT /items/:id) a
/// menu item.
#[derive(Debug, Clone, Deserialize)]
pub struct MenuItemRequest {
    pub name: String,
    pub menu_name: String,
    #[serde(default)]
    pub named_url: Option<String>,
    #[serde(default)]
    pub explicit_url: Option<String>,
    #[serde(default)]
    pub parent_id: Option<Uuid>,
    #[serde(default)]
    pub order: i32,
}

impl MenuItemRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.name.trim().is_empty() {
            return Some("Name cannot be empty".to_string());
        }
        if self.menu_name.trim().is_empty() {
            return Some("Menu name cannot be empty".to_string());
        }

        let limits = [
            ("Name", Some(&self.name), MAX_NAME_LENGTH),
            ("Menu name", Some(&self.menu_name), MAX_MENU_NAME_LENGTH),
            ("Named URL", self.named_url.as_ref(), MAX_NAMED_URL_LENGTH),
            ("Explicit URL", self.explicit_url.as_ref(), MAX_EXPLICIT_URL_LENGTH),
        ];
        limits
            .into_iter()
            .find(|(_, value, max)| value.is_some_and(|v| v.chars().count() > *max))
            .map(|(field, _, max)| {
                format!("{} exceeds maximum length of {} characters", field, max)
            })
    }

    /// Builds the stored item under the given id.
    pub fn into_item(self, id: Uuid) -> MenuItem {
        MenuItem {
            id,
            name: self.name,
            menu_name: self.menu_name,
            named_url: self.named_url,
            explicit_url: self.explicit_url,
            parent_id: self.parent_id,
            order: self.order,
        }
    }
}

/// Query string for GET /menus/:menu_name
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MenuQuery {
    /// Current request path; defaults to `/`
    #[serde(default)]
    pub path: Option<String>,
}

/// Query string for GET /items
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ItemsQuery {
    /// Restrict the listing to one menu
    #[serde(default)]
    pub menu_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str, menu_name: &str) -> MenuItemRequest {
        MenuItemRequest {
            name: name.to_string(),
            menu_name: menu_name.to_string(),
            named_url: None,
            explicit_url: None,
            parent_id: None,
            order: 0,
        }
    }

    #[test]
    fn test_request_deserialize_minimal() {
        let json = r#"{"name": "Home", "menu_name": "main_menu"}"#;
        let req: MenuItemRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.name, "Home");
        assert_eq!(req.order, 0);
        assert!(req.parent_id.is_none());
    }

    #[test]
    fn test_validate_valid_request() {
        let mut req = request("Home", "main_menu");
        req.explicit_url = Some("/".to_string());
        assert!(req.validate().is_none());
    }

    #[test]
    fn test_validate_empty_fields() {
        assert!(request("", "main_menu").validate().is_some());
        assert!(request("Home", "  ").validate().is_some());
    }

    #[test]
    fn test_validate_lengths() {
        let req = request(&"n".repeat(MAX_NAME_LENGTH + 1), "main_menu");
        assert!(req.validate().unwrap().contains("Name"));

        let req = request("Home", &"m".repeat(MAX_MENU_NAME_LENGTH + 1));
        assert!(req.validate().unwrap().contains("Menu name"));

        let mut req = request("Home", "main_menu");
        req.explicit_url = Some("/".repeat(MAX_EXPLICIT_URL_LENGTH + 1));
        assert!(req.validate().unwrap().contains("Explicit URL"));

        // limits count characters, not bytes
        let req = request(&"я".repeat(MAX_NAME_LENGTH), "main_menu");
        assert!(req.validate().is_none());
    }

    #[test]
    fn test_into_item_keeps_id() {
        let id = Uuid::new_v4();
        let item = request("Home", "main_menu").into_item(id);
        assert_eq!(item.id, id);
        assert_eq!(item.menu_name, "main_menu");
    }
}
