//! Menu Item entity
//!
//! One flat, persisted record. Tree structure is expressed only through
//! `parent_id`; everything derived for rendering lives in
//! [`MenuNode`](crate::menu::MenuNode).

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::menu::UrlResolver;

/// Display URL of an item with no route at all.
pub const NO_URL: &str = "#";

/// Placeholder shown in listings instead of [`NO_URL`].
pub const NO_URL_DISPLAY: &str = "—";

// == Field Limits ==
pub const MAX_NAME_LENGTH: usize = 100;
pub const MAX_MENU_NAME_LENGTH: usize = 50;
pub const MAX_NAMED_URL_LENGTH: usize = 100;
pub const MAX_EXPLICIT_URL_LENGTH: usize = 200;

/// Deepest nesting level a menu accepts; roots are level 1.
pub const MAX_MENU_DEPTH: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Assigned at creation, never changes
    pub id: Uuid,
    /// Display label
    pub name: String,
    /// Menu this item belongs to
    pub menu_name: String,
    /// Symbolic route name, resolved at render time
    #[serde(default)]
    pub named_url: Option<String>,
    /// Literal path used when no route name is set
    #[serde(default)]
    pub explicit_url: Option<String>,
    /// Parent item, if any. Not checked for existence or cycles.
    #[serde(default)]
    pub parent_id: Option<Uuid>,
    /// Position among siblings, ties broken by name
    #[serde(default)]
    pub order: i32,
}

impl MenuItem {
    /// Creates a root item with a fresh id and no URL.
    pub fn new(menu_name: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            menu_name: menu_name.into(),
            named_url: None,
            explicit_url: None,
            parent_id: None,
            order: 0,
        }
    }

    pub fn with_named_url(mut self, named_url: impl Into<String>) -> Self {
        self.named_url = Some(named_url.into());
        self
    }

    pub fn with_explicit_url(mut self, explicit_url: impl Into<String>) -> Self {
        self.explicit_url = Some(explicit_url.into());
        self
    }

    pub fn with_parent(mut self, parent_id: Uuid) -> Self {
        self.parent_id = Some(parent_id);
        self
    }

    pub fn with_order(mut self, order: i32) -> Self {
        self.order = order;
        self
    }

    // == URL Resolution ==
    /// The path this item links to.
    ///
    /// A route name wins over an explicit URL. An unresolvable route name is
    /// used verbatim, and an item with neither gets [`NO_URL`]. Empty strings
    /// count as unset.
    pub fn resolve_url(&self, resolver: &dyn UrlResolver) -> String {
        if let Some(named) = non_empty(&self.named_url) {
            return resolver.resolve(named).unwrap_or_else(|| named.to_string());
        }
        match non_empty(&self.explicit_url) {
            Some(explicit) => explicit.to_string(),
            None => NO_URL.to_string(),
        }
    }

    /// Like [`resolve_url`](Self::resolve_url), with [`NO_URL`] replaced by a
    /// placeholder suited to listings.
    pub fn admin_url(&self, resolver: &dyn UrlResolver) -> String {
        let url = self.resolve_url(resolver);
        if url == NO_URL {
            NO_URL_DISPLAY.to_string()
        } else {
            url
        }
    }

    /// Store ordering: menu, then order, then name.
    pub fn store_cmp(&self, other: &Self) -> Ordering {
        (&self.menu_name, self.order, &self.name).cmp(&(
            &other.menu_name,
            other.order,
            &other.name,
        ))
    }
}

impl fmt::Display for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.menu_name, self.name)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}
