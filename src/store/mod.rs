//! Record Store Module
//!
//! Persistence capability for menu items and the change notifications it
//! raises on every write.

mod events;
mod memory;

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use uuid::Uuid;

use crate::error::Result;
use crate::models::MenuItem;

pub use events::{ChangeEvent, ChangeKind, ChangeListener};
pub use memory::InMemoryStore;

/// Keyed table of menu items.
///
/// Reads return items ordered by (menu name, order, name). Every successful
/// `save` and `delete` notifies subscribed listeners synchronously, before the
/// call returns.
pub trait MenuItemStore: Send + Sync {
    /// Items of one menu, in store order.
    fn filter(&self, menu_name: &str) -> Result<Vec<MenuItem>>;

    /// Every stored item, in store order.
    fn all(&self) -> Result<Vec<MenuItem>>;

    fn get(&self, id: Uuid) -> Result<Option<MenuItem>>;

    /// Whether any stored item names `id` as its parent.
    fn has_children(&self, id: Uuid) -> Result<bool>;

    /// Inserts the item, or replaces the stored item with the same id.
    fn save(&self, item: MenuItem) -> Result<ChangeKind>;

    /// Replaces the stored item with the same id.
    ///
    /// Fails with `NotFound`, and notifies nobody, if that id is not stored
    /// at the time of the write.
    fn update(&self, item: MenuItem) -> Result<()>;

    /// Removes the item and all of its descendants.
    ///
    /// Returns the removed items, the requested one first. Fails with
    /// `NotFound` if `id` is not stored.
    fn delete(&self, id: Uuid) -> Result<Vec<MenuItem>>;

    /// Registers a listener for all future changes.
    fn subscribe(&self, listener: Arc<dyn ChangeListener>);
}

/// Nesting level of the deepest node under `item` once it is saved as given.
///
/// Counts the ancestors `item` would have in its menu, itself, and the levels
/// of its stored descendants in that menu. A root without children is 1.
/// Parent loops are walked once.
pub fn nesting_depth(store: &dyn MenuItemStore, item: &MenuItem) -> Result<usize> {
    let mut items: HashMap<Uuid, MenuItem> = store
        .all()?
        .into_iter()
        .filter(|stored| stored.menu_name == item.menu_name)
        .map(|stored| (stored.id, stored))
        .collect();
    items.insert(item.id, item.clone());

    let mut above = 0;
    let mut seen = HashSet::from([item.id]);
    let mut parent = item.parent_id;
    while let Some(id) = parent {
        let Some(ancestor) = items.get(&id) else {
            break;
        };
        if !seen.insert(id) {
            break;
        }
        above += 1;
        parent = ancestor.parent_id;
    }

    let mut children: HashMap<Uuid, Vec<Uuid>> = HashMap::new();
    for stored in items.values() {
        if let Some(parent) = stored.parent_id {
            children.entry(parent).or_default().push(stored.id);
        }
    }

    let mut levels = 0;
    let mut level = vec![item.id];
    let mut visited = HashSet::from([item.id]);
    while !level.is_empty() {
        levels += 1;
        level = level
            .iter()
            .filter_map(|id| children.get(id))
            .flatten()
            .copied()
            .filter(|child| !seen.contains(child) && visited.insert(*child))
            .collect();
    }

    Ok(above + levels)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain(store: &InMemoryStore, menu: &str, len: usize) -> Vec<MenuItem> {
        let mut items: Vec<MenuItem> = Vec::new();
        for level in 0..len {
            let mut item = MenuItem::new(menu, format!("level{}", level));
            if let Some(parent) = items.last() {
                item = item.with_parent(parent.id);
            }
            store.save(item.clone()).unwrap();
            items.push(item);
        }
        items
    }

    #[test]
    fn test_nesting_depth_of_new_leaf() {
        let store = InMemoryStore::new();
        let items = chain(&store, "m", 3);

        let root = MenuItem::new("m", "Root");
        assert_eq!(nesting_depth(&store, &root).unwrap(), 1);

        let leaf = MenuItem::new("m", "Leaf").with_parent(items[2].id);
        assert_eq!(nesting_depth(&store, &leaf).unwrap(), 4);
    }

    #[test]
    fn test_nesting_depth_counts_moved_subtree() {
        let store = InMemoryStore::new();
        let upper = chain(&store, "m", 3);
        let lower = chain(&store, "m", 2);

        let moved = lower[0].clone().with_parent(upper[2].id);

        assert_eq!(nesting_depth(&store, &moved).unwrap(), 5);
    }

    #[test]
    fn test_nesting_depth_ignores_other_menus() {
        let store = InMemoryStore::new();
        let footer = chain(&store, "footer", 4);

        let item = MenuItem::new("m", "Stray").with_parent(footer[3].id);

        assert_eq!(nesting_depth(&store, &item).unwrap(), 1);
    }

    #[test]
    fn test_nesting_depth_with_parent_loop() {
        let store = InMemoryStore::new();
        let items = chain(&store, "m", 3);

        // closing the loop: the root now hangs under its own grandchild
        let looped = items[0].clone().with_parent(items[2].id);

        assert_eq!(nesting_depth(&store, &looped).unwrap(), 3);
    }
}
