//! In-memory record store.

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;
use uuid::Uuid;

use super::{ChangeEvent, ChangeKind, ChangeListener, MenuItemStore};
use crate::error::{MenuError, Result};
use crate::models::MenuItem;

/// Vec-backed [`MenuItemStore`] with synchronous listeners.
#[derive(Default)]
pub struct InMemoryStore {
    items: RwLock<Vec<MenuItem>>,
    listeners: RwLock<Vec<Arc<dyn ChangeListener>>>,
    fetches: AtomicUsize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `filter` reads served so far.
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }

    fn notify(&self, event: ChangeEvent) {
        // clone the list so listeners may call back into the store
        let listeners = self.listeners.read().clone();
        for listener in listeners {
            listener.on_change(&event);
        }
    }
}

impl MenuItemStore for InMemoryStore {
    fn filter(&self, menu_name: &str) -> Result<Vec<MenuItem>> {
        self.fetches.fetch_add(1, Ordering::SeqCst);

        let mut items: Vec<MenuItem> = self
            .items
            .read()
            .iter()
            .filter(|item| item.menu_name == menu_name)
            .cloned()
            .collect();
        items.sort_by(MenuItem::store_cmp);
        Ok(items)
    }

    fn all(&self) -> Result<Vec<MenuItem>> {
        let mut items = self.items.read().clone();
        items.sort_by(MenuItem::store_cmp);
        Ok(items)
    }

    fn get(&self, id: Uuid) -> Result<Option<MenuItem>> {
        Ok(self.items.read().iter().find(|item| item.id == id).cloned())
    }

    fn has_children(&self, id: Uuid) -> Result<bool> {
        Ok(self
            .items
            .read()
            .iter()
            .any(|item| item.parent_id == Some(id) && item.id != id))
    }

    fn save(&self, item: MenuItem) -> Result<ChangeKind> {
        let event = {
            let mut items = self.items.write();
            match items.iter_mut().find(|stored| stored.id == item.id) {
                Some(stored) => {
                    let previous = std::mem::replace(stored, item.clone());
                    ChangeEvent::updated(previous, item)
                }
                None => {
                    items.push(item.clone());
                    ChangeEvent::created(item)
                }
            }
        };

        let kind = event.kind;
        debug!("Saved menu item ({:?})", kind);
        self.notify(event);
        Ok(kind)
    }

    fn update(&self, item: MenuItem) -> Result<()> {
        let event = {
            let mut items = self.items.write();
            let Some(stored) = items.iter_mut().find(|stored| stored.id == item.id) else {
                return Err(MenuError::NotFound(format!("menu item {}", item.id)));
            };
            let previous = std::mem::replace(stored, item.clone());
            ChangeEvent::updated(previous, item)
        };

        debug!("Updated menu item");
        self.notify(event);
        Ok(())
    }

    fn delete(&self, id: Uuid) -> Result<Vec<MenuItem>> {
        let removed = {
            let mut items = self.items.write();
            if !items.iter().any(|item| item.id == id) {
                return Err(MenuError::NotFound(format!("menu item {}", id)));
            }

            // breadth-first over parent links; the set also stops parent loops
            let mut doomed = vec![id];
            let mut seen: HashSet<Uuid> = HashSet::from([id]);
            let mut next = 0;
            while next < doomed.len() {
                let parent = doomed[next];
                for item in items.iter() {
                    if item.parent_id == Some(parent) && seen.insert(item.id) {
                        doomed.push(item.id);
                    }
                }
                next += 1;
            }

            let mut removed = Vec::with_capacity(doomed.len());
            for doomed_id in &doomed {
                if let Some(pos) = items.iter().position(|item| item.id == *doomed_id) {
                    removed.push(items.remove(pos));
                }
            }
            removed
        };

        debug!("Deleted {} menu item(s) starting at {}", removed.len(), id);
        for item in &removed {
            self.notify(ChangeEvent::deleted(item.clone()));
        }
        Ok(removed)
    }

    fn subscribe(&self, listener: Arc<dyn ChangeListener>) {
        self.listeners.write().push(listener);
    }
}
