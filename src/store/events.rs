//! Change notifications raised by the record store.

use crate::models::MenuItem;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Created,
    Updated,
    Deleted,
}

/// One write to the store.
#[derive(Debug, Clone)]
pub struct ChangeEvent {
    pub kind: ChangeKind,
    /// The item as stored after the write (or as it was before a delete).
    /// `None` only for malformed events.
    pub instance: Option<MenuItem>,
    /// For updates, the item as it was before the write.
    pub previous: Option<MenuItem>,
}

impl ChangeEvent {
    pub fn created(item: MenuItem) -> Self {
        Self {
            kind: ChangeKind::Created,
            instance: Some(item),
            previous: None,
        }
    }

    pub fn updated(previous: MenuItem, item: MenuItem) -> Self {
        Self {
            kind: ChangeKind::Updated,
            instance: Some(item),
            previous: Some(previous),
        }
    }

    pub fn deleted(item: MenuItem) -> Self {
        Self {
            kind: ChangeKind::Deleted,
            instance: Some(item),
            previous: None,
        }
    }
}

/// Receives store changes. Called synchronously on the writing thread; must
/// not fail.
pub trait ChangeListener: Send + Sync {
    fn on_change(&self, event: &ChangeEvent);
}
