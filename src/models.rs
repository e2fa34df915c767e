//! Frontend Models
//!
//! Data structures for list entries and the edit dialog.

use serde::{Deserialize, Serialize};

pub type ItemId = u32;

/// A single list entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub text: String,
    /// Always true once created
    pub draggable: bool,
    /// Keyboard "grabbed" state of the drag handle (`aria-grabbed`)
    pub grabbed: bool,
}

impl Item {
    pub fn new(id: ItemId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            draggable: true,
            grabbed: false,
        }
    }
}

/// Working copy of one item's text while the edit dialog is open
#[derive(Debug, Clone, PartialEq)]
pub struct EditDraft {
    pub item_id: ItemId,
    pub text: String,
}

impl EditDraft {
    pub fn for_item(item: &Item) -> Self {
        Self {
            item_id: item.id,
            text: item.text.clone(),
        }
    }
}

/// Action attached to a control inside an item row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemAction {
    Edit,
    Delete,
    ToggleGrab,
}
