//! Editor State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use leptos_dragdrop::ReorderPlan;
use reactive_stores::Store;
use tracing::{debug, info, warn};

use crate::dialog::Dialog;
use crate::edit;
use crate::error::EditorResult;
use crate::list;
use crate::models::{EditDraft, Item, ItemId};
use crate::validation::validate_name;

/// The whole editor state, owned by one store
#[derive(Clone, Debug, Default, Store)]
pub struct EditorState {
    /// Items in render order
    pub items: Vec<Item>,
    /// Id handed to the next created item
    pub next_id: ItemId,
    /// Contents of the add input
    pub input: String,
    /// Inline error under the add form (empty = no error)
    pub error_text: String,
}

impl EditorState {
    pub fn new() -> Self {
        Self {
            next_id: 1,
            ..Default::default()
        }
    }

    /// Validate the add input and append a new item.
    ///
    /// On rejection only the error text changes.
    pub fn submit(&mut self) -> EditorResult<ItemId> {
        let name = match validate_name(&self.input) {
            Ok(name) => name,
            Err(err) => {
                self.error_text = err.to_string();
                return Err(err);
            }
        };

        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Item::new(id, name));
        self.input.clear();
        self.error_text.clear();
        Ok(id)
    }
}

/// Type alias for the store
pub type AppStore = Store<EditorState>;

// ========================
// Store Helper Functions
// ========================

/// Submit the add form
pub fn store_submit_item(store: &AppStore) -> EditorResult<ItemId> {
    let result = store.write().submit();
    match &result {
        Ok(id) => info!(item_id = *id, "item created"),
        Err(err) => warn!(%err, "add rejected"),
    }
    result
}

pub fn store_set_input(store: &AppStore, value: String) {
    store.input().set(value);
}

/// Remove an item from the store by ID
pub fn store_remove_item(store: &AppStore, item_id: ItemId) {
    if list::remove_item(&mut store.items().write(), item_id) {
        info!(item_id, "item deleted");
    } else {
        debug!(item_id, "delete ignored, unknown item");
    }
}

pub fn store_toggle_grabbed(store: &AppStore, item_id: ItemId) {
    if let Some(grabbed) = list::toggle_grabbed(&mut store.items().write(), item_id) {
        debug!(item_id, grabbed, "drag handle toggled");
    }
}

/// Apply a live reorder; the store is only written when the order changes
pub fn store_apply_reorder(store: &AppStore, dragged: ItemId, plan: ReorderPlan) {
    let mut items = store.items().get_untracked();
    if list::apply_reorder(&mut items, dragged, plan) {
        debug!(dragged, ?plan, "[DND] reordered");
        store.items().set(items);
    }
}

pub fn store_open_editor(store: &AppStore, item_id: ItemId, dialog: &impl Dialog) -> EditorResult<()> {
    store.items().with_untracked(|items| edit::open_edit(items, item_id, dialog))
}

pub fn store_save_edit(store: &AppStore, draft: &EditDraft, dialog: &impl Dialog) -> EditorResult<()> {
    let mut items = store.items().get_untracked();
    edit::save_edit(&mut items, draft, dialog)?;
    store.items().set(items);
    Ok(())
}
