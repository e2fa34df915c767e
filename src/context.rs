//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use leptos_dragdrop::DndSignals;
use tracing::warn;

use crate::config::EditorConfig;
use crate::dialog::{blocking_alert, ModalDialog};
use crate::edit;
use crate::error::EditorError;
use crate::models::{ItemAction, ItemId};
use crate::store::{store_open_editor, store_remove_item, store_save_edit, store_toggle_grabbed, AppStore};

/// Editor-wide handles provided via context
#[derive(Clone, Copy)]
pub struct EditorContext {
    pub store: AppStore,
    pub dialog: ModalDialog,
    pub dnd: DndSignals,
    config: StoredValue<EditorConfig>,
}

impl EditorContext {
    pub fn new(store: AppStore, dialog: ModalDialog, dnd: DndSignals, config: EditorConfig) -> Self {
        Self {
            store,
            dialog,
            dnd,
            config: StoredValue::new(config),
        }
    }

    pub fn config<T>(&self, f: impl FnOnce(&EditorConfig) -> T) -> T {
        self.config.with_value(f)
    }

    /// Run the action bound to one of an item's controls
    pub fn dispatch(&self, item_id: ItemId, action: ItemAction) {
        match action {
            ItemAction::Edit => {
                if let Err(err) = store_open_editor(&self.store, item_id, &self.dialog) {
                    warn!(%err, "cannot open editor");
                }
            }
            ItemAction::Delete => store_remove_item(&self.store, item_id),
            ItemAction::ToggleGrab => store_toggle_grabbed(&self.store, item_id),
        }
    }

    pub fn cancel_edit(&self) {
        edit::cancel_edit(&self.dialog);
    }

    /// Save the open draft; a blank name raises a blocking alert
    pub fn save_edit(&self) {
        let Some(draft) = self.dialog.draft_untracked() else {
            return;
        };
        match store_save_edit(&self.store, &draft, &self.dialog) {
            Ok(()) => {}
            Err(err @ EditorError::EmptyEdit) => blocking_alert(&err.to_string()),
            Err(err) => warn!(%err, "edit discarded"),
        }
    }
}

pub fn use_editor_context() -> EditorContext {
    expect_context::<EditorContext>()
}
