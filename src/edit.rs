//! Edit Flow
//!
//! Opening, saving and cancelling the edit dialog for one item.

use tracing::{info, warn};

use crate::dialog::Dialog;
use crate::error::{EditorError, EditorResult};
use crate::list::rename_item;
use crate::models::{EditDraft, Item, ItemId};

/// Open the dialog pre-filled with the item's current text
pub fn open_edit(items: &[Item], id: ItemId, dialog: &impl Dialog) -> EditorResult<()> {
    let item = items
        .iter()
        .find(|item| item.id == id)
        .ok_or(EditorError::ItemNotFound(id))?;
    dialog.open(EditDraft::for_item(item));
    Ok(())
}

/// Commit the draft.
///
/// Blank text leaves the list untouched and the dialog open. A draft for
/// an item deleted meanwhile closes the dialog.
pub fn save_edit(items: &mut [Item], draft: &EditDraft, dialog: &impl Dialog) -> EditorResult<()> {
    let text = draft.text.trim();
    if text.is_empty() {
        warn!(item_id = draft.item_id, "edit rejected, empty name");
        return Err(EditorError::EmptyEdit);
    }
    if !rename_item(items, draft.item_id, text) {
        dialog.close();
        return Err(EditorError::ItemNotFound(draft.item_id));
    }
    info!(item_id = draft.item_id, "item renamed");
    dialog.close();
    Ok(())
}

pub fn cancel_edit(dialog: &impl Dialog) {
    dialog.close();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    #[derive(Default)]
    struct RecordingDialog {
        opened: RefCell<Vec<EditDraft>>,
        closed: Cell<usize>,
    }

    impl Dialog for RecordingDialog {
        fn open(&self, draft: EditDraft) {
            self.opened.borrow_mut().push(draft);
        }

        fn close(&self) {
            self.closed.set(self.closed.get() + 1);
        }
    }

    fn make_list() -> Vec<Item> {
        vec![Item::new(1, "a"), Item::new(2, "b"), Item::new(3, "c")]
    }

    fn draft(item_id: ItemId, text: &str) -> EditDraft {
        EditDraft { item_id, text: text.to_string() }
    }

    #[test]
    fn test_open_prefills_current_text() {
        let dialog = RecordingDialog::default();
        open_edit(&make_list(), 2, &dialog).unwrap();
        assert_eq!(dialog.opened.borrow().as_slice(), &[draft(2, "b")]);
    }

    #[test]
    fn test_open_missing_item() {
        let dialog = RecordingDialog::default();
        let err = open_edit(&make_list(), 9, &dialog).unwrap_err();
        assert!(matches!(err, EditorError::ItemNotFound(9)));
        assert!(dialog.opened.borrow().is_empty());
    }

    #[test]
    fn test_save_updates_only_target() {
        let dialog = RecordingDialog::default();
        let mut items = make_list();
        save_edit(&mut items, &draft(2, "  bee "), &dialog).unwrap();

        let texts: Vec<_> = items.iter().map(|i| i.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "bee", "c"]);
        assert_eq!(dialog.closed.get(), 1);
    }

    #[test]
    fn test_save_empty_keeps_dialog_open() {
        let dialog = RecordingDialog::default();
        let mut items = make_list();
        let before = items.clone();

        let err = save_edit(&mut items, &draft(2, "   "), &dialog).unwrap_err();
        assert_eq!(err.to_string(), "Item name cannot be empty. Item not updated.");
        assert_eq!(items, before);
        assert_eq!(dialog.closed.get(), 0);
    }

    #[test]
    fn test_save_for_deleted_item_closes() {
        let dialog = RecordingDialog::default();
        let mut items = make_list();
        let err = save_edit(&mut items, &draft(9, "x"), &dialog).unwrap_err();
        assert!(matches!(err, EditorError::ItemNotFound(9)));
        assert_eq!(dialog.closed.get(), 1);
    }

    #[test]
    fn test_cancel_closes_without_mutation() {
        let dialog = RecordingDialog::default();
        cancel_edit(&dialog);
        assert_eq!(dialog.closed.get(), 1);
    }
}
