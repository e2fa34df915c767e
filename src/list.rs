//! List Operations
//!
//! Pure helpers over the ordered item list. Order in the `Vec` is render order.

use leptos_dragdrop::ReorderPlan;

use crate::models::{Item, ItemId};

fn index_of(items: &[Item], id: ItemId) -> Option<usize> {
    items.iter().position(|item| item.id == id)
}

/// Remove an item, keeping the order of the rest. Returns false if absent.
pub fn remove_item(items: &mut Vec<Item>, id: ItemId) -> bool {
    match index_of(items, id) {
        Some(index) => {
            items.remove(index);
            true
        }
        None => false,
    }
}

/// Replace an item's display text in place
pub fn rename_item(items: &mut [Item], id: ItemId, text: &str) -> bool {
    match items.iter_mut().find(|item| item.id == id) {
        Some(item) => {
            item.text = text.to_string();
            true
        }
        None => false,
    }
}

/// Flip the grabbed flag, returning the new value
pub fn toggle_grabbed(items: &mut [Item], id: ItemId) -> Option<bool> {
    let item = items.iter_mut().find(|item| item.id == id)?;
    item.grabbed = !item.grabbed;
    Some(item.grabbed)
}

/// Move `dragged` according to `plan`. Returns true if the order changed.
pub fn apply_reorder(items: &mut Vec<Item>, dragged: ItemId, plan: ReorderPlan) -> bool {
    let Some(from) = index_of(items, dragged) else {
        return false;
    };

    match plan {
        ReorderPlan::AppendToEnd => {
            if from + 1 == items.len() {
                return false;
            }
            let item = items.remove(from);
            items.push(item);
            true
        }
        ReorderPlan::InsertBefore(target) => {
            if target == dragged || items.get(from + 1).map(|next| next.id) == Some(target) {
                return false;
            }
            if index_of(items, target).is_none() {
                return false;
            }
            let item = items.remove(from);
            // Target index shifts once the dragged item is out
            let to = index_of(items, target).unwrap_or(items.len());
            items.insert(to, item);
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_list(names: &[&str]) -> Vec<Item> {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| Item::new(i as ItemId + 1, *name))
            .collect()
    }

    fn texts(items: &[Item]) -> Vec<&str> {
        items.iter().map(|item| item.text.as_str()).collect()
    }

    #[test]
    fn test_remove_keeps_relative_order() {
        let mut items = make_list(&["a", "b", "c", "d"]);
        assert!(remove_item(&mut items, 2));
        assert_eq!(texts(&items), vec!["a", "c", "d"]);
        assert!(!remove_item(&mut items, 2));
        assert_eq!(items.len(), 3);
    }

    #[test]
    fn test_rename_keeps_position() {
        let mut items = make_list(&["a", "b", "c"]);
        assert!(rename_item(&mut items, 2, "B"));
        assert_eq!(texts(&items), vec!["a", "B", "c"]);
        assert!(!rename_item(&mut items, 9, "x"));
    }

    #[test]
    fn test_toggle_grabbed_flips_only_flag() {
        let mut items = make_list(&["a", "b"]);
        let before = items.clone();
        assert_eq!(toggle_grabbed(&mut items, 1), Some(true));
        assert_eq!(toggle_grabbed(&mut items, 1), Some(false));
        assert_eq!(items, before);
        assert_eq!(toggle_grabbed(&mut items, 5), None);
    }

    #[test]
    fn test_insert_before_later_target() {
        // [X, Y, Z], drag X before Z => [Y, X, Z]
        let mut items = make_list(&["X", "Y", "Z"]);
        assert!(apply_reorder(&mut items, 1, ReorderPlan::InsertBefore(3)));
        assert_eq!(texts(&items), vec!["Y", "X", "Z"]);
    }

    #[test]
    fn test_insert_before_earlier_target() {
        let mut items = make_list(&["a", "b", "c", "d"]);
        assert!(apply_reorder(&mut items, 4, ReorderPlan::InsertBefore(2)));
        assert_eq!(texts(&items), vec!["a", "d", "b", "c"]);
    }

    #[test]
    fn test_insert_before_next_is_noop() {
        let mut items = make_list(&["a", "b", "c"]);
        assert!(!apply_reorder(&mut items, 1, ReorderPlan::InsertBefore(2)));
        assert!(!apply_reorder(&mut items, 1, ReorderPlan::InsertBefore(1)));
        assert_eq!(texts(&items), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_append_to_end() {
        let mut items = make_list(&["a", "b", "c"]);
        assert!(apply_reorder(&mut items, 1, ReorderPlan::AppendToEnd));
        assert_eq!(texts(&items), vec!["b", "c", "a"]);
        assert!(!apply_reorder(&mut items, 1, ReorderPlan::AppendToEnd));
    }

    #[test]
    fn test_sole_item_drag_is_noop() {
        let mut items = make_list(&["only"]);
        let before = items.clone();
        assert!(!apply_reorder(&mut items, 1, ReorderPlan::AppendToEnd));
        assert_eq!(items, before);
    }

    #[test]
    fn test_unknown_ids_leave_list_alone() {
        let mut items = make_list(&["a", "b"]);
        assert!(!apply_reorder(&mut items, 7, ReorderPlan::AppendToEnd));
        assert!(!apply_reorder(&mut items, 1, ReorderPlan::InsertBefore(7)));
        assert_eq!(texts(&items), vec!["a", "b"]);
    }
}
