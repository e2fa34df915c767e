//! UI Components
//!
//! Leptos components rendering the editor state.

mod new_item_form;
mod item_list;
mod item_row;
mod edit_dialog;

pub use new_item_form::NewItemForm;
pub use item_list::ItemList;
pub use item_row::ItemRow;
pub use edit_dialog::EditDialog;
