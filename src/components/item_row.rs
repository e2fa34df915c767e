//! Item Row Component
//!
//! Drag handle, text, and Edit/Delete controls for one list entry.

use leptos::prelude::*;
use leptos_dragdrop::make_on_dragstart;

use crate::context::use_editor_context;
use crate::models::{Item, ItemAction, ItemId};
use crate::store::EditorStateStoreFields;

/// A single entry of the list, keyed by id; text and state are read live
#[component]
pub fn ItemRow(item_id: ItemId) -> impl IntoView {
    let ctx = use_editor_context();
    let store = ctx.store;
    let dnd = ctx.dnd;
    let glyph = ctx.config(|c| c.handle_glyph.clone());
    let grab_key = ctx.config(|c| c.grab_key.clone());

    let field = move |f: fn(&Item) -> String| {
        store.items().with(|items| {
            items
                .iter()
                .find(|item| item.id == item_id)
                .map(f)
                .unwrap_or_default()
        })
    };
    let text = move || field(|item| item.text.clone());
    let grabbed = move || field(|item| item.grabbed.to_string());
    let draggable = move || field(|item| item.draggable.to_string());

    let row_class = move || {
        if dnd.dragging() == Some(item_id) {
            "item-row dragging"
        } else {
            "item-row"
        }
    };

    let on_handle_keydown = move |ev: web_sys::KeyboardEvent| {
        if ev.key() == grab_key {
            ev.prevent_default();
            ctx.dispatch(item_id, ItemAction::ToggleGrab);
        }
    };

    view! {
        <li
            class=row_class
            draggable=draggable
            // must match leptos_dragdrop::DND_ID_ATTR
            data-dnd-id=item_id.to_string()
            on:dragstart=make_on_dragstart(dnd, item_id)
        >
            <span
                class="drag-handle"
                role="button"
                tabindex="0"
                aria-label="Drag item"
                aria-grabbed=grabbed
                on:keydown=on_handle_keydown
            >
                {glyph}
            </span>
            <span class="item-text">{text}</span>
            <button class="edit" aria-label="Edit item" on:click=move |_| ctx.dispatch(item_id, ItemAction::Edit)>
                "Edit"
            </button>
            <button class="delete" aria-label="Delete item" on:click=move |_| ctx.dispatch(item_id, ItemAction::Delete)>
                "Delete"
            </button>
        </li>
    }
}
