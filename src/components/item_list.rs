//! Item List Component
//!
//! The list container. Listens for dragover on itself and reorders live.

use leptos::prelude::*;
use leptos_dragdrop::{make_on_dragend, make_on_dragover, make_on_drop};

use crate::components::ItemRow;
use crate::context::use_editor_context;
use crate::store::{store_apply_reorder, EditorStateStoreFields};

#[component]
pub fn ItemList() -> impl IntoView {
    let ctx = use_editor_context();
    let store = ctx.store;
    let dnd = ctx.dnd;

    let on_dragover = make_on_dragover(dnd, move |dragged, plan| {
        store_apply_reorder(&store, dragged, plan);
    });

    view! {
        <ul
            id="itemList"
            class="item-list"
            on:dragover=on_dragover
            on:drop=make_on_drop()
            on:dragend=make_on_dragend(dnd)
        >
            <For
                each=move || store.items().get()
                key=|item| item.id
                children=move |item| view! { <ItemRow item_id=item.id /> }
            />
        </ul>
    }
}
