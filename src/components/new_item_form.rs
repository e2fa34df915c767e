//! New Item Form Component
//!
//! Text input with inline validation error.

use leptos::prelude::*;

use crate::context::use_editor_context;
use crate::store::{store_set_input, store_submit_item, EditorStateStoreFields};

/// Form for appending new items
#[component]
pub fn NewItemForm() -> impl IntoView {
    let ctx = use_editor_context();
    let store = ctx.store;
    let placeholder = ctx.config(|c| c.placeholder.clone());

    let create_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let _ = store_submit_item(&store);
    };

    view! {
        <form id="itemForm" class="new-item-form" on:submit=create_item>
            <div class="new-item-row">
                <input
                    type="text"
                    id="itemName"
                    placeholder=placeholder
                    prop:value=move || store.input().get()
                    on:input=move |ev| store_set_input(&store, event_target_value(&ev))
                />
                <button type="submit">"Add Item"</button>
            </div>
            <p id="errorText" class="error-text" role="alert">
                {move || store.error_text().get()}
            </p>
        </form>
    }
}
