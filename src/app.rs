//! List Editor App
//!
//! Root component: builds the store and context, lays out form, list and dialog.

use leptos::prelude::*;
use leptos_dragdrop::create_dnd_signals;
use reactive_stores::Store;

use crate::components::{EditDialog, ItemList, NewItemForm};
use crate::config::EditorConfig;
use crate::context::EditorContext;
use crate::dialog::ModalDialog;
use crate::store::{EditorState, EditorStateStoreFields};

#[component]
pub fn App(config: EditorConfig) -> impl IntoView {
    let store = Store::new(EditorState::new());
    let title = config.title.clone();

    // Provide context to all children
    let ctx = EditorContext::new(store, ModalDialog::new(), create_dnd_signals(), config);
    provide_context(ctx);

    view! {
        <main class="container">
            <h1>{title}</h1>

            <NewItemForm />

            <ItemList />

            <p class="item-count">{move || format!("{} items", store.items().with(|items| items.len()))}</p>

            <EditDialog />
        </main>
    }
}
