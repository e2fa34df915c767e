//! Edit Dialog Component
//!
//! Modal overlay for renaming one item. Visible while the dialog holds a draft.

use leptos::prelude::*;

use crate::context::use_editor_context;

#[component]
pub fn EditDialog() -> impl IntoView {
    let ctx = use_editor_context();
    let dialog = ctx.dialog;

    view! {
        <Show when=move || dialog.is_open()>
            <div class="modal-backdrop" on:click=move |_| ctx.cancel_edit() />
            <div id="editItemModal" class="modal" role="dialog" aria-modal="true" aria-labelledby="editItemTitle">
                <div class="modal-dialog">
                    <div class="modal-content">
                        <div class="modal-header">
                            <h5 id="editItemTitle" class="modal-title">"Edit Item"</h5>
                            <button type="button" class="close" aria-label="Close" on:click=move |_| ctx.cancel_edit()>
                                <span aria-hidden="true">"×"</span>
                            </button>
                        </div>
                        <div class="modal-body">
                            <label for="editItemInput">"Edit Item:"</label>
                            <input
                                type="text"
                                id="editItemInput"
                                class="form-control"
                                prop:value=move || dialog.text()
                                on:input=move |ev| dialog.set_text(event_target_value(&ev))
                            />
                        </div>
                        <div class="modal-footer">
                            <button type="button" class="btn btn-primary" id="saveEditBtn" on:click=move |_| ctx.save_edit()>
                                "Save"
                            </button>
                            <button type="button" class="btn btn-secondary" on:click=move |_| ctx.cancel_edit()>
                                "Cancel"
                            </button>
                        </div>
                    </div>
                </div>
            </div>
        </Show>
    }
}
