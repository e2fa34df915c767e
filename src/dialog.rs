//! Dialog Capability
//!
//! The edit flow only needs to open and close a dialog; the modal
//! component implements this on top of a signal.

use leptos::prelude::*;

use crate::models::EditDraft;

pub trait Dialog {
    /// Show the dialog for `draft`, replacing any draft already shown
    fn open(&self, draft: EditDraft);
    fn close(&self);
}

/// Signal-backed modal slot. `Some` while the dialog is visible.
#[derive(Clone, Copy)]
pub struct ModalDialog {
    draft: RwSignal<Option<EditDraft>>,
}

impl ModalDialog {
    pub fn new() -> Self {
        Self {
            draft: RwSignal::new(None),
        }
    }

    pub fn is_open(&self) -> bool {
        self.draft.with(|d| d.is_some())
    }

    /// Working text (tracked)
    pub fn text(&self) -> String {
        self.draft.with(|d| d.as_ref().map(|d| d.text.clone()).unwrap_or_default())
    }

    pub fn set_text(&self, text: String) {
        self.draft.update(|d| {
            if let Some(d) = d {
                d.text = text;
            }
        });
    }

    pub fn draft_untracked(&self) -> Option<EditDraft> {
        self.draft.get_untracked()
    }
}

impl Dialog for ModalDialog {
    fn open(&self, draft: EditDraft) {
        self.draft.set(Some(draft));
    }

    fn close(&self) {
        self.draft.set(None);
    }
}

/// Blocking browser alert
pub fn blocking_alert(message: &str) {
    if let Some(win) = web_sys::window() {
        let _ = win.alert_with_message(message);
    }
}
