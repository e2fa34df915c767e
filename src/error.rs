//! Editor Errors
//!
//! The `Display` text of each variant is what the user sees.

use thiserror::Error;

use crate::models::ItemId;

#[derive(Debug, Error)]
pub enum EditorError {
    /// Add form submitted with a blank name (shown inline)
    #[error("Item name cannot be empty")]
    EmptyName,
    /// Edit dialog saved with a blank name (shown as a blocking alert)
    #[error("Item name cannot be empty. Item not updated.")]
    EmptyEdit,
    #[error("Item #{0} no longer exists")]
    ItemNotFound(ItemId),
    #[error("Invalid editor config: {0}")]
    Config(#[from] serde_json::Error),
}

pub type EditorResult<T> = Result<T, EditorError>;
