//! Input Validation

use crate::error::{EditorError, EditorResult};

/// Trim `input` and reject it if nothing is left
pub fn validate_name(input: &str) -> EditorResult<String> {
    let name = input.trim();
    if name.is_empty() {
        return Err(EditorError::EmptyName);
    }
    Ok(name.to_string())
}
