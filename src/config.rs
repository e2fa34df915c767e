//! Editor Configuration
//!
//! Optional JSON block in the host page:
//! `<script type="application/json" id="list-editor-config">{ ... }</script>`.
//! Missing fields fall back to defaults.

use serde::Deserialize;

use crate::error::EditorResult;

/// Id of the `<script>` element holding the config JSON
pub const CONFIG_ELEMENT_ID: &str = "list-editor-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Page heading
    pub title: String,
    /// Placeholder of the add input
    pub placeholder: String,
    /// `KeyboardEvent.key` that toggles the grabbed state of a drag handle
    pub grab_key: String,
    pub handle_glyph: String,
    pub log_level: String,
    pub log_capacity: usize,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            title: "Item List".to_string(),
            placeholder: "Enter item name".to_string(),
            grab_key: " ".to_string(),
            handle_glyph: "\u{2630}".to_string(),
            log_level: "debug".to_string(),
            log_capacity: rolling_logger::DEFAULT_CAPACITY,
        }
    }
}

pub fn parse_config(json: &str) -> EditorResult<EditorConfig> {
    Ok(serde_json::from_str(json)?)
}

/// Read the config block from the document. No block means defaults.
pub fn load_config() -> EditorResult<EditorConfig> {
    let text = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());

    match text {
        Some(json) if !json.trim().is_empty() => parse_config(&json),
        _ => Ok(EditorConfig::default()),
    }
}
