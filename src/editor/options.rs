//! Editor widget configuration.

use serde::{Deserialize, Serialize};

/// Shape of the text cursor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CursorStyle {
    #[default]
    Line,
    Block,
    Underline,
    LineThin,
    BlockOutline,
    UnderlineThin,
}

/// Cursor blink animation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CursorBlinking {
    #[default]
    Blink,
    Smooth,
    Phase,
    Expand,
    Solid,
}

/// Options handed to the editor widget when it mounts.
///
/// Serialized in camelCase because the browser widget reads them verbatim
/// from the `data-options` attribute. Config files may use snake_case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EditorOptions {
    /// CSS height of the editing surface.
    pub height: String,
    /// Language tag used for syntax highlighting.
    #[serde(alias = "default_language")]
    pub default_language: String,
    /// Text shown before the user types anything.
    #[serde(alias = "default_value")]
    pub default_value: String,
    #[serde(alias = "cursor_style")]
    pub cursor_style: CursorStyle,
    #[serde(alias = "cursor_blinking")]
    pub cursor_blinking: CursorBlinking,
    /// Cursor width in pixels.
    #[serde(alias = "cursor_width")]
    pub cursor_width: u8,
    #[serde(alias = "cursor_smooth_caret_animation")]
    pub cursor_smooth_caret_animation: bool,
    /// Re-layout the widget when its container resizes.
    #[serde(alias = "automatic_layout")]
    pub automatic_layout: bool,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            height: "65vh".to_string(),
            default_language: "rust".to_string(),
            default_value: "// Example ink! smart contract code".to_string(),
            cursor_style: CursorStyle::Line,
            cursor_blinking: CursorBlinking::Blink,
            cursor_width: 2,
            cursor_smooth_caret_animation: true,
            automatic_layout: true,
        }
    }
}

impl EditorOptions {
    /// JSON form embedded in the rendered page.
    pub fn to_json(&self) -> String {
        // Only strings, enums, integers and bools: serialization cannot fail.
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}
