//! Headless editor widget.

use std::fmt;

use super::options::EditorOptions;
use super::widget::{
    ChangeCallback, Diagnostic, EditorWidget, Handle, MountCallback, ValidateCallback,
};

/// In-memory [`EditorWidget`].
///
/// Stands in for the browser widget in tests and non-browser hosts. It does
/// no validation of its own; diagnostics are pushed in with
/// [`TextBuffer::publish_diagnostics`].
pub struct TextBuffer {
    language: String,
    content: String,
    mounted: bool,
    change_listeners: Vec<ChangeCallback>,
    mount_listeners: Vec<MountCallback>,
    validate_listeners: Vec<ValidateCallback>,
}

impl fmt::Debug for TextBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextBuffer")
            .field("language", &self.language)
            .field("content_len", &self.content.len())
            .field("mounted", &self.mounted)
            .field("change_listeners", &self.change_listeners.len())
            .field("mount_listeners", &self.mount_listeners.len())
            .field("validate_listeners", &self.validate_listeners.len())
            .finish()
    }
}

impl TextBuffer {
    /// Create a buffer seeded with the configured language and initial text.
    pub fn new(options: &EditorOptions) -> Self {
        Self {
            language: options.default_language.clone(),
            content: options.default_value.clone(),
            mounted: false,
            change_listeners: Vec::new(),
            mount_listeners: Vec::new(),
            validate_listeners: Vec::new(),
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Fire mount listeners. Only the first call has any effect.
    ///
    /// Returns `true` if this call performed the mount.
    pub fn mount(&mut self) -> bool {
        if self.mounted {
            return false;
        }
        self.mounted = true;

        let editor = Handle::new(serde_json::json!({
            "widget": "text-buffer",
            "language": self.language,
        }));
        let host = Handle::new(serde_json::json!({ "host": "in-process" }));
        for listener in &self.mount_listeners {
            listener(&editor, &host);
        }
        true
    }

    /// Hand a set of diagnostics to validate listeners.
    pub fn publish_diagnostics(&self, diagnostics: &[Diagnostic]) {
        for listener in &self.validate_listeners {
            listener(diagnostics);
        }
    }
}

impl EditorWidget for TextBuffer {
    fn content(&self) -> String {
        self.content.clone()
    }

    fn set_content(&mut self, text: &str) {
        text.clone_into(&mut self.content);
        for listener in &self.change_listeners {
            listener(&self.content);
        }
    }

    fn on_change(&mut self, callback: ChangeCallback) {
        self.change_listeners.push(callback);
    }

    fn on_mount(&mut self, callback: MountCallback) {
        self.mount_listeners.push(callback);
    }

    fn on_validate(&mut self, callback: ValidateCallback) {
        self.validate_listeners.push(callback);
    }
}
