//! Lifecycle handlers of the code editor pane.

use serde::{Deserialize, Serialize};
use tracing::info;

use super::widget::{Diagnostic, EditorWidget, Handle};

/// Logged when the Analyze action fires.
pub const ANALYZE_MESSAGE: &str = "Analyze button clicked";

/// A lifecycle notification from the browser editor widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EditorEvent {
    /// The widget library loaded but no editor exists yet.
    BeforeMount { host: Handle },
    /// The editor instance is ready.
    Mount { editor: Handle, host: Handle },
    /// The text changed. Widgets may report `null` for an empty model.
    Change {
        #[serde(default)]
        value: Option<String>,
    },
    /// The widget finished its own validation pass.
    Validate {
        #[serde(default)]
        markers: Vec<Diagnostic>,
    },
}

/// Handlers the code editor pane installs on its widget.
///
/// None of them touch editor state or rendered output: they log and return.
#[derive(Debug, Clone, Copy, Default)]
pub struct EditorHooks;

impl EditorHooks {
    pub fn new() -> Self {
        Self
    }

    pub fn content_changed(self, value: &str) {
        info!(
            name: "editor.content.changed",
            content = %value,
            "Editor content changed"
        );
    }

    pub fn before_mount(self, host: &Handle) {
        info!(name: "editor.before_mount", host = %host, "Editor about to mount");
    }

    pub fn mounted(self, editor: &Handle, host: &Handle) {
        info!(
            name: "editor.mounted",
            editor = %editor,
            host = %host,
            "Editor mounted"
        );
    }

    /// Diagnostics from the widget are accepted and dropped.
    pub fn validated(self, diagnostics: &[Diagnostic]) {
        let _ = diagnostics;
    }

    /// Analyze action. Not connected to the editor content.
    pub fn analyze(self) {
        info!(name: "editor.analyze", "{}", ANALYZE_MESSAGE);
    }

    /// Route a forwarded browser event to its handler.
    pub fn dispatch(self, event: &EditorEvent) {
        match event {
            EditorEvent::BeforeMount { host } => self.before_mount(host),
            EditorEvent::Mount { editor, host } => self.mounted(editor, host),
            EditorEvent::Change { value } => self.content_changed(value.as_deref().unwrap_or("")),
            EditorEvent::Validate { markers } => self.validated(markers),
        }
    }

    /// Install the change, mount and validate handlers on an in-process widget.
    pub fn attach(self, widget: &mut dyn EditorWidget) {
        widget.on_change(Box::new(move |text: &str| self.content_changed(text)));
        widget.on_mount(Box::new(move |editor: &Handle, host: &Handle| {
            self.mounted(editor, host);
        }));
        widget.on_validate(Box::new(move |diagnostics: &[Diagnostic]| {
            self.validated(diagnostics);
        }));
    }
}
