//! Code editor pane: widget abstraction, configuration and lifecycle hooks.
//!
//! The actual editing surface is a client-side widget. This module keeps the
//! server's view of it small:
//!
//! - [`EditorOptions`]: how the widget is configured when the page renders
//! - [`EditorWidget`]: the capability set any editing surface must offer
//! - [`TextBuffer`]: headless in-memory widget used outside the browser
//! - [`EditorHooks`]: the pane's lifecycle handlers (log-only for now)
//! - [`EditorEvent`]: lifecycle notifications forwarded by the browser widget

mod buffer;
mod hooks;
mod options;
mod widget;

pub use buffer::TextBuffer;
pub use hooks::{ANALYZE_MESSAGE, EditorEvent, EditorHooks};
pub use options::{CursorBlinking, CursorStyle, EditorOptions};
pub use widget::{
    ChangeCallback, Diagnostic, EditorWidget, Handle, MountCallback, Severity, ValidateCallback,
};
