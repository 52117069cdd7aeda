//! Capability interface for embeddable code editing surfaces.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Opaque reference to a widget-side object (an editor instance or the
/// library hosting it).
///
/// The pane never inspects handles; it only logs them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Handle(Value);

impl Handle {
    pub fn new(value: impl Into<Value>) -> Self {
        Self(value.into())
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Marker severity, using the numeric codes editor widgets report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Severity {
    Hint = 1,
    Info = 2,
    Warning = 4,
    Error = 8,
}

impl TryFrom<u8> for Severity {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, String> {
        match code {
            1 => Ok(Severity::Hint),
            2 => Ok(Severity::Info),
            4 => Ok(Severity::Warning),
            8 => Ok(Severity::Error),
            other => Err(format!("unknown marker severity: {other}")),
        }
    }
}

impl From<Severity> for u8 {
    fn from(severity: Severity) -> Self {
        severity as u8
    }
}

/// A static diagnostic reported by the widget's own validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    pub start_line_number: u32,
    pub start_column: u32,
    pub end_line_number: u32,
    pub end_column: u32,
}

/// Called with the full text after every edit.
pub type ChangeCallback = Box<dyn Fn(&str) + Send + Sync>;
/// Called once when the widget is ready, with the editor and host handles.
pub type MountCallback = Box<dyn Fn(&Handle, &Handle) + Send + Sync>;
/// Called whenever the widget publishes a fresh set of diagnostics.
pub type ValidateCallback = Box<dyn Fn(&[Diagnostic]) + Send + Sync>;

/// What the code editor pane needs from an editing surface.
///
/// Any component offering these operations can stand in for the browser
/// widget; [`TextBuffer`](super::TextBuffer) is the in-process one.
pub trait EditorWidget: Send + Sync + fmt::Debug {
    /// Current text.
    fn content(&self) -> String;

    /// Replace the text, notifying change listeners.
    fn set_content(&mut self, text: &str);

    fn on_change(&mut self, callback: ChangeCallback);

    fn on_mount(&mut self, callback: MountCallback);

    fn on_validate(&mut self, callback: ValidateCallback);
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn diagnostic_reads_widget_marker_shape() {
        let marker = json!({
            "severity": 8,
            "message": "expected `;`",
            "startLineNumber": 3,
            "startColumn": 5,
            "endLineNumber": 3,
            "endColumn": 9
        });
        let diagnostic: Diagnostic = serde_json::from_value(marker).unwrap();
        assert_eq!(diagnostic.severity, Severity::Error);
        assert_eq!(diagnostic.start_line_number, 3);
        assert_eq!(diagnostic.end_column, 9);
    }

    #[test]
    fn unknown_severity_is_rejected() {
        let result: Result<Severity, _> = serde_json::from_value(json!(3));
        assert!(result.is_err());
    }

    #[test]
    fn handle_displays_its_json() {
        let handle = Handle::new(json!({"id": "editor-1"}));
        assert_eq!(handle.to_string(), r#"{"id":"editor-1"}"#);
    }
}
