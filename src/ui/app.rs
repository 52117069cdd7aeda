//! Page root and HTML shell.

use leptos::prelude::*;

use crate::chat::{ChatMessage, default_messages};
use crate::config::{AppConfig, DEFAULT_MONACO_BASE_URL};
use crate::editor::EditorOptions;
use crate::ui::chat::ChatHistory;
use crate::ui::editor::CodeEditor;
use crate::ui::header::{APP_TITLE, Header};
use crate::ui::terminal::TerminalPanel;

/// Main application component.
///
/// Header on top; editor and the reserved terminal on the left; chat on the
/// right. Children share nothing.
#[component]
pub fn App(
    /// Editor widget configuration.
    #[prop(default = EditorOptions::default())]
    editor: EditorOptions,
    /// Base URL of Monaco's `vs` directory.
    #[prop(default = DEFAULT_MONACO_BASE_URL.to_string())]
    loader_base: String,
    /// Initial chat history.
    #[prop(default = default_messages())]
    messages: Vec<ChatMessage>,
) -> impl IntoView {
    view! {
        <div id="app-shell" class="application-background">
            <Header />
            <main id="app" class="workspace">
                <div class="workspace-editor">
                    <CodeEditor options=editor loader_base=loader_base />
                    <TerminalPanel />
                </div>
                <ChatHistory messages=messages />
            </main>
        </div>
    }
}

/// Render the full HTML document for the configured page.
pub fn render_page(config: &AppConfig) -> String {
    let editor = config.editor.clone();
    let loader_base = config.monaco.base_url.clone();
    let messages = config.chat.messages.clone();
    let body = view! { <App editor=editor loader_base=loader_base messages=messages /> }.to_html();
    html_shell(APP_TITLE, &body)
}

/// Wrap rendered body markup in the document head and scripts.
fn html_shell(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <meta name="description" content="Smart contract editor">
    <title>{title}</title>

    <!-- Click bindings and the editor web component -->
    <script type="module" src="/static/app.js"></script>
    <script type="module" src="/static/code-editor.js"></script>
    <link rel="stylesheet" href="/static/app.css">
</head>
<body>
{body}
</body>
</html>"#
    )
}
