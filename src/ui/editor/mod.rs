//! Code editor pane.
//!
//! Server-side the pane is static markup: a `<code-editor>` web component
//! configured from [`EditorOptions`], a template picker with no handler, and
//! an Analyze button. The web component loads Monaco from `loader-base` and
//! forwards its lifecycle events to `/api/editor/events`; Analyze posts to
//! `/api/analyze`. Both endpoints only log.

mod templates;

pub use templates::{TEMPLATE_OPTIONS, TemplateSelector};

use leptos::prelude::*;

use crate::config::DEFAULT_MONACO_BASE_URL;
use crate::editor::EditorOptions;
use crate::ui::components::{
    Badge, Button, Card, CardContent, CardFooter, CardHeader, PlayIcon,
};

/// Where the web component posts lifecycle events.
pub const EDITOR_EVENTS_URL: &str = "/api/editor/events";
/// Where the Analyze button posts.
pub const ANALYZE_URL: &str = "/api/analyze";

/// Editor pane with its footer controls.
#[component]
pub fn CodeEditor(
    /// Widget configuration.
    #[prop(default = EditorOptions::default())]
    options: EditorOptions,
    /// Base URL of Monaco's `vs` directory.
    #[prop(default = DEFAULT_MONACO_BASE_URL.to_string())]
    loader_base: String,
) -> impl IntoView {
    let options_json = options.to_json();
    let style = format!("height: {};", options.height);
    let language = options.default_language;
    let badge_language = language.clone();
    let initial_text = options.default_value;

    view! {
        <Card id="code-editor" label="Code editor" class="code-editor-container">
            <CardHeader>
                <h2 class="editor-title">"Smart Contract Code"</h2>
                <Badge>{badge_language}</Badge>
            </CardHeader>

            <CardContent class="editor-body">
                // Replaced by the Monaco instance once the loader resolves
                <code-editor
                    class="code-editor"
                    style=style
                    language=language
                    loader-base=loader_base
                    events-url=EDITOR_EVENTS_URL
                    data-options=options_json
                >
                    <pre class="editor-fallback">{initial_text}</pre>
                </code-editor>
            </CardContent>

            <CardFooter class="editor-footer">
                <TemplateSelector />
                <Button id="analyze-button" class="analyze-button" post_url=ANALYZE_URL>
                    <PlayIcon />
                    "Analyze"
                </Button>
            </CardFooter>
        </Card>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::{EditorHooks, EditorWidget, TextBuffer};

    #[test]
    fn embeds_widget_configuration() {
        let html = view! { <CodeEditor /> }.to_html();
        assert!(html.contains("<code-editor"));
        assert!(html.contains(r#"language="rust""#));
        assert!(html.contains("height: 65vh;"));
        assert!(html.contains("data-options="));
        assert!(html.contains("defaultLanguage"));
        assert!(html.contains("// Example ink! smart contract code"));
    }

    #[test]
    fn loader_base_defaults_to_monaco_cdn() {
        let html = view! { <CodeEditor /> }.to_html();
        assert!(html.contains(&format!(r#"loader-base="{DEFAULT_MONACO_BASE_URL}""#)));

        let html = view! { <CodeEditor loader_base="/static/vendor/monaco/vs".to_string() /> }
            .to_html();
        assert!(html.contains(r#"loader-base="/static/vendor/monaco/vs""#));
    }

    #[test]
    fn analyze_posts_through_the_click_binding() {
        let html = view! { <CodeEditor /> }.to_html();
        assert!(html.contains(r#"id="analyze-button""#));
        assert!(html.contains(r#"data-post-url="/api/analyze""#));
        assert!(html.contains("Analyze"));
    }

    #[test]
    fn custom_options_are_reflected() {
        let options = EditorOptions {
            height: "90vh".to_string(),
            default_language: "toml".to_string(),
            ..EditorOptions::default()
        };
        let html = view! { <CodeEditor options=options /> }.to_html();
        assert!(html.contains("height: 90vh;"));
        assert!(html.contains(r#"language="toml""#));
    }

    #[test]
    fn lifecycle_hooks_do_not_change_rendered_output() {
        let before = view! { <CodeEditor /> }.to_html();

        let hooks = EditorHooks::new();
        let mut buffer = TextBuffer::new(&EditorOptions::default());
        hooks.attach(&mut buffer);
        buffer.mount();
        for text in ["", "#[ink::contract]", "mod flipper {}\n"] {
            buffer.set_content(text);
            hooks.content_changed(text);
        }
        hooks.analyze();

        let after = view! { <CodeEditor /> }.to_html();
        assert_eq!(before, after);
    }
}
