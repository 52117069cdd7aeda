//! Reserved terminal region.

use leptos::prelude::*;

use crate::ui::components::TerminalIcon;

/// Placeholder panel below the editor. Nothing writes to it yet.
#[component]
pub fn TerminalPanel() -> impl IntoView {
    view! {
        <section
            id="terminal-panel"
            aria-label="Terminal"
            class="terminal-panel"
        >
            <div class="terminal-bar">
                <TerminalIcon />
                <span>"Terminal"</span>
            </div>
            <pre class="terminal-output"></pre>
        </section>
    }
}
