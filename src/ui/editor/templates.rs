//! Template picker.

use leptos::prelude::*;

use crate::ui::components::Select;

/// Placeholder template names. Selecting one does nothing yet.
pub const TEMPLATE_OPTIONS: &[&str] = &["Template 1", "Template 2", "Template 3"];

#[component]
pub fn TemplateSelector() -> impl IntoView {
    view! {
        <div class="editor-templates">
            <label for="templates" class="templates-label">
                "Templates:"
            </label>
            <Select id="templates" name="template" class="templates-select" options=TEMPLATE_OPTIONS />
        </div>
    }
}
