//! Separator component for visual division.

use leptos::prelude::*;

/// Horizontal rule between panel sections.
#[component]
pub fn Separator(
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let classes = format!("separator {}", class);

    view! {
        <div role="separator" aria-orientation="horizontal" class=classes />
    }
}
