//! Scrollable area component.

use leptos::prelude::*;

/// Scrollable container with thin scrollbars.
#[component]
pub fn ScrollArea(
    /// Element id.
    #[prop(optional)]
    id: Option<&'static str>,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Scrollable content.
    children: Children,
) -> impl IntoView {
    let classes = format!("scroll-area {}", class);

    view! {
        <div id=id class=classes>
            {children()}
        </div>
    }
}
