//! Input component for text fields.

use leptos::prelude::*;

/// Uncontrolled text input.
///
/// The server never reads the value back; whatever the user types stays in
/// the browser.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Input id="text-input" placeholder="Enter your message" />
/// }
/// ```
#[component]
pub fn Input(
    /// Placeholder text.
    #[prop(default = "")]
    placeholder: &'static str,
    /// Input ID attribute.
    #[prop(default = "")]
    id: &'static str,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Autocomplete attribute.
    #[prop(default = "off")]
    autocomplete: &'static str,
) -> impl IntoView {
    let classes = format!("input {}", class);

    view! {
        <input
            type="text"
            class=classes
            placeholder=placeholder
            id=id
            autocomplete=autocomplete
        />
    }
}
