//! Native select component.

use leptos::prelude::*;

/// Dropdown rendered as a native `<select>`.
///
/// Options are plain labels; the first one is selected by the browser.
#[component]
pub fn Select(
    /// Element id, also used by an associated `<label for=...>`.
    #[prop(default = "")]
    id: &'static str,
    /// Form field name.
    #[prop(default = "")]
    name: &'static str,
    /// Option labels, in display order.
    options: &'static [&'static str],
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let classes = format!("select {}", class);

    view! {
        <select id=id name=name class=classes>
            {options
                .iter()
                .map(|label| view! { <option>{*label}</option> })
                .collect_view()}
        </select>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OPTIONS: &[&str] = &["One", "Two"];

    #[test]
    fn renders_options_in_order() {
        let html = view! { <Select id="pick" options=OPTIONS /> }.to_html();
        let one = html.find("One").unwrap();
        let two = html.find("Two").unwrap();
        assert!(one < two);
        assert_eq!(html.matches("<option").count(), 2);
    }
}
