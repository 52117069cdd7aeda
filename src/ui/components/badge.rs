//! Badge component for short labels.

use leptos::prelude::*;

/// Outlined pill label.
///
/// # Example
///
/// ```rust,ignore
/// view! { <Badge>"rust"</Badge> }
/// ```
#[component]
pub fn Badge(
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Badge content.
    children: Children,
) -> impl IntoView {
    let classes = format!("badge {}", class);

    view! {
        <span class=classes>
            {children()}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_its_label() {
        let html = view! { <Badge>"rust"</Badge> }.to_html();
        assert!(html.contains("rust"));
        assert!(html.contains(r#"class="badge "#));
    }
}
