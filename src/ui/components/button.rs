//! Button component.

use leptos::prelude::*;

/// Primary action button.
///
/// When `post_url` is set, `static/app.js` sends an empty POST to that URL
/// on click and ignores the response, so the page never changes.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Button id="analyze-button" post_url="/api/analyze">
///         "Analyze"
///     </Button>
/// }
/// ```
#[component]
pub fn Button(
    /// Element id.
    #[prop(optional)]
    id: Option<&'static str>,
    /// URL to POST to on click.
    #[prop(optional)]
    post_url: Option<&'static str>,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Button content.
    children: Children,
) -> impl IntoView {
    let classes = format!("btn btn-primary {}", class);

    view! {
        <button type="button" id=id class=classes data-post-url=post_url>
            {children()}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_button_posts_nowhere() {
        let html = view! { <Button>"Save"</Button> }.to_html();
        assert!(html.contains("Save"));
        assert!(html.contains(r#"type="button""#));
        assert!(!html.contains("data-post-url"));
    }

    #[test]
    fn post_url_is_exposed_to_the_click_binding() {
        let html = view! { <Button post_url="/api/analyze">"Go"</Button> }.to_html();
        assert!(html.contains(r#"data-post-url="/api/analyze""#));
    }
}
