//! Title banner.

use leptos::prelude::*;

use crate::ui::components::CodeIcon;

/// Product name shown in the banner.
pub const APP_TITLE: &str = "ink!jet";

/// Static page banner.
#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header id="app-header" class="header-banner">
            <div class="header-inner">
                <CodeIcon class="icon-accent" />
                <h1 class="header-title">{APP_TITLE}</h1>
            </div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_fixed_title() {
        let html = view! { <Header /> }.to_html();
        assert!(html.contains("ink!jet"));
        assert!(html.contains(r#"id="app-header""#));
    }

    #[test]
    fn output_never_varies() {
        let first = view! { <Header /> }.to_html();
        let second = view! { <Header /> }.to_html();
        assert_eq!(first, second);
    }
}
