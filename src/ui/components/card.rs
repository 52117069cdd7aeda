//! Card panel with header, content, and footer sections.

use leptos::prelude::*;

/// Card panel, rendered as a `<section>` landmark.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Card id="code-editor" label="Code editor">
///         <CardHeader>
///             <h2>"Smart Contract Code"</h2>
///         </CardHeader>
///         <CardContent>
///             <code-editor />
///         </CardContent>
///         <CardFooter>
///             <Button>"Analyze"</Button>
///         </CardFooter>
///     </Card>
/// }
/// ```
#[component]
pub fn Card(
    /// Element id.
    #[prop(optional)]
    id: Option<&'static str>,
    /// Accessible name of the section.
    #[prop(optional)]
    label: Option<&'static str>,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Card content.
    children: Children,
) -> impl IntoView {
    let classes = format!("card {}", class);

    view! {
        <section id=id aria-label=label class=classes>
            {children()}
        </section>
    }
}

/// Card header section.
#[component]
pub fn CardHeader(
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Header content.
    children: Children,
) -> impl IntoView {
    let classes = format!("card-header {}", class);

    view! {
        <div class=classes>
            {children()}
        </div>
    }
}

/// Card content section.
#[component]
pub fn CardContent(
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Content.
    children: Children,
) -> impl IntoView {
    let classes = format!("card-content {}", class);

    view! {
        <div class=classes>
            {children()}
        </div>
    }
}

/// Card footer section.
#[component]
pub fn CardFooter(
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Footer content.
    children: Children,
) -> impl IntoView {
    let classes = format!("card-footer {}", class);

    view! {
        <div class=classes>
            {children()}
        </div>
    }
}
