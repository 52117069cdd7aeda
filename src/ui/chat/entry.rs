//! A single chat bubble.

use leptos::prelude::*;

use crate::chat::ChatMessage;

/// Chat bubble styled by the author's role.
#[component]
pub fn ChatEntry(message: ChatMessage) -> impl IntoView {
    let role = message.role;
    let classes = format!("chat-message {}", role.css_class());

    view! {
        <div class=classes data-role=role.css_class()>
            {message.content}
        </div>
    }
}
