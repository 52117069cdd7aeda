//! Chat history panel.

use leptos::prelude::*;

use crate::chat::{ChatMessage, default_messages};
use crate::ui::components::{
    Card, CardContent, CardHeader, ChatIcon, Input, ScrollArea, Separator,
};

use super::ChatEntry;

/// Message list plus an uncontrolled text input.
///
/// `messages` is rendered once, in order. Nothing in the panel can add to it.
#[component]
pub fn ChatHistory(
    /// Entries to display.
    #[prop(default = default_messages())]
    messages: Vec<ChatMessage>,
) -> impl IntoView {
    view! {
        <Card id="chat-history" label="Chat history" class="chat-container">
            <CardHeader>
                <div class="panel-title">
                    <ChatIcon class="icon-accent" />
                    <h2 class="chat-history-title">"Chat History"</h2>
                </div>
            </CardHeader>

            <CardContent class="chat-body">
                <ScrollArea id="chat-messages" class="chat-history">
                    {messages
                        .into_iter()
                        .map(|message| view! { <ChatEntry message=message /> })
                        .collect_view()}
                </ScrollArea>

                <Separator />

                // Sampling controls (temperature, top-k) will live here
                <div class="chat-inputs"></div>

                <div class="text-input-container">
                    <label for="text-input" class="input-label">
                        "Text Input:"
                    </label>
                    <Input id="text-input" placeholder="Enter your message" class="text-input" />
                </div>
            </CardContent>
        </Card>
    }
}
