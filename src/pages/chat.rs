//! Chat page hosting the chat panel.

use leptos::prelude::*;

use crate::components::chat_panel::ChatPanel;

/// Chat page — a header above the full-height chat panel.
#[component]
pub fn ChatPage() -> impl IntoView {
    view! {
        <main class="chat-page">
            <header class="chat-page__header">
                <h1>"Chatbox"</h1>
                <p>"Ask anything, get an answer in half a second"</p>
            </header>
            <ChatPanel/>
        </main>
    }
}
