//! Chat panel displaying the message log and sending new messages.

use leptos::prelude::*;

use crate::bot;
use crate::state::chat::{ChatState, Sender};

/// Chat panel showing the message log and an input row for new messages.
///
/// Each submission appends the user's message immediately, clears the
/// input, and schedules a canned assistant reply after a fixed delay.
#[component]
pub fn ChatPanel() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();

    let input = RwSignal::new(String::new());
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    // Seed the greeting once per page view. The guard keeps a remount
    // against a still-populated context from repeating it.
    chat.update(|c| {
        if c.messages.is_empty() {
            c.push(Sender::Bot, bot::GREETING);
        }
    });

    // Keep the newest message visible whenever the log grows.
    Effect::new(move || {
        let _ = chat.get().messages.len();

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let do_send = move || {
        let raw = input.get();
        let mut submitted = None;
        chat.update(|c| submitted = c.submit(&raw));

        // Whitespace-only input: no message, no timer, input untouched.
        let Some(text) = submitted else {
            return;
        };

        input.set(String::new());
        schedule_reply(chat, text);
    };

    let on_click = move |_| do_send();

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    let can_send = move || !input.get().trim().is_empty();

    view! {
        <div class="chat-panel">
            <div class="chat-panel__messages" node_ref=messages_ref>
                {move || {
                    chat.get()
                        .messages
                        .iter()
                        .map(|msg| {
                            let class = format!(
                                "chat-panel__message chat-panel__message--{}",
                                msg.sender.css_class(),
                            );
                            let text = msg.text.clone();
                            view! { <div class=class>{text}</div> }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>

            <div class="chat-panel__input-row">
                <input
                    class="chat-panel__input"
                    type="text"
                    placeholder="Type your message..."
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
                <button
                    class="chat-panel__send"
                    on:click=on_click
                    disabled=move || !can_send()
                >
                    "Send"
                </button>
            </div>
        </div>
    }
}

/// Schedule the canned assistant reply for `text` after the fixed delay.
///
/// Fire-and-forget: each submission owns an independent timer, and equal
/// delays on the single browser queue land replies in submission order.
/// Requires a browser environment.
fn schedule_reply(chat: RwSignal<ChatState>, text: String) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let delay = std::time::Duration::from_millis(bot::REPLY_DELAY_MS);
            gloo_timers::future::sleep(delay).await;
            chat.update(|c| c.push(Sender::Bot, bot::reply_to(&text)));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (chat, text);
    }
}
