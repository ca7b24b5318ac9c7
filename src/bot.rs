//! Canned assistant behavior for the simulated reply loop.
//!
//! A real integration would replace [`crate::components::chat_panel`]'s
//! timer with a request/response exchange against a chat backend; until
//! then the reply is derived deterministically from the submitted text.

#[cfg(test)]
#[path = "bot_test.rs"]
mod bot_test;

/// Greeting appended to the log before any user interaction.
pub const GREETING: &str = "Hello! How can I assist you today?";

/// Delay between a submission and its canned reply, in milliseconds.
pub const REPLY_DELAY_MS: u64 = 500;

/// Canned reply for a submitted message.
pub fn reply_to(text: &str) -> String {
    format!("I received your message: \"{text}\". How else can I help?")
}
