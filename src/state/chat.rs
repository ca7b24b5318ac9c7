#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

/// Attribution for a single chat turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    /// CSS class modifier used when rendering a message from this sender.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Bot => "bot",
        }
    }
}

/// A single chat turn. Immutable once appended.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub sender: Sender,
    pub text: String,
}

/// Append-only message log for the chat panel.
///
/// Insertion order is display order; nothing is mutated or removed for the
/// lifetime of the page view.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
}

impl ChatState {
    /// Append a message to the log.
    pub fn push(&mut self, sender: Sender, text: impl Into<String>) {
        self.messages.push(ChatMessage {
            id: uuid::Uuid::new_v4().to_string(),
            sender,
            text: text.into(),
        });
    }

    /// Trim and append a user submission.
    ///
    /// Whitespace-only input appends nothing and returns `None`. Otherwise
    /// the trimmed text is appended as a user message and returned so the
    /// caller can schedule the reply.
    pub fn submit(&mut self, raw: &str) -> Option<String> {
        let text = raw.trim();
        if text.is_empty() {
            return None;
        }

        self.push(Sender::User, text);
        Some(text.to_owned())
    }
}
