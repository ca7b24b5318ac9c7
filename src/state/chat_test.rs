use super::*;

// =============================================================
// ChatState defaults
// =============================================================

#[test]
fn chat_state_default_empty_messages() {
    let state = ChatState::default();
    assert!(state.messages.is_empty());
}

// =============================================================
// push
// =============================================================

#[test]
fn push_appends_in_insertion_order() {
    let mut state = ChatState::default();
    state.push(Sender::Bot, "greeting");
    state.push(Sender::User, "question");
    state.push(Sender::Bot, "answer");

    let senders: Vec<Sender> = state.messages.iter().map(|m| m.sender).collect();
    assert_eq!(senders, vec![Sender::Bot, Sender::User, Sender::Bot]);
    assert_eq!(state.messages[1].text, "question");
}

#[test]
fn push_appends_one_message_per_call() {
    let mut state = ChatState::default();
    for n in 0..5 {
        state.push(Sender::User, format!("msg {n}"));
        assert_eq!(state.messages.len(), n + 1);
    }
}

#[test]
fn push_assigns_distinct_ids() {
    let mut state = ChatState::default();
    state.push(Sender::Bot, "one");
    state.push(Sender::Bot, "two");
    assert_ne!(state.messages[0].id, state.messages[1].id);
}

// =============================================================
// submit
// =============================================================

#[test]
fn submit_trims_surrounding_whitespace() {
    let mut state = ChatState::default();
    let text = state.submit("  hello  ").expect("message appended");

    assert_eq!(text, "hello");
    assert_eq!(state.messages.len(), 1);
    assert_eq!(state.messages[0].sender, Sender::User);
    assert_eq!(state.messages[0].text, "hello");
}

#[test]
fn submit_rejects_whitespace_only_input() {
    let mut state = ChatState::default();
    assert!(state.submit("").is_none());
    assert!(state.submit("   ").is_none());
    assert!(state.submit("\t\n").is_none());
    assert!(state.messages.is_empty());
}

#[test]
fn submit_preserves_interior_whitespace() {
    let mut state = ChatState::default();
    let text = state.submit(" two  words ").expect("message appended");
    assert_eq!(text, "two  words");
}

// =============================================================
// Round-trip ordering
// =============================================================

#[test]
fn rapid_submissions_interleave_in_submission_order() {
    // Two submissions land before either reply: [user:a, user:b,
    // bot:reply(a), bot:reply(b)], since equal delays fire FIFO.
    let mut state = ChatState::default();
    let a = state.submit("a").expect("appended");
    let b = state.submit("b").expect("appended");
    state.push(Sender::Bot, crate::bot::reply_to(&a));
    state.push(Sender::Bot, crate::bot::reply_to(&b));

    let texts: Vec<&str> = state.messages.iter().map(|m| m.text.as_str()).collect();
    assert_eq!(
        texts,
        vec![
            "a",
            "b",
            "I received your message: \"a\". How else can I help?",
            "I received your message: \"b\". How else can I help?",
        ]
    );
}
