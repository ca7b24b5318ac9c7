use super::*;

// =============================================================
// reply_to
// =============================================================

#[test]
fn reply_quotes_the_submitted_text() {
    assert_eq!(
        reply_to("hello"),
        "I received your message: \"hello\". How else can I help?"
    );
}

#[test]
fn reply_embeds_text_verbatim() {
    let reply = reply_to("two  spaces & <markup>");
    assert!(reply.contains("\"two  spaces & <markup>\""));
}

// =============================================================
// Constants
// =============================================================

#[test]
fn greeting_is_the_fixed_opener() {
    assert_eq!(GREETING, "Hello! How can I assist you today?");
}

#[test]
fn reply_delay_is_half_a_second() {
    assert_eq!(REPLY_DELAY_MS, 500);
}
