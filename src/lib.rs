//! # chatbox
//!
//! Leptos + WASM chat widget with a simulated assistant.
//!
//! The widget renders a message log, a text input, and a send button. Each
//! submission appends the user's message immediately and schedules a canned
//! assistant reply after a fixed delay, a stand-in for a real backend round
//! trip. The log is append-only and lives for the page view.
//!
//! Compiled three ways from the same source: the `hydrate` feature builds
//! the browser WASM bundle, the `ssr` feature builds the axum server binary
//! that renders and serves it, and the bare `rlib` carries the natively
//! testable state logic.

pub mod app;
pub mod bot;
pub mod components;
pub mod pages;
pub mod state;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(App);
}
