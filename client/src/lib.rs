//! # client
//!
//! Leptos + WASM frontend for the Huddle meeting chat.
//!
//! This crate contains pages, components, application state, and the HTTP
//! sync layer. All authoritative state (membership, messages) lives in the
//! meeting service; the client holds only the current session in memory and
//! keeps its snapshots fresh by polling while a membership is active.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point invoked by the browser after the SSR shell loads.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
