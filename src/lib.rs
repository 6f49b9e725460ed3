//! # notesum
//!
//! Leptos + WASM frontend for a notes service with AI-generated summaries.
//! The client renders login/signup/notes screens and delegates every
//! non-trivial computation (authentication, persistence, summarization) to
//! a remote HTTP API reached through `net::api`.
//!
//! This crate contains pages, components, application state, the wire
//! schema, and browser utility helpers. The serving half (static hosting
//! plus the notes API) is an external deployment concern.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
