//! # client
//!
//! Leptos + WASM frontend for the Open Mind anonymous support chat.
//!
//! This crate contains the landing, student, and volunteer pages, their
//! components, page-local UI state, and the browser glue that backs the
//! shared `chatlog` with `localStorage` and the `storage` event. All business
//! rules live in `chatlog`; pages only mirror view state into signals.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install panic/log hooks and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
