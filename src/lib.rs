//! # chatdesk
//!
//! Leptos + WASM browser client for the project/chat platform.
//!
//! The crate talks to the platform's REST backend: it signs users in, lists
//! and creates projects, relays chat messages, and manages per-project
//! prompts and uploaded files. Handler logic lives in `state` and runs over
//! the `net::transport::Transport` seam, so it builds and tests natively;
//! only the `csr` feature pulls in the browser bindings.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(test)]
mod testing;

/// WASM entry point: installs browser logging and mounts the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
