//! # tabshell
//!
//! Leptos + WASM workspace shell that hosts several views at once as tabs.
//!
//! The open-tab list and the active tab live in a persisted `TabStore`. Each
//! tab's path is resolved to a view by an ordered pattern table, and every
//! open tab keeps its view mounted so switching tabs never loses state.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod routing;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger not installed: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
