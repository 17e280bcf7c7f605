//! # client
//!
//! Leptos + WASM frontend for the portfolio panel gallery.
//!
//! This crate owns the page: the panel grid, the panel modal, the contact
//! card and the toast. All viewer logic lives in the `gallery` crate; the
//! components here hold its state in reactive signals, render the
//! projection it produces, and wire browser events and capabilities
//! (clipboard, selection copy, timers, image preload) back into it.

pub mod app;
pub mod components;
pub mod state;
pub mod util;

/// WASM entrypoint: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("console logger unavailable: {e}").into());
    }
    leptos::mount::hydrate_body(app::App);
}
