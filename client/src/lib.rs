//! # client
//!
//! Leptos + WASM admin front-end for the Atelier content site: sign-in,
//! dashboard with upload dialogs, and the content management tables.
//!
//! The crate builds for the browser with `hydrate` and for server rendering
//! with `ssr`. Pure state lives in `state` and `util` so it can be tested
//! natively without either feature.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already installed: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
