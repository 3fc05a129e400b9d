//! # client
//!
//! Leptos + WASM frontend for the Precision Strength Lab marketing site.
//!
//! The whole site is one route. A navigation bar switches between six static
//! content panels by writing the current [`state::page::Page`] into a shared
//! signal; nothing is fetched and nothing is persisted.

pub mod app;
pub mod components;
pub mod content;
pub mod pages;
pub mod state;

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
