//! # sentiment-ui
//!
//! Leptos + WASM frontend for the Roblox review sentiment analyzer.
//! Collects a free-text review, submits it to the prediction backend over
//! HTTP, and renders the returned classification or an error.
//!
//! This crate contains the page, components, form and analysis state, the
//! REST helpers, and the browser DOM utilities. The backend itself is an
//! external service reachable on the same origin.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
