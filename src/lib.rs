//! # ocrweb
//!
//! Leptos + WASM frontend for the OCR Service backend. Users sign in with
//! SSO credentials, then use authenticated pages to inspect OCR providers
//! and check task status/results.
//!
//! This crate contains pages, components, application state, network types,
//! and the route access gate (`guard`) that decides on every client-side
//! navigation whether a session token must be present.

pub mod app;
pub mod components;
pub mod guard;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: wires up logging and hydrates the app shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
