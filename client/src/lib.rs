//! # client
//!
//! Leptos + WASM front end for the board form: preset dimension selector,
//! inactivity session monitor, and light/dark theme toggle.
//!
//! Behavior lives in the `widgets` crate. This crate renders it and wires
//! it to the browser; web-sys, timers, and listeners exist only under the
//! `hydrate` feature, and every browser helper is a callable no-op
//! otherwise so SSR and native tests stay deterministic.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point called by the hydration script.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
