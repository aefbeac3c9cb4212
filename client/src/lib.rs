//! # client
//!
//! Leptos + WASM frontend for the star map. Fetches the planet and marker
//! fixtures, hosts the pannable scene with its tooltip, detail modal and
//! debug overlay, and forwards DOM events to `atlas::session::ViewportSession`.
//!
//! The `csr` feature carries everything that only makes sense in a browser;
//! without it the crate still builds natively so its state and helpers can be
//! unit tested.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and mount the app on `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("console logger unavailable: {e}").into());
    }
    leptos::mount::mount_to_body(app::App);
}
