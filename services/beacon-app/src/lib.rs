//! Beacon Dashboard - Leptos frontend
//!
//! Client-side card grid with live search and keyboard shortcuts, driven by
//! the same pipeline the server renders with.

pub mod api;
pub mod app;
pub mod components;
pub mod grid;
pub mod host;

pub use app::App;

/// Entry point for the WASM client
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    leptos::mount::mount_to_body(App);
}
