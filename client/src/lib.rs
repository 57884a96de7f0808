//! # client
//!
//! Leptos CSR frontend for RetinaScan: landing page, auth pages, and the
//! guarded retina scan page.
//!
//! Testable behavior lives in the `retina` crate; this crate owns views,
//! reactive state, and browser adapters. Browser-only code sits behind the
//! `csr` feature so the pure helpers build and test natively.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and the panic hook, then mount.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    let _ = console_log::init_with_level(level);
    leptos::mount::mount_to_body(app::App);
}
