//! # portfolio
//!
//! Leptos + WASM client for a single-page personal portfolio site: theme
//! toggling, smooth-scroll navigation, scroll-triggered reveals, animated
//! stat counters, a contact form, transient notifications, a five-star
//! rating widget, and pointer-driven visual effects.
//!
//! All browser glue is gated behind the `csr` feature so the state models
//! and math underneath stay testable with a plain native `cargo test`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point invoked by the WASM loader.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
