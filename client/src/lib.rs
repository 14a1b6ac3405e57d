//! # tandir-ui
//!
//! Leptos frontend for the tandir storefront. Rendered on the server by
//! `tandir-server` and hydrated in the browser.
//!
//! The crate splits into pure state machines (`state`, `util::viewport`
//! types, `net::types`) that test natively, and components that wire those
//! machines to browser events behind the `hydrate` feature. `net::types` is
//! also the lead wire format the server deserializes.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs browser logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("console logger unavailable: {err}").into());
    }
    leptos::mount::hydrate_body(app::App);
}
