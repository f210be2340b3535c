//! Triade - storefront landing page
//!
//! Server-rendered landing page for the Triade supplement store, built with
//! Leptos and hydrated in the browser, where a small motion engine drives
//! the hero entrance and the scroll reveals.

#![recursion_limit = "4096"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
