//! # storefront-client
//!
//! Leptos frontend for the storefront console. Hosts the admin provider table
//! and the client "prepared orders" history page.
//!
//! Both pages share one list lifecycle (`state::load`): load once per mount,
//! publish `Loading -> Loaded | Failed`, render through `ListContent`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs panic/console hooks and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    // Fails only when a logger is already installed.
    console_log::init_with_level(log::Level::Debug).ok();
    leptos::mount::hydrate_body(app::App);
}
