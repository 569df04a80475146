//! # client
//!
//! Leptos + WASM frontend for browsing blog posts, users, and tags.
//!
//! This crate contains pages, components, session state, the REST service
//! layer, and the static route table. It is rendered on the server for first
//! paint (`ssr`) and hydrated in the browser (`hydrate`), where all API calls
//! happen.

pub mod app;
pub mod components;
pub mod config;
pub mod hooks;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
