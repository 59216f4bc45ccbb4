//! # frontiers-client
//!
//! Leptos + WASM frontend for the course-management dashboard.
//!
//! This crate contains the route table, role-gated pages, reusable tables
//! and forms, the current-user state model, and the thin HTTP layer that
//! talks to the backend through the server's `/api` proxy.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(test)]
pub mod fixtures;

/// Browser entry point called by the generated wasm bootstrap.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
