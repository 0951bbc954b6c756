//! # cylinder-console
//!
//! Leptos + WASM administration console for a gas-cylinder inventory and
//! delivery business. The console is a thin presentation layer over a remote
//! REST API: inventory, dispatch, goods-receipt approval, reporting and
//! master data all live server-side.
//!
//! This crate contains pages, components, client-side state, the HTTP
//! envelope client, and the three-step delivery wizard. Browser glue is gated
//! behind the `csr` feature so the logic compiles and tests natively.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs logging and mounts the root component.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("cylinder console starting against {}", config::api_base_url());
    leptos::mount::mount_to_body(app::App);
}
