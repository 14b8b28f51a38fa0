//! # dailyupdates
//!
//! Leptos + WASM single-page client for the DailyUpdates blog.
//!
//! This crate contains pages, components, application state, network types,
//! and the REST client for the remote blog backend. All persistence, auth, and
//! comment storage live behind that backend; this crate is routing, access
//! gating, page data loading, and form submission glue.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and mount the application.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = config::log_level(config::LOG_LEVEL);
    if console_log::init_with_level(level).is_err() {
        leptos::logging::warn!("console logger already initialised");
    }
    log::info!("dailyupdates starting (api base: {:?})", config::API_BASE_URL);
    leptos::mount::mount_to_body(app::App);
}
