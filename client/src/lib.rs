//! # wastenest-client
//!
//! Leptos + WASM presentation layer for the WasteNest garbage-management
//! rewards app.
//!
//! This crate owns routing, session gating, the header/notification chrome,
//! and the landing dashboard. Every domain decision (verification, token
//! accounting, notifications) lives in the remote API that `net::api` calls.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs logging and hydrates the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
