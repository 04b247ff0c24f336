//! # asset-console
//!
//! Leptos + WASM frontend for the asset-management console. Authenticated
//! users browse and edit assets, record periodic inspections against them,
//! and select multiple assets for bulk actions.
//!
//! This crate contains pages, components, application state, wire types,
//! and the REST helpers for the asset API. Session identity persists across
//! page reloads via a whitelisted localStorage record; everything else is
//! in-memory, per page visit.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point — hydrate the server-rendered DOM in the browser.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        leptos::logging::warn!("console logger already initialized");
    }
    leptos::mount::hydrate_body(app::App);
}
