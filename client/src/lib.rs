//! # portfolio-client
//!
//! Leptos + WASM frontend for a single-page personal portfolio.
//!
//! All page behavior lives in [`controller::PageCore`], a pure state machine
//! that turns page events into actions. `util::dispatch` performs those
//! actions against the browser; `components` render the state.

pub mod app;
pub mod components;
pub mod content;
pub mod controller;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
use wasm_bindgen::prelude::wasm_bindgen;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        leptos::logging::warn!("console logger already installed");
    }
    leptos::mount::hydrate_body(app::App);
}

/// Open the printable resume in a new window.
///
/// Exported so a plain `<button onclick>` can reach it outside the Leptos tree.
#[cfg(feature = "hydrate")]
#[wasm_bindgen(js_name = printResume)]
pub fn print_resume() {
    util::resume::print(&content::PROFILE);
}
