//! RipaPay site entry point.
//!
//! Loaded by the Trunk-generated bootstrap in `index.html`.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

mod app;
mod components;
mod pages;
mod state;
mod utils;

use app::App;

#[wasm_bindgen(start)]
pub fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    log::info!("RipaPay site starting");

    utils::dom::hide_loading_screen();

    leptos::mount::mount_to_body(|| view! { <App/> });
}
