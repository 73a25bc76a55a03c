pub mod app;
pub mod domain;
pub mod routes;
pub mod shared;

use shared::config;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    let loaded = config::load_config();

    // initializes logging using the `log` crate
    let level = loaded
        .as_ref()
        .map(|c| c.logging.level())
        .unwrap_or(log::Level::Debug);
    _ = console_log::init_with_level(level);
    console_error_panic_hook::set_once();

    if let Err(e) = loaded {
        log::warn!("Using default configuration: {}", e);
    }
    log::debug!("API base: {}", shared::api_utils::api_base());

    leptos::mount::mount_to_body(app::App);
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
