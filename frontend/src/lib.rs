use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen_futures::spawn_local;

pub mod api;
pub mod components;
pub mod config;
pub mod pages;
pub mod router;
pub mod utils;

#[cfg(test)]
pub mod test_support;

/// Browser entry point: logging, runtime config, then the app.
#[wasm_bindgen]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        web_sys::console::warn_1(&"logger already initialised".into());
    }
    log::info!("Starting HRMS Lite frontend");

    // Resolve the API base URL early; requests await the same cached value.
    spawn_local(async move {
        config::init().await;
    });

    router::mount_app();
}
