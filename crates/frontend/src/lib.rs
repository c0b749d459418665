pub mod app;
pub mod shared;
pub mod usecases;

use wasm_bindgen::prelude::wasm_bindgen;

/// Console verbosity: everything in dev builds, dispatch outcomes and up in release
pub fn log_level(debug_build: bool) -> log::Level {
    if debug_build {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    _ = console_log::init_with_level(log_level(cfg!(debug_assertions)));
    console_error_panic_hook::set_once();

    log::debug!("Mounting WhyTx");
    leptos::mount::mount_to_body(app::App);
}
