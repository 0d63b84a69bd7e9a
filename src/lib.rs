#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod effects;
pub mod i18n;
pub mod lifecycle;
pub mod preferences;
pub mod projects;
#[cfg(feature = "ssr")]
pub mod server;
pub mod site;
pub mod skills;
pub mod typing;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    // only fails if a logger is already installed
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(App);
}
