#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod embed;
pub mod portfolio;
pub mod state;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    // a second init (e.g. after hot reload) is not an error worth surfacing
    _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(App);
}
