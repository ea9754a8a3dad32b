//! Games page controller.
//!
//! Client-side behavior for the game detail page, compiled to WASM: like/dislike
//! toggles, the play counter, inline comment edit mode and the star rating widget.
//! Handlers run against the [`ports::DomPort`] / [`ports::HttpPort`] traits so they
//! can be tested natively; [`web`] supplies the browser versions.

use wasm_bindgen::prelude::*;

pub mod comments;
pub mod config;
pub mod controller;
pub mod cookie;
pub mod error;
pub mod likes;
pub mod log;
pub mod play;
pub mod ports;
pub mod rating;
pub mod request;
pub mod web;

pub use config::PageConfig;
pub use error::PageError;

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Wire all page controls using the default configuration.
///
/// The start hook only installs the panic hook; the host page calls this (or
/// [`init_page_with_config`]) once after loading the module. Calling it before the
/// markup is parsed is fine: wiring is deferred to `DOMContentLoaded`.
#[wasm_bindgen]
pub fn init_page() -> Result<(), JsValue> {
    controller::init_page_with(PageConfig::default())
}

/// Wire all page controls; `config_json` may override any `PageConfig` field.
#[wasm_bindgen]
pub fn init_page_with_config(config_json: &str) -> Result<(), JsValue> {
    let config = PageConfig::from_json(config_json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    controller::init_page_with(config)
}
