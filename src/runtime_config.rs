//! Endpoint overrides read from page globals.
//!
//! A host page can set `window.IMAGE_ANALYSIS_API_URL` or
//! `window.TRANSLATOR_API_URL` before the bundle loads.

use macrolingo_core::config::{ANALYSIS_URL_VAR, TRANSLATOR_URL_VAR};
use macrolingo_core::ClientConfig;
use wasm_bindgen::JsValue;

/// Defaults with any page-level overrides applied.
pub fn client_config() -> ClientConfig {
    let analysis = window_string(ANALYSIS_URL_VAR);
    let translator = window_string(TRANSLATOR_URL_VAR);
    ClientConfig::default().with_overrides(analysis.as_deref(), translator.as_deref())
}

fn window_string(name: &str) -> Option<String> {
    js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str(name))
        .ok()
        .and_then(|value| value.as_string())
}
