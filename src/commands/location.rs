//! Location Commands
//!
//! The URL fragment (`#<token>`) is how lists are shared.

use categorama_core::ShareToken;
use wasm_bindgen::JsValue;

/// Current `location.hash`, including the `#`, or empty
pub fn current_fragment() -> String {
    web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
}

/// Push `/#<token>` onto the history without reloading
pub fn push_fragment(token: &ShareToken) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let url = format!("/{}", token.to_fragment());
    let result = window
        .history()
        .and_then(|history| history.push_state_with_url(&JsValue::NULL, "", Some(&url)));
    if let Err(e) = result {
        log::warn!("Failed to update URL to {}: {:?}", url, e);
    }
}
