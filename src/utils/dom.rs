//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlDocument, Window};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get the current document.
#[inline]
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Content of `<meta name="{name}">`.
///
/// Returns `None` when no such element exists and `Some("")` when it exists
/// without a `content` attribute.
pub fn meta_content(name: &str) -> Option<String> {
    let selector = format!("meta[name=\"{}\"]", name);
    let element = document()?.query_selector(&selector).ok().flatten()?;
    Some(element.get_attribute("content").unwrap_or_default())
}

/// The raw `document.cookie` string.
pub fn document_cookie() -> Option<String> {
    document()?
        .dyn_into::<HtmlDocument>()
        .ok()?
        .cookie()
        .ok()
}

/// Ask the user for a line of text with `window.prompt`.
///
/// `None` when the dialog was cancelled or is unavailable.
pub fn prompt(message: &str, default: &str) -> Option<String> {
    window()?
        .prompt_with_message_and_default(message, default)
        .ok()
        .flatten()
}

/// Best-effort message from a thrown JS value (string, or an `Error`'s `message`).
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            js_sys::Reflect::get(value, &"message".into())
                .ok()
                .and_then(|m| m.as_string())
        })
        .unwrap_or_else(|| "Unknown error".to_string())
}

// =============================================================================
// Console
// =============================================================================

/// Log an error to the browser console (no-op off wasm32).
pub fn log_error(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::error_1(&message.into());
    #[cfg(not(target_arch = "wasm32"))]
    let _ = message;
}

/// Log a warning to the browser console (no-op off wasm32).
pub fn log_warn(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::warn_1(&message.into());
    #[cfg(not(target_arch = "wasm32"))]
    let _ = message;
}
