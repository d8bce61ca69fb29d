//! System clipboard access.

use js_sys::Reflect;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use crate::core::error::ClipboardError;
use crate::core::notify::Notifier;
use crate::utils::dom;

/// Writes text to the system clipboard.
#[allow(async_fn_in_trait)]
pub trait Clipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// `navigator.clipboard`, available on secure origins only.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserClipboard;

impl Clipboard for BrowserClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let navigator = dom::window()
            .ok_or(ClipboardError::Unavailable)?
            .navigator();

        // Absent (not just empty) on insecure origins, so probe before casting.
        let clipboard = Reflect::get(&navigator, &"clipboard".into())
            .ok()
            .filter(|value| !value.is_undefined() && !value.is_null())
            .ok_or(ClipboardError::Unavailable)?
            .unchecked_into::<web_sys::Clipboard>();

        JsFuture::from(clipboard.write_text(text))
            .await
            .map(|_| ())
            .map_err(|e| ClipboardError::Rejected(dom::js_error_message(&e)))
    }
}

/// Copy `text` and report the outcome.
pub async fn copy_text<C, N>(clipboard: &C, notifier: &N, text: &str) -> Result<(), ClipboardError>
where
    C: Clipboard,
    N: Notifier,
{
    match clipboard.write_text(text).await {
        Ok(()) => {
            notifier.success("Copied to clipboard!");
            Ok(())
        }
        Err(e) => {
            dom::log_error(&format!("Failed to copy: {}", e));
            notifier.error("Failed to copy text");
            Err(e)
        }
    }
}
