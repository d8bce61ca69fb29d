//! Request orchestration and safety layer.
//!
//! Everything here except [`transport`] and the browser adapters is
//! target-independent and unit tested natively.

pub mod api;
pub mod clipboard;
pub mod error;
pub mod notify;
pub mod rename;
pub mod sanitize;
pub mod token;
pub mod transport;
pub mod upload;

#[cfg(test)]
pub mod testing;

pub use clipboard::{BrowserClipboard, copy_text};
pub use notify::Notifier;
pub use rename::{RenameOutcome, rename_file};
pub use transport::BrowserApi;
pub use upload::{SelectedFile, UploadOutcome, upload_selected};
