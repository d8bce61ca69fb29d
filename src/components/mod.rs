//! UI components built with Leptos.
//!
//! - [`Shell`] - Page layout and initial load
//! - [`header`] - Upload logo and list navigation
//! - [`text_list`] / [`file_list`] - Received items
//! - [`popup`] - Image preview overlay
//! - [`toast`] - Notifications
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod file_list;
pub mod header;
pub mod icons;
pub mod popup;
pub mod shell;
pub mod text_list;
pub mod toast;
pub mod upload;

#[cfg(all(test, target_arch = "wasm32"))]
pub mod testing;

pub use shell::Shell;
