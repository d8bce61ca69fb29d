//! Utility modules for DOM access and display formatting.
//!
//! Provides:
//! - [`dom`] - Window/document access, prompt, console logging
//! - [`format`] - Date formatting for file metadata

pub mod dom;
pub mod format;
