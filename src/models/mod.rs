//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`FileEntry`], [`parse_text_lines`] - Server payloads
//! - [`Notification`], [`NotificationQueue`], [`Severity`] - Toast messages
//! - [`PopupState`] - Image preview overlay
//! - [`ActiveView`], [`TextListView`], [`FileListView`] - Rendered list contents

mod files;
mod notification;
mod popup;
mod view;

pub use files::{FileEntry, parse_text_lines};
pub use notification::{Notification, NotificationQueue, Severity};
pub use popup::PopupState;
pub use view::{ActiveView, FileItemView, FileListView, TextListView};
