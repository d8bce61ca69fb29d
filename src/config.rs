//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! The server surface is fixed, so everything here is compile-time.

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name shown in the header and logo alt text.
pub const APP_NAME: &str = "SkyDrop";

// =============================================================================
// Server Endpoints
// =============================================================================

/// Server endpoints consumed by the API client.
pub mod endpoints {
    /// Newline-separated received text.
    pub const GET_TEXT: &str = "/get_text";
    /// JSON array of received files.
    pub const GET_FILES: &str = "/get_files";
    /// Multipart upload target.
    pub const UPLOAD_FILE: &str = "/upload_file";
    /// Form-encoded rename target.
    pub const RENAME_FILE: &str = "/rename_file";
    /// Prefix for downloading a received file (name appended, percent-encoded).
    pub const RECEIVED_FILES: &str = "/received_files/";
}

// =============================================================================
// CSRF Token
// =============================================================================

/// Anti-forgery token lookup and transmission names.
pub mod csrf {
    /// `<meta name="...">` element carrying the token.
    pub const META_NAME: &str = "csrf-token";
    /// Cookie fallback holding the token.
    pub const COOKIE_NAME: &str = "csrf_token";
    /// Form field name for the token.
    pub const FORM_FIELD: &str = "csrf_token";
    /// Request header name for the token.
    pub const HEADER: &str = "X-CSRFToken";
}

// =============================================================================
// Limits
// =============================================================================

/// Maximum upload size accepted client-side (16 MiB).
pub const MAX_UPLOAD_BYTES: u64 = 16 * 1024 * 1024;

/// File extensions (lowercase) that get an image preview action.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "bmp", "webp"];

// =============================================================================
// Notifications
// =============================================================================

/// How long a notification stays on screen, in milliseconds.
pub const NOTIFICATION_TIMEOUT_MS: u32 = 3500;

/// Maximum number of notifications shown at once.
pub const MAX_NOTIFICATIONS: usize = 4;

// =============================================================================
// DOM Anchors
// =============================================================================

/// Element id the application mounts into.
pub const MOUNT_ELEMENT_ID: &str = "app";

/// Prompt shown when renaming a file.
pub const RENAME_PROMPT: &str = "Enter new name for the file (including extension):";

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
