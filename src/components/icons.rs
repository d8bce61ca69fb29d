//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuCopy as Clipboard, LuDownload as Download, LuEye as View, LuFileText as Text,
        LuFolder as Files, LuPencil as Rename, LuRefreshCw as Refresh, LuUpload as Upload,
        LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArrowClockwise as Refresh, BsClipboard as Clipboard, BsDownload as Download,
        BsEye as View, BsFileEarmarkText as Text, BsFolderFill as Files, BsPencil as Rename,
        BsUpload as Upload, BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(COPY, Clipboard);
themed_icon!(DOWNLOAD, Download);
themed_icon!(VIEW, View);
themed_icon!(TEXT, Text);
themed_icon!(FILES, Files);
themed_icon!(RENAME, Rename);
themed_icon!(REFRESH, Refresh);
themed_icon!(UPLOAD, Upload);
themed_icon!(CLOSE, Close);
