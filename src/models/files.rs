//! Received text and file types returned by the drop server.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::config::IMAGE_EXTENSIONS;

// =============================================================================
// Text Lines
// =============================================================================

/// Split a `/get_text` body into display lines.
///
/// Lines are trimmed and blank ones dropped; server order is kept.
pub fn parse_text_lines(body: &str) -> Vec<String> {
    body.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

// =============================================================================
// File Entries
// =============================================================================

/// A received file as listed by `/get_files`.
///
/// Only `name` is interpreted. Everything else the server sends is kept in
/// `extra` untouched so it survives a round-trip.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct FileEntry {
    /// File name on the server. Attacker-controlled.
    pub name: String,
    /// Additional server metadata (e.g. `mtime`).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FileEntry {
    /// Create an entry with no extra metadata.
    #[cfg(test)]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extra: Map::new(),
        }
    }

    /// Modification time in whole seconds since the epoch, when the server sent one.
    pub fn modified(&self) -> Option<u64> {
        self.extra
            .get("mtime")
            .and_then(Value::as_f64)
            .filter(|t| t.is_finite() && *t >= 0.0)
            .map(|t| t as u64)
    }

    /// Whether the file can be previewed as an image.
    pub fn is_image(&self) -> bool {
        is_image_name(&self.name)
    }
}

/// Check a file name's extension against the previewable image types.
///
/// Comparison is case-insensitive; names without a dot never match.
pub fn is_image_name(name: &str) -> bool {
    name.rsplit_once('.')
        .map(|(_, ext)| {
            let ext = ext.to_ascii_lowercase();
            IMAGE_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}
