//! View models for the text and file lists.
//!
//! A view model is built from one server response and handed to the renderer
//! in a single signal write. The renderer swaps the whole subtree, so a list
//! is never shown half-built or patched item by item.

use crate::core::sanitize::received_file_path;
use crate::models::FileEntry;
use crate::utils::format::format_date_iso;

/// Which list occupies the content area.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ActiveView {
    /// Received text snippets.
    Text,
    /// Received files (default on load).
    #[default]
    Files,
}

/// Contents of the text list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum TextListView {
    /// Nothing fetched yet.
    #[default]
    Loading,
    /// "No text received yet." placeholder.
    Empty,
    /// One copyable element per line, server order.
    Lines(Vec<String>),
    /// The first fetch failed; nothing to show.
    Failed,
}

impl TextListView {
    /// Build from fetched lines. Whitespace-only lines are dropped.
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Self {
        let lines: Vec<String> = lines
            .iter()
            .map(|l| l.as_ref().trim())
            .filter(|l| !l.is_empty())
            .map(String::from)
            .collect();
        if lines.is_empty() {
            Self::Empty
        } else {
            Self::Lines(lines)
        }
    }

    /// Record a failed fetch. Only a view still loading changes; anything
    /// already shown stays on screen.
    pub fn mark_failed(&mut self) -> bool {
        if *self == Self::Loading {
            *self = Self::Failed;
            true
        } else {
            false
        }
    }
}

/// One row of the file list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileItemView {
    /// Raw file name: link label, `download` attribute and rename input.
    pub name: String,
    /// Percent-encoded download path.
    pub href: String,
    /// Whether a "View" action is offered.
    pub previewable: bool,
    /// Upload date (YYYY-MM-DD) if the server reported one.
    pub modified: Option<String>,
}

impl From<&FileEntry> for FileItemView {
    fn from(entry: &FileEntry) -> Self {
        Self {
            name: entry.name.clone(),
            href: received_file_path(&entry.name),
            previewable: entry.is_image(),
            modified: entry.modified().map(format_date_iso),
        }
    }
}

/// Contents of the file list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FileListView {
    #[default]
    Loading,
    /// "No files received yet." placeholder.
    Empty,
    Files(Vec<FileItemView>),
    /// The first fetch failed; nothing to show.
    Failed,
}

impl FileListView {
    pub fn from_entries(entries: &[FileEntry]) -> Self {
        if entries.is_empty() {
            Self::Empty
        } else {
            Self::Files(entries.iter().map(FileItemView::from).collect())
        }
    }

    /// Same rule as [`TextListView::mark_failed`].
    pub fn mark_failed(&mut self) -> bool {
        if *self == Self::Loading {
            *self = Self::Failed;
            true
        } else {
            false
        }
    }
}
