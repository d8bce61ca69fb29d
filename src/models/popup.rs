//! Image preview overlay state.

/// Image preview overlay state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum PopupState {
    /// Overlay hidden.
    #[default]
    Closed,
    /// Overlay showing the image at `src` (also the download target).
    Open { src: String },
}

impl PopupState {
    /// Show `src`. Opening while already open replaces the image.
    pub fn open(&mut self, src: impl Into<String>) {
        *self = Self::Open { src: src.into() };
    }

    pub fn close(&mut self) {
        *self = Self::Closed;
    }

    /// Apply a document-level key press. Returns `true` if the popup closed.
    pub fn handle_key(&mut self, key: &str) -> bool {
        if key == "Escape" && self.is_open() {
            self.close();
            true
        } else {
            false
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    /// Current image source, if open.
    pub fn src(&self) -> Option<&str> {
        match self {
            Self::Open { src } => Some(src),
            Self::Closed => None,
        }
    }
}
