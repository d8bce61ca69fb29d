//! Error types for the drop client.
//!
//! Provides structured error handling with the messages the user sees:
//!
//! - [`ValidationError`] - Client-side precondition failures (no request sent)
//! - [`ApiError`] - Failures of a call against the drop server
//! - [`ClipboardError`] - Clipboard write failures

use thiserror::Error;

/// Client-side validation failures.
///
/// These are raised before any network round-trip; the `Display` text is shown
/// to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The file picker changed but holds no file.
    #[error("No file selected")]
    NoFileSelected,
    /// The chosen file exceeds the upload limit.
    #[error("File size exceeds 16MB limit")]
    FileTooLarge { size: u64, limit: u64 },
    /// New filename is empty or whitespace.
    #[error("Filename cannot be empty")]
    EmptyName,
    /// New filename contains a path separator.
    #[error("Filename cannot contain / or \\")]
    InvalidCharacters,
    /// New filename equals the old one.
    #[error("New name is the same as the current name")]
    Unchanged,
}

/// The server call an [`ApiError`] originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    FetchText,
    FetchFiles,
    Upload,
    Rename,
}

impl Operation {
    /// Message used when the server rejects a call without a readable body.
    pub fn default_failure(self) -> &'static str {
        match self {
            Self::FetchText => "Failed to load text",
            Self::FetchFiles => "Failed to load files",
            Self::Upload => "Failed to upload file",
            Self::Rename => "Failed to rename file",
        }
    }
}

/// Failures of a call against the drop server.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Request rejected locally before transmission.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Transport-level failure (server unreachable, CORS, aborted).
    #[error("Network error: {0}")]
    Network(String),
    /// Non-2xx response. `message` is the response body, or the operation's
    /// default when the body was empty or unreadable.
    #[error("{message}")]
    Server {
        operation: Operation,
        status: u16,
        message: String,
    },
    /// Response body could not be decoded.
    #[error("Invalid response: {0}")]
    Parse(String),
}

impl ApiError {
    /// Build a server error, falling back to the operation default for blank bodies.
    pub fn server(operation: Operation, status: u16, body: Option<String>) -> Self {
        let message = body
            .filter(|b| !b.trim().is_empty())
            .unwrap_or_else(|| operation.default_failure().to_string());
        Self::Server {
            operation,
            status,
            message,
        }
    }

    /// One-line description for the console, including status and operation.
    pub fn diagnostic(&self) -> String {
        match self {
            Self::Server {
                operation,
                status,
                message,
            } => format!("{:?} rejected with HTTP {}: {}", operation, status, message),
            other => other.to_string(),
        }
    }
}

/// Clipboard write failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    /// No clipboard API in this context (insecure origin, no window).
    #[error("Clipboard not available")]
    Unavailable,
    /// The browser refused the write (missing permission, no user gesture).
    #[error("Clipboard write rejected: {0}")]
    Rejected(String),
}
