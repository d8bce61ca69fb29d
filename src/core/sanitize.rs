//! Escaping and encoding of untrusted server strings.
//!
//! Filenames and text lines come straight from the drop server and must be
//! treated as attacker-controlled. Leptos inserts `{value}` as a DOM text node
//! and sets attributes through the DOM, so no view builds markup source and
//! `escape_for_markup` is only compiled for tests, where it pins down the
//! escaping contract. Path encoding is used by every download link.

use crate::config::endpoints;

/// Escape `raw` so it can be embedded in markup source as literal text.
///
/// Delegates to ammonia's text cleaner, which entity-encodes every character
/// with meaning in HTML (including quotes and whitespace), so the result is
/// also safe inside quoted and unquoted attribute values.
#[cfg(test)]
pub fn escape_for_markup(raw: &str) -> String {
    ammonia::clean_text(raw)
}

/// Percent-encode a filename for use as a single URL path segment.
///
/// Everything except ASCII alphanumerics and `-_.~` is encoded, so `/`, `?`,
/// `#`, spaces and parentheses cannot change the meaning of the path.
pub fn encode_for_path(raw: &str) -> String {
    urlencoding::encode(raw).into_owned()
}

/// Download URL for a received file.
pub fn received_file_path(name: &str) -> String {
    format!("{}{}", endpoints::RECEIVED_FILES, encode_for_path(name))
}
