//! Anti-forgery (CSRF) token resolution.
//!
//! The server issues the token either as a `<meta>` element in the shell page
//! or as a cookie. The API client asks an injected [`TokenProvider`] for it on
//! every state-changing call.

use crate::config::csrf;
use crate::utils::dom;

/// Source of the current CSRF token.
pub trait TokenProvider {
    /// The token to send, or `None` when no token is available.
    ///
    /// Callers must omit the token entirely on `None` instead of sending an
    /// empty value.
    fn token(&self) -> Option<String>;
}

/// Resolves the token from the live document.
///
/// Order: the `csrf-token` meta element if present (its content, even when
/// empty), then the `csrf_token` cookie, then nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentTokenProvider;

impl TokenProvider for DocumentTokenProvider {
    fn token(&self) -> Option<String> {
        let meta = dom::meta_content(csrf::META_NAME);
        let cookies = if meta.is_none() {
            dom::document_cookie()
        } else {
            None
        };
        resolve_token(meta, cookies.as_deref())
    }
}

/// Pick the token from the meta content and the cookie string.
///
/// A meta element that exists always wins, even with empty content (which
/// means no token). The cookie is consulted only when there is no meta element.
pub fn resolve_token(meta: Option<String>, cookies: Option<&str>) -> Option<String> {
    match meta {
        Some(content) => non_empty(content),
        None => cookies.and_then(|c| token_from_cookies(c, csrf::COOKIE_NAME)),
    }
}

/// Fixed token, for tests.
#[cfg(test)]
#[derive(Clone, Debug, Default)]
pub struct StaticTokenProvider(pub Option<String>);

#[cfg(test)]
impl StaticTokenProvider {
    pub fn new(token: impl Into<String>) -> Self {
        Self(non_empty(token.into()))
    }

    pub fn none() -> Self {
        Self(None)
    }
}

#[cfg(test)]
impl TokenProvider for StaticTokenProvider {
    fn token(&self) -> Option<String> {
        self.0.clone()
    }
}

/// Find cookie `name` in a `document.cookie` string and URL-decode its value.
///
/// Keys must match exactly (`xcsrf_token` does not match `csrf_token`). A value
/// that fails to decode is returned as-is.
pub fn token_from_cookies(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .and_then(|(_, value)| {
            let decoded = urlencoding::decode(value)
                .map(|v| v.into_owned())
                .unwrap_or_else(|_| value.to_string());
            non_empty(decoded)
        })
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cookie_exact_key() {
        let cookies = "xcsrf_token=wrong; session=abc; csrf_token=right";
        assert_eq!(
            token_from_cookies(cookies, "csrf_token"),
            Some("right".to_string())
        );
        assert_eq!(token_from_cookies("csrf_token_old=1", "csrf_token"), None);
    }

    #[test]
    fn test_cookie_value_decoded() {
        assert_eq!(
            token_from_cookies("csrf_token=a%2Bb%3D%3D", "csrf_token"),
            Some("a+b==".to_string())
        );
        // Raw '=' inside the value is kept.
        assert_eq!(
            token_from_cookies("csrf_token=IjQ5.Zx==", "csrf_token"),
            Some("IjQ5.Zx==".to_string())
        );
    }

    #[test]
    fn test_cookie_missing_or_empty() {
        assert_eq!(token_from_cookies("", "csrf_token"), None);
        assert_eq!(token_from_cookies("session=abc", "csrf_token"), None);
        assert_eq!(token_from_cookies("csrf_token=", "csrf_token"), None);
        assert_eq!(token_from_cookies("csrf_token", "csrf_token"), None);
    }

    #[test]
    fn test_cookie_bad_escape_falls_back_to_raw() {
        assert_eq!(
            token_from_cookies("csrf_token=%E0%A4%A", "csrf_token"),
            Some("%E0%A4%A".to_string())
        );
    }

    #[test]
    fn test_resolve_meta_wins_over_cookie() {
        assert_eq!(
            resolve_token(Some("from-meta".to_string()), Some("csrf_token=from-cookie")),
            Some("from-meta".to_string())
        );
    }

    #[test]
    fn test_resolve_empty_meta_blocks_cookie() {
        assert_eq!(
            resolve_token(Some(String::new()), Some("csrf_token=from-cookie")),
            None
        );
    }

    #[test]
    fn test_resolve_cookie_without_meta() {
        assert_eq!(
            resolve_token(None, Some("session=1; csrf_token=from-cookie")),
            Some("from-cookie".to_string())
        );
        assert_eq!(resolve_token(None, Some("session=1")), None);
    }

    #[test]
    fn test_resolve_nothing_available() {
        assert_eq!(resolve_token(None, None), None);
        assert_eq!(resolve_token(None, Some("")), None);
    }

    #[test]
    fn test_static_provider() {
        assert_eq!(StaticTokenProvider::new("t0k").token(), Some("t0k".to_string()));
        assert_eq!(StaticTokenProvider::new("").token(), None);
        assert_eq!(StaticTokenProvider::none().token(), None);
    }
}
