//! Test doubles for the API client and notifier.

use std::cell::RefCell;

use crate::core::api::{ApiClient, FormRequest, HttpResponse, Transport};
use crate::core::error::{ApiError, ClipboardError};
use crate::core::clipboard::Clipboard;
use crate::core::notify::Notifier;
use crate::core::token::StaticTokenProvider;
use crate::models::Severity;

/// A request seen by [`MockTransport`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Recorded {
    Get(String),
    Post(FormRequest<Vec<u8>>),
}

/// Transport that answers every request the same way and records it.
pub struct MockTransport {
    reply: Result<HttpResponse, ApiError>,
    requests: RefCell<Vec<Recorded>>,
}

impl MockTransport {
    pub fn responding(status: u16, body: &str) -> Self {
        Self {
            reply: Ok(HttpResponse {
                status,
                body: Some(body.to_string()),
            }),
            requests: RefCell::new(Vec::new()),
        }
    }

    pub fn unreadable(status: u16) -> Self {
        Self {
            reply: Ok(HttpResponse { status, body: None }),
            requests: RefCell::new(Vec::new()),
        }
    }

    pub fn unreachable() -> Self {
        Self {
            reply: Err(ApiError::Network("Failed to fetch".to_string())),
            requests: RefCell::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.borrow().clone()
    }
}

impl Transport for MockTransport {
    type File = Vec<u8>;

    async fn get(&self, path: &str) -> Result<HttpResponse, ApiError> {
        self.requests
            .borrow_mut()
            .push(Recorded::Get(path.to_string()));
        self.reply.clone()
    }

    async fn post_form(&self, request: FormRequest<Vec<u8>>) -> Result<HttpResponse, ApiError> {
        self.requests.borrow_mut().push(Recorded::Post(request));
        self.reply.clone()
    }
}

/// Client with token `"tok"`.
pub fn client(transport: MockTransport) -> ApiClient<MockTransport, StaticTokenProvider> {
    ApiClient::new(transport, StaticTokenProvider::new("tok"))
}

pub fn client_without_token(
    transport: MockTransport,
) -> ApiClient<MockTransport, StaticTokenProvider> {
    ApiClient::new(transport, StaticTokenProvider::none())
}

/// Notifier that keeps every message.
#[derive(Default)]
pub struct RecordingNotifier {
    messages: RefCell<Vec<(String, Severity)>>,
}

impl RecordingNotifier {
    pub fn messages(&self) -> Vec<(String, Severity)> {
        self.messages.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str, severity: Severity) {
        self.messages
            .borrow_mut()
            .push((message.to_string(), severity));
    }
}

/// Clipboard that records writes, or refuses them.
#[derive(Default)]
pub struct MockClipboard {
    pub refuse: bool,
    written: RefCell<Vec<String>>,
}

impl MockClipboard {
    pub fn refusing() -> Self {
        Self {
            refuse: true,
            ..Self::default()
        }
    }

    pub fn written(&self) -> Vec<String> {
        self.written.borrow().clone()
    }
}

impl Clipboard for MockClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        if self.refuse {
            return Err(ClipboardError::Rejected("NotAllowedError".to_string()));
        }
        self.written.borrow_mut().push(text.to_string());
        Ok(())
    }
}
