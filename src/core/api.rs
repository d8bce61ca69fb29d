//! Client for the drop server endpoints.
//!
//! [`ApiClient`] owns the request shapes and error translation; the actual I/O
//! goes through a [`Transport`] so the orchestration can run against a
//! recording transport in tests. Validation happens when a request value is
//! constructed, so an invalid request can never reach the transport.

use crate::config::{MAX_UPLOAD_BYTES, csrf, endpoints};
use crate::core::error::{ApiError, Operation, ValidationError};
use crate::core::token::TokenProvider;
use crate::models::{FileEntry, parse_text_lines};

// =============================================================================
// Transport
// =============================================================================

/// Status and body of a completed HTTP exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    /// Response text, `None` if the body could not be read.
    pub body: Option<String>,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// One field of a POSTed form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormField<F> {
    Text { name: &'static str, value: String },
    File { name: &'static str, file: F, file_name: String },
}

/// A form POST to a server path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormRequest<F> {
    pub path: &'static str,
    pub fields: Vec<FormField<F>>,
    pub headers: Vec<(&'static str, String)>,
}

/// Performs HTTP exchanges for the [`ApiClient`].
///
/// Implementations report transport failures as [`ApiError::Network`] and
/// return every completed response, whatever its status.
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// Browser-side file handle carried by upload forms.
    type File;

    async fn get(&self, path: &str) -> Result<HttpResponse, ApiError>;

    async fn post_form(&self, request: FormRequest<Self::File>) -> Result<HttpResponse, ApiError>;
}

// =============================================================================
// Requests
// =============================================================================

/// A validated upload.
#[derive(Clone, Debug)]
pub struct UploadRequest<F> {
    file: F,
    file_name: String,
}

impl<F> UploadRequest<F> {
    /// Validate the size limit. Files over 16 MiB are rejected here.
    pub fn new(
        file: F,
        file_name: impl Into<String>,
        size_bytes: u64,
    ) -> Result<Self, ValidationError> {
        if size_bytes > MAX_UPLOAD_BYTES {
            return Err(ValidationError::FileTooLarge {
                size: size_bytes,
                limit: MAX_UPLOAD_BYTES,
            });
        }
        Ok(Self {
            file,
            file_name: file_name.into(),
        })
    }
}

/// A validated rename.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenameRequest {
    old_name: String,
    new_name: String,
}

impl RenameRequest {
    /// Validate the new name: non-blank, different from the old name, and
    /// free of `/` and `\`.
    pub fn new(
        old_name: impl Into<String>,
        new_name: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let old_name = old_name.into();
        let new_name = new_name.into();

        if new_name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if new_name == old_name {
            return Err(ValidationError::Unchanged);
        }
        if new_name.contains(['/', '\\']) {
            return Err(ValidationError::InvalidCharacters);
        }
        Ok(Self { old_name, new_name })
    }
}

// =============================================================================
// Client
// =============================================================================

/// Typed access to the four drop server endpoints.
#[derive(Clone, Copy, Debug, Default)]
pub struct ApiClient<T, P> {
    transport: T,
    tokens: P,
}

impl<T: Transport, P: TokenProvider> ApiClient<T, P> {
    pub fn new(transport: T, tokens: P) -> Self {
        Self { transport, tokens }
    }

    #[cfg(test)]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Received text lines, most recent first, blank lines removed.
    pub async fn fetch_text(&self) -> Result<Vec<String>, ApiError> {
        let body = self.get_ok(endpoints::GET_TEXT, Operation::FetchText).await?;
        Ok(parse_text_lines(&body))
    }

    /// Received files in server order.
    pub async fn fetch_files(&self) -> Result<Vec<FileEntry>, ApiError> {
        let body = self.get_ok(endpoints::GET_FILES, Operation::FetchFiles).await?;
        serde_json::from_str(&body).map_err(|e| ApiError::Parse(e.to_string()))
    }

    /// Upload one file as multipart form data.
    pub async fn upload(&self, request: UploadRequest<T::File>) -> Result<(), ApiError> {
        let fields = vec![FormField::File {
            name: "file",
            file: request.file,
            file_name: request.file_name,
        }];
        self.post_ok(endpoints::UPLOAD_FILE, fields, Operation::Upload)
            .await
    }

    /// Rename a received file.
    pub async fn rename(&self, request: RenameRequest) -> Result<(), ApiError> {
        let fields = vec![
            FormField::Text {
                name: "old_name",
                value: request.old_name,
            },
            FormField::Text {
                name: "new_name",
                value: request.new_name,
            },
        ];
        self.post_ok(endpoints::RENAME_FILE, fields, Operation::Rename)
            .await
    }

    async fn get_ok(&self, path: &str, operation: Operation) -> Result<String, ApiError> {
        let response = self.transport.get(path).await?;
        if !response.is_success() {
            return Err(ApiError::server(operation, response.status, response.body));
        }
        response
            .body
            .ok_or_else(|| ApiError::Parse("response body could not be read".to_string()))
    }

    /// POST `fields` plus the CSRF token (form field and header) when one exists.
    async fn post_ok(
        &self,
        path: &'static str,
        mut fields: Vec<FormField<T::File>>,
        operation: Operation,
    ) -> Result<(), ApiError> {
        let mut headers = Vec::new();
        if let Some(token) = self.tokens.token() {
            fields.push(FormField::Text {
                name: csrf::FORM_FIELD,
                value: token.clone(),
            });
            headers.push((csrf::HEADER, token));
        }

        let response = self
            .transport
            .post_form(FormRequest {
                path,
                fields,
                headers,
            })
            .await?;

        if response.is_success() {
            Ok(())
        } else {
            Err(ApiError::server(operation, response.status, response.body))
        }
    }
}
