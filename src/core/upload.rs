//! Upload flow for a file chosen in the picker.

use crate::core::api::{ApiClient, Transport, UploadRequest};
use crate::core::error::ValidationError;
use crate::core::notify::Notifier;
use crate::core::token::TokenProvider;
use crate::utils::dom;

/// A file taken from the picker.
#[derive(Clone, Debug)]
pub struct SelectedFile<F> {
    pub file: F,
    pub name: String,
    pub size_bytes: u64,
}

/// What the picker should do after an upload attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UploadOutcome {
    /// Stored on the server: clear the picker and refresh the file list.
    Uploaded,
    /// Rejected locally, nothing sent. The picker keeps its selection.
    Rejected,
    /// Sent but the server or network failed.
    Failed,
}

/// Validate and upload `selection`, reporting the result through `notifier`.
pub async fn upload_selected<T, P, N>(
    api: &ApiClient<T, P>,
    notifier: &N,
    selection: Option<SelectedFile<T::File>>,
) -> UploadOutcome
where
    T: Transport,
    P: TokenProvider,
    N: Notifier,
{
    let Some(selected) = selection else {
        notifier.error(&ValidationError::NoFileSelected.to_string());
        return UploadOutcome::Rejected;
    };

    let request = match UploadRequest::new(selected.file, &selected.name, selected.size_bytes) {
        Ok(request) => request,
        Err(e) => {
            if let ValidationError::FileTooLarge { size, limit } = &e {
                dom::log_warn(&format!(
                    "Refusing to upload {} ({} bytes, limit {})",
                    selected.name, size, limit
                ));
            }
            notifier.error(&e.to_string());
            return UploadOutcome::Rejected;
        }
    };

    notifier.info(&format!("Uploading {}", selected.name));

    match api.upload(request).await {
        Ok(()) => {
            notifier.success("File uploaded successfully");
            UploadOutcome::Uploaded
        }
        Err(e) => {
            dom::log_error(&format!("Upload error: {}", e.diagnostic()));
            notifier.error(&e.to_string());
            UploadOutcome::Failed
        }
    }
}
