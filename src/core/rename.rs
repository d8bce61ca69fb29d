//! Rename flow for a received file.

use crate::core::api::{ApiClient, RenameRequest, Transport};
use crate::core::notify::Notifier;
use crate::core::token::TokenProvider;
use crate::utils::dom;

/// Result of a rename attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenameOutcome {
    /// Prompt cancelled or name unchanged; nothing happened.
    Unchanged,
    /// New name failed local validation, nothing sent.
    Rejected,
    /// Renamed on the server: refresh the file list.
    Renamed,
    /// Sent but the server or network failed.
    Failed,
}

/// Rename `old_name` to the prompt `answer`.
///
/// `answer` is `None` when the user cancelled the prompt.
pub async fn rename_file<T, P, N>(
    api: &ApiClient<T, P>,
    notifier: &N,
    old_name: &str,
    answer: Option<String>,
) -> RenameOutcome
where
    T: Transport,
    P: TokenProvider,
    N: Notifier,
{
    let Some(new_name) = answer.filter(|name| name != old_name) else {
        return RenameOutcome::Unchanged;
    };

    let request = match RenameRequest::new(old_name, new_name) {
        Ok(request) => request,
        Err(e) => {
            notifier.error(&e.to_string());
            return RenameOutcome::Rejected;
        }
    };

    match api.rename(request).await {
        Ok(()) => {
            notifier.success("File renamed successfully");
            RenameOutcome::Renamed
        }
        Err(e) => {
            dom::log_error(&format!("Rename error: {}", e.diagnostic()));
            notifier.error(&e.to_string());
            RenameOutcome::Failed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::testing::{MockTransport, RecordingNotifier, Recorded, client};
    use crate::models::Severity;

    #[tokio::test]
    async fn test_cancel_and_same_name_do_nothing() {
        let api = client(MockTransport::responding(200, ""));
        let notifier = RecordingNotifier::default();

        assert_eq!(
            rename_file(&api, &notifier, "a.txt", None).await,
            RenameOutcome::Unchanged
        );
        assert_eq!(
            rename_file(&api, &notifier, "a.txt", Some("a.txt".to_string())).await,
            RenameOutcome::Unchanged
        );
        assert!(notifier.messages().is_empty());
        assert!(api.transport().requests().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_names_rejected_locally() {
        let api = client(MockTransport::responding(200, ""));
        let notifier = RecordingNotifier::default();

        assert_eq!(
            rename_file(&api, &notifier, "a.txt", Some(String::new())).await,
            RenameOutcome::Rejected
        );
        assert_eq!(
            rename_file(&api, &notifier, "a.txt", Some("b/c.txt".to_string())).await,
            RenameOutcome::Rejected
        );

        assert!(api.transport().requests().is_empty());
        assert_eq!(
            notifier.messages(),
            vec![
                ("Filename cannot be empty".to_string(), Severity::Error),
                ("Filename cannot contain / or \\".to_string(), Severity::Error),
            ]
        );
    }

    #[tokio::test]
    async fn test_valid_rename_single_request() {
        let api = client(MockTransport::responding(200, "File renamed successfully"));
        let notifier = RecordingNotifier::default();

        let outcome = rename_file(&api, &notifier, "a.txt", Some("b.txt".to_string())).await;

        assert_eq!(outcome, RenameOutcome::Renamed);
        let requests = api.transport().requests();
        assert_eq!(requests.len(), 1);
        assert!(matches!(&requests[0], Recorded::Post(form) if form.path == "/rename_file"));
        assert_eq!(
            notifier.messages(),
            vec![("File renamed successfully".to_string(), Severity::Success)]
        );
    }

    #[tokio::test]
    async fn test_server_collision_text_shown() {
        let api = client(MockTransport::responding(409, "File with new name already exists"));
        let notifier = RecordingNotifier::default();

        let outcome = rename_file(&api, &notifier, "a.txt", Some("b.txt".to_string())).await;

        assert_eq!(outcome, RenameOutcome::Failed);
        assert_eq!(
            notifier.messages(),
            vec![(
                "File with new name already exists".to_string(),
                Severity::Error
            )]
        );
    }

    #[tokio::test]
    async fn test_empty_rejection_body_falls_back() {
        let api = client(MockTransport::responding(500, ""));
        let notifier = RecordingNotifier::default();

        rename_file(&api, &notifier, "a.txt", Some("b.txt".to_string())).await;

        assert_eq!(
            notifier.messages(),
            vec![("Failed to rename file".to_string(), Severity::Error)]
        );
    }
}
