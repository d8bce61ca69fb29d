//! User-facing outcome reporting.

use crate::models::Severity;

/// Surfaces transient messages to the user.
///
/// Controllers report every outcome through this trait; the app implementation
/// shows toasts, tests record the messages.
pub trait Notifier {
    fn notify(&self, message: &str, severity: Severity);

    fn success(&self, message: &str) {
        self.notify(message, Severity::Success);
    }

    fn error(&self, message: &str) {
        self.notify(message, Severity::Error);
    }

    fn info(&self, message: &str) {
        self.notify(message, Severity::Info);
    }
}
