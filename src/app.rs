//! Root application module.
//!
//! Contains the main App component, AppContext definition, the toast
//! notifier, and application-level setup logic following Leptos conventions.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::components::Shell;
use crate::config::{MAX_NOTIFICATIONS, NOTIFICATION_TIMEOUT_MS};
use crate::core::{BrowserApi, Notifier};
use crate::models::{
    ActiveView, FileListView, NotificationQueue, PopupState, Severity, TextListView,
};
use crate::utils::dom;

// ============================================================================
// Toasts
// ============================================================================

/// Notifier that shows messages as auto-dismissing toasts.
///
/// This struct is `Copy` because its only field is a Leptos signal.
#[derive(Clone, Copy)]
pub struct Toasts {
    pub queue: RwSignal<NotificationQueue>,
}

impl Toasts {
    pub fn new() -> Self {
        Self {
            queue: RwSignal::new(NotificationQueue::new(MAX_NOTIFICATIONS)),
        }
    }

    /// Remove a toast before its timer fires.
    pub fn dismiss(&self, id: u64) {
        self.queue.update(|q| q.dismiss(id));
    }
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for Toasts {
    fn notify(&self, message: &str, severity: Severity) {
        let mut id = 0;
        self.queue.update(|q| id = q.push(message, severity));

        let queue = self.queue;
        Timeout::new(NOTIFICATION_TIMEOUT_MS, move || {
            // The owner may already be gone if the app unmounted.
            let _ = queue.try_update(|q| q.dismiss(id));
        })
        .forget();
    }
}

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and accessed from any child
/// with `use_context::<AppContext>()`.
///
/// # Architecture
///
/// Each list is held as a whole view model and replaced in one write per
/// response, so the DOM for a list is rebuilt from scratch rather than
/// patched. Responses are not sequenced: if two refreshes overlap, the one
/// that resolves last is what stays on screen.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Which list is shown.
    pub view: RwSignal<ActiveView>,
    /// Latest received-text view.
    pub text_list: RwSignal<TextListView>,
    /// Latest received-files view.
    pub file_list: RwSignal<FileListView>,
    /// Image preview overlay.
    pub popup: RwSignal<PopupState>,
    /// User notifications.
    pub toasts: Toasts,
    /// Drop server client.
    pub api: BrowserApi,
}

impl AppContext {
    pub fn new() -> Self {
        Self {
            view: RwSignal::new(ActiveView::default()),
            text_list: RwSignal::new(TextListView::default()),
            file_list: RwSignal::new(FileListView::default()),
            popup: RwSignal::new(PopupState::default()),
            toasts: Toasts::new(),
            api: BrowserApi::default(),
        }
    }

    /// Switch to the text list and fetch it.
    pub fn show_text(&self) {
        self.view.set(ActiveView::Text);
        self.refresh_text();
    }

    /// Switch to the file list and fetch it.
    pub fn show_files(&self) {
        self.view.set(ActiveView::Files);
        self.refresh_files();
    }

    /// Refetch whichever list is visible.
    pub fn refresh(&self) {
        match self.view.get_untracked() {
            ActiveView::Text => self.refresh_text(),
            ActiveView::Files => self.refresh_files(),
        }
    }

    pub fn refresh_text(&self) {
        let ctx = *self;
        spawn_local(async move {
            match ctx.api.fetch_text().await {
                Ok(lines) => ctx.text_list.set(TextListView::from_lines(&lines)),
                Err(e) => {
                    dom::log_error(&format!("Error loading text: {}", e.diagnostic()));
                    ctx.text_list.maybe_update(TextListView::mark_failed);
                    ctx.toasts.error("Failed to load text");
                }
            }
        });
    }

    pub fn refresh_files(&self) {
        let ctx = *self;
        spawn_local(async move {
            match ctx.api.fetch_files().await {
                Ok(files) => ctx.file_list.set(FileListView::from_entries(&files)),
                Err(e) => {
                    dom::log_error(&format!("Error loading files: {}", e.diagnostic()));
                    ctx.file_list.maybe_update(FileListView::mark_failed);
                    ctx.toasts.error("Failed to load files");
                }
            }
        });
    }

    /// Open the image preview for `src`.
    pub fn open_popup(&self, src: String) {
        self.popup.update(|p| p.open(src));
    }

    pub fn close_popup(&self) {
        self.popup.update(PopupState::close);
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component.
///
/// Creates and provides the global [`AppContext`], then renders the [`Shell`].
/// Panics are reported by `console_error_panic_hook`; request failures are
/// handled where they occur and surface as toasts.
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    view! { <Shell /> }
}
