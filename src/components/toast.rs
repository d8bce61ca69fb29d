//! Notification toasts. Click to dismiss early.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::models::{Notification, Severity};

stylance::import_crate_style!(css, "src/components/toast.module.css");

fn toast_class(severity: Severity) -> String {
    let tone = match severity {
        Severity::Success => css::success,
        Severity::Error => css::error,
        Severity::Info => css::info,
    };
    format!("{} {}", css::toast, tone)
}

#[component]
pub fn ToastStack() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let toasts = ctx.toasts;

    view! {
        <div class=css::stack aria-live="polite">
            <For
                each=move || toasts.queue.with(|q| q.items().to_vec())
                key=|n| n.id
                children=move |n: Notification| {
                    let id = n.id;
                    let role = if n.severity == Severity::Error { "alert" } else { "status" };
                    view! {
                        <div
                            class=toast_class(n.severity)
                            role=role
                            on:click=move |_| toasts.dismiss(id)
                        >
                            {n.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
