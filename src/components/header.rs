//! Top bar: upload logo and list navigation.

use leptos::prelude::*;
use leptos_icons::Icon;

use super::upload::UploadLogo;
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::models::ActiveView;

stylance::import_crate_style!(css, "src/components/header.module.css");

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let nav_class = move |target: ActiveView| {
        move || {
            if ctx.view.get() == target {
                format!("{} {}", css::navButton, css::active)
            } else {
                css::navButton.to_string()
            }
        }
    };

    view! {
        <header class=css::header>
            <UploadLogo />

            <nav class=css::nav aria-label="Received items">
                <button
                    class=nav_class(ActiveView::Text)
                    on:click=move |_| ctx.show_text()
                    aria-pressed=move || (ctx.view.get() == ActiveView::Text).to_string()
                >
                    <Icon icon=ic::TEXT />
                    "Text"
                </button>
                <button
                    class=nav_class(ActiveView::Files)
                    on:click=move |_| ctx.show_files()
                    aria-pressed=move || (ctx.view.get() == ActiveView::Files).to_string()
                >
                    <Icon icon=ic::FILES />
                    "Files"
                </button>
                <button
                    class=css::navButton
                    on:click=move |_| ctx.refresh()
                    title="Refresh"
                    aria-label="Refresh current list"
                >
                    <Icon icon=ic::REFRESH />
                </button>
            </nav>
        </header>
    }
}
