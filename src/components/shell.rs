//! Main shell component.
//!
//! Lays out the header, the active list, the image popup and the toast stack,
//! and kicks off the initial file list fetch.

use leptos::prelude::*;

use super::file_list::FileList;
use super::header::Header;
use super::popup::{ImagePopup, setup_escape_listener};
use super::text_list::TextList;
use super::toast::ToastStack;
use crate::app::AppContext;
use crate::models::ActiveView;

stylance::import_crate_style!(css, "src/components/shell.module.css");

#[component]
pub fn Shell() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    setup_escape_listener(ctx);
    ctx.show_files();

    view! {
        <div class=css::shell>
            <Header />

            <main class=css::content>
                {move || match ctx.view.get() {
                    ActiveView::Text => view! { <TextList /> }.into_any(),
                    ActiveView::Files => view! { <FileList /> }.into_any(),
                }}
            </main>

            <ImagePopup />
            <ToastStack />
        </div>
    }
}
