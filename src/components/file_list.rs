//! Received file list.
//!
//! Names are shown as text nodes and passed raw to the rename flow; only the
//! download href is percent-encoded.

use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen_futures::spawn_local;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::RENAME_PROMPT;
use crate::core::{RenameOutcome, rename_file};
use crate::models::{FileItemView, FileListView};
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/file_list.module.css");

#[component]
pub fn FileList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    view! {
        <section>
            <h2 class=css::heading>"Recently Received Files"</h2>
            {move || match ctx.file_list.get() {
                FileListView::Loading => {
                    view! { <p class=css::placeholder>"Loading…"</p> }.into_any()
                }
                FileListView::Empty => {
                    view! { <p class=css::placeholder>"No files received yet."</p> }.into_any()
                }
                FileListView::Failed => {
                    view! { <p class=css::placeholder>"Could not load files."</p> }.into_any()
                }
                FileListView::Files(items) => view! {
                    <ul class=css::list>
                        {items
                            .into_iter()
                            .map(|item| view! { <FileRow item=item /> })
                            .collect_view()}
                    </ul>
                }
                .into_any(),
            }}
        </section>
    }
}

#[component]
fn FileRow(item: FileItemView) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let FileItemView {
        name,
        href,
        previewable,
        modified,
    } = item;

    let preview_src = href.clone();
    let rename_from = name.clone();
    let download_name = name.clone();

    view! {
        <li class=css::item>
            <a class=css::link href=href download=download_name>
                {name}
            </a>
            {modified.map(|date| view! { <span class=css::date>{date}</span> })}
            <div class=css::actions>
                {previewable.then(|| view! {
                    <button
                        class=css::action
                        on:click=move |_| ctx.open_popup(preview_src.clone())
                    >
                        <Icon icon=ic::VIEW />
                        "View"
                    </button>
                })}
                <button
                    class=css::action
                    on:click=move |_| start_rename(ctx, rename_from.clone())
                >
                    <Icon icon=ic::RENAME />
                    "Rename"
                </button>
            </div>
        </li>
    }
}

/// Prompt for a new name and run the rename flow, refreshing on success.
fn start_rename(ctx: AppContext, old_name: String) {
    let answer = dom::prompt(RENAME_PROMPT, &old_name);
    spawn_local(async move {
        if rename_file(&ctx.api, &ctx.toasts, &old_name, answer).await == RenameOutcome::Renamed {
            ctx.refresh_files();
        }
    });
}
