//! Upload entry point.
//!
//! The logo opens a hidden native file picker; choosing a file starts the
//! upload flow.

use leptos::{ev, html, prelude::*};
use leptos_icons::Icon;
use wasm_bindgen_futures::spawn_local;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::APP_NAME;
use crate::core::{SelectedFile, UploadOutcome, upload_selected};

stylance::import_crate_style!(css, "src/components/upload.module.css");

#[component]
pub fn UploadLogo() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let input_ref = NodeRef::<html::Input>::new();

    let open_picker = move |_: ev::MouseEvent| {
        if let Some(input) = input_ref.get() {
            input.click();
        }
    };

    let on_change = move |_: ev::Event| {
        let Some(input) = input_ref.get() else {
            return;
        };
        let selection = input
            .files()
            .and_then(|files| files.get(0))
            .map(|file| SelectedFile {
                name: file.name(),
                size_bytes: file.size() as u64,
                file,
            });

        spawn_local(async move {
            if upload_selected(&ctx.api, &ctx.toasts, selection).await == UploadOutcome::Uploaded
            {
                input.set_value("");
                ctx.show_files();
            }
        });
    };

    view! {
        <button
            class=css::logo
            on:click=open_picker
            title="Upload a file"
            aria-label="Upload a file"
        >
            <Icon icon=ic::UPLOAD />
            {APP_NAME}
        </button>
        <input
            type="file"
            class=css::hiddenInput
            node_ref=input_ref
            on:change=on_change
        />
    }
}
