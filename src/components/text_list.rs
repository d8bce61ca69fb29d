//! Received text list.
//!
//! Each line is inserted as a text node and copies itself to the clipboard
//! when activated by click, Enter or Space.

use leptos::{ev, prelude::*};
use leptos_icons::Icon;
use wasm_bindgen_futures::spawn_local;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::core::{BrowserClipboard, copy_text};
use crate::models::TextListView;

stylance::import_crate_style!(css, "src/components/text_list.module.css");

#[component]
pub fn TextList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    move || match ctx.text_list.get() {
        TextListView::Loading => view! { <p class=css::placeholder>"Loading…"</p> }.into_any(),
        TextListView::Empty => {
            view! { <p class=css::placeholder>"No text received yet."</p> }.into_any()
        }
        TextListView::Failed => {
            view! { <p class=css::placeholder>"Could not load text."</p> }.into_any()
        }
        TextListView::Lines(lines) => view! {
            <section>
                <h2 class=css::heading>"Recently Received Text"</h2>
                {lines
                    .into_iter()
                    .map(|line| view! { <TextLine line=line /> })
                    .collect_view()}
            </section>
        }
        .into_any(),
    }
}

#[component]
fn TextLine(line: String) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let to_copy = line.clone();
    let copy = Callback::new(move |_: ()| {
        let text = to_copy.clone();
        spawn_local(async move {
            let _ = copy_text(&BrowserClipboard, &ctx.toasts, &text).await;
        });
    });

    let on_keydown = move |e: ev::KeyboardEvent| {
        if matches!(e.key().as_str(), "Enter" | " ") {
            e.prevent_default();
            copy.run(());
        }
    };

    view! {
        <div
            class=css::line
            role="button"
            tabindex="0"
            title="Click to copy"
            on:click=move |_| copy.run(())
            on:keydown=on_keydown
        >
            <span>{line}</span>
            <span class=css::copyIcon aria-hidden="true"><Icon icon=ic::COPY /></span>
        </div>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use crate::components::testing::{mount_point, query_all, text_of};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn renders_one_button_per_line_as_text() {
        let root = mount_point();
        let _handle = mount_to(root.clone(), || {
            let ctx = AppContext::new();
            ctx.text_list
                .set(TextListView::from_lines(&["newest", "<b>bold?</b>", "d/e"]));
            provide_context(ctx);
            view! { <TextList /> }
        });

        let lines = query_all(&root, "[role=button]");
        let texts: Vec<String> = lines
            .iter()
            .filter_map(|line| line.query_selector("span").ok().flatten())
            .map(|span| text_of(&span))
            .collect();
        assert_eq!(texts, vec!["newest", "<b>bold?</b>", "d/e"]);
        assert!(lines.iter().all(|l| l.get_attribute("tabindex").as_deref() == Some("0")));
        assert!(root.query_selector("b").unwrap().is_none());
    }

    #[wasm_bindgen_test]
    fn renders_placeholders() {
        let root = mount_point();
        let _handle = mount_to(root.clone(), || {
            let ctx = AppContext::new();
            ctx.text_list.set(TextListView::Failed);
            provide_context(ctx);
            view! { <TextList /> }
        });

        assert_eq!(text_of(&root), "Could not load text.");
        assert!(query_all(&root, "[role=button]").is_empty());
    }
}
