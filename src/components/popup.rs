//! Image preview overlay.
//!
//! One overlay instance lives for the whole app; opening it only swaps the
//! image source, so repeated opens leave nothing behind.

use leptos::{ev, html, prelude::*};
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::models::PopupState;

stylance::import_crate_style!(css, "src/components/popup.module.css");

/// Close the popup on Escape anywhere in the document.
///
/// Registered once for the app lifetime.
pub fn setup_escape_listener(ctx: AppContext) {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::prelude::Closure;

        let closure = Closure::wrap(Box::new(move |event: web_sys::KeyboardEvent| {
            let key = event.key();
            ctx.popup.maybe_update(|popup| popup.handle_key(&key));
        }) as Box<dyn Fn(web_sys::KeyboardEvent)>);

        if let Some(document) = crate::utils::dom::document() {
            let _ = document
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = ctx;
}

#[component]
pub fn ImagePopup() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let overlay_ref = NodeRef::<html::Div>::new();

    let is_open = Signal::derive(move || ctx.popup.with(PopupState::is_open));
    let src = Signal::derive(move || {
        ctx.popup
            .with(|p| p.src().map(String::from))
            .unwrap_or_default()
    });

    // Move focus into the overlay whenever it opens
    Effect::new(move |_| {
        if is_open.get()
            && let Some(overlay) = overlay_ref.get()
        {
            let _ = overlay.focus();
        }
    });

    let overlay_class = move || {
        if is_open.get() {
            format!("{} {}", css::overlay, css::open)
        } else {
            css::overlay.to_string()
        }
    };

    view! {
        <div
            class=overlay_class
            node_ref=overlay_ref
            tabindex="-1"
            role="dialog"
            aria-modal="true"
            aria-label="Image preview"
            aria-hidden=move || (!is_open.get()).to_string()
            on:click=move |_| ctx.close_popup()
        >
            <div class=css::panel on:click=|e: ev::MouseEvent| e.stop_propagation()>
                <img class=css::image src=src alt="Preview" />
                <div class=css::actions>
                    <a class=css::button href=src download="">
                        <Icon icon=ic::DOWNLOAD />
                        "Download"
                    </a>
                    <button class=css::button on:click=move |_| ctx.close_popup()>
                        <Icon icon=ic::CLOSE />
                        "Close"
                    </button>
                </div>
            </div>
        </div>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use crate::components::testing::{mount_point, query_all, text_of};
    use crate::utils::dom;
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::{KeyboardEvent, KeyboardEventInit};

    wasm_bindgen_test_configure!(run_in_browser);

    fn press(key: &str) {
        let init = KeyboardEventInit::new();
        init.set_key(key);
        let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
        dom::document().unwrap().dispatch_event(&event).unwrap();
    }

    #[wasm_bindgen_test]
    fn escape_on_document_closes_popup() {
        let owner = Owner::new();
        owner.with(|| {
            let ctx = AppContext::new();
            setup_escape_listener(ctx);

            ctx.open_popup("/received_files/a.png".to_string());
            press("Enter");
            assert!(ctx.popup.get_untracked().is_open());

            press("Escape");
            assert_eq!(ctx.popup.get_untracked(), PopupState::Closed);
        });
    }

    #[wasm_bindgen_test]
    async fn close_button_hides_overlay() {
        let root = mount_point();
        let _handle = mount_to(root.clone(), || {
            let ctx = AppContext::new();
            ctx.open_popup("/received_files/b.png".to_string());
            provide_context(ctx);
            view! { <ImagePopup /> }
        });

        let overlay = root.query_selector("[role=dialog]").unwrap().expect("overlay");
        let image = root.query_selector("img").unwrap().expect("image");
        assert_eq!(
            image.get_attribute("src").as_deref(),
            Some("/received_files/b.png")
        );
        assert_eq!(overlay.get_attribute("aria-hidden").as_deref(), Some("false"));

        let close = query_all(&root, "button")
            .into_iter()
            .find(|b| text_of(b) == "Close")
            .expect("close button");
        close.unchecked_into::<web_sys::HtmlElement>().click();
        TimeoutFuture::new(10).await;

        assert_eq!(overlay.get_attribute("aria-hidden").as_deref(), Some("true"));
    }
}
