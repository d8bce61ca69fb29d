//! Mount helpers for browser tests.

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use crate::utils::dom;

/// A fresh `<div>` appended to the document body.
pub fn mount_point() -> HtmlElement {
    let document = dom::document().expect("document");
    let element = document
        .create_element("div")
        .expect("create div")
        .unchecked_into::<HtmlElement>();
    document
        .body()
        .expect("body")
        .append_child(&element)
        .expect("append mount point");
    element
}

/// All elements under `root` matching `selector`, in document order.
pub fn query_all(root: &Element, selector: &str) -> Vec<Element> {
    let nodes = root.query_selector_all(selector).expect("valid selector");
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Trimmed text content of an element.
pub fn text_of(element: &Element) -> String {
    element.text_content().unwrap_or_default().trim().to_string()
}
