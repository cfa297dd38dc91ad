// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Shared test harness for space-list-ui component tests.
//
// Provides mount/cleanup helpers and Dioxus rendering helpers so that
// individual test files stay focused on assertions rather than boilerplate.
#![allow(dead_code)]

use dioxus::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

// ---------------------------------------------------------------------------
// DOM helpers
// ---------------------------------------------------------------------------

/// Create a fresh `<div>`, attach it to `<body>`, and return it.
pub fn create_mount_point() -> web_sys::Element {
    let document = gloo_utils::document();
    let div = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&div).unwrap();
    div
}

/// Remove the mount-point from `<body>` so subsequent tests start clean.
pub fn cleanup(mount: &web_sys::Element) {
    gloo_utils::document()
        .body()
        .unwrap()
        .remove_child(mount)
        .ok();
}

/// Query a single element under `mount`, panicking with the selector on a miss.
pub fn find(mount: &web_sys::Element, selector: &str) -> web_sys::HtmlElement {
    mount
        .query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("no element matches {selector}"))
        .dyn_into::<web_sys::HtmlElement>()
        .unwrap()
}

pub fn count(mount: &web_sys::Element, selector: &str) -> u32 {
    mount.query_selector_all(selector).unwrap().length()
}

// ---------------------------------------------------------------------------
// Dioxus rendering helpers
// ---------------------------------------------------------------------------

/// Render a Dioxus component into the given mount element.
pub fn render_into(mount: &web_sys::Element, root: fn() -> Element) {
    let cfg = dioxus::web::Config::new().rootelement(mount.clone());
    dioxus::web::launch::launch_virtual_dom(VirtualDom::new(root), cfg);
}

/// Yield to the browser event loop so Dioxus can process pending mutations.
pub async fn yield_now() {
    for _ in 0..2 {
        let promise = js_sys::Promise::new(&mut |resolve, _| {
            // requestAnimationFrame fires after the current microtask queue is drained
            // and before the next paint, giving Dioxus time to apply its mutations.
            gloo_utils::window()
                .request_animation_frame(&resolve)
                .unwrap();
        });
        JsFuture::from(promise).await.unwrap();
    }
}

/// Render `root` into `mount` and wait for the first frame.
pub async fn mount_dioxus(root: fn() -> Element, mount: &web_sys::Element) {
    render_into(mount, root);
    yield_now().await;
}
