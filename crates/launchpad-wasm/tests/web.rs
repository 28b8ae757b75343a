//! Browser tests for mounting and clicking the counter.
//!
//! Run with: wasm-pack test --headless --chrome

#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, Element, HtmlElement, window};

wasm_bindgen_test_configure!(run_in_browser);

// === Helper Functions ===

fn get_document() -> Document {
    window()
        .expect("no window")
        .document()
        .expect("no document")
}

fn create_test_container(id: &str) -> Element {
    let doc = get_document();
    let container = doc.create_element("div").expect("create div failed");
    container.set_id(id);
    doc.body()
        .expect("no body")
        .append_child(&container)
        .expect("append failed");
    container
}

fn cleanup_container(id: &str) {
    if let Some(element) = get_document().get_element_by_id(id) {
        element.remove();
    }
}

fn button_in(container: &Element) -> HtmlElement {
    container
        .query_selector("#counter")
        .expect("valid selector")
        .expect("button rendered")
        .dyn_into::<HtmlElement>()
        .expect("button is an HtmlElement")
}

fn mount(selector: &str) -> launchpad_wasm::MountedApp {
    launchpad_wasm::mount(selector).unwrap_or_else(|_| panic!("mount into {selector} failed"))
}

// === Tests ===

#[wasm_bindgen_test]
fn test_version() {
    assert!(launchpad_wasm::version().contains('.'));
}

#[wasm_bindgen_test]
fn test_mount_renders_initial_label() {
    let container = create_test_container("test-initial");
    let app = mount("#test-initial");

    assert_eq!(app.count(), 0);
    assert_eq!(button_in(&container).text_content().as_deref(), Some("Click me! (0)"));

    let inner = container.inner_html();
    assert!(inner.contains("<h1>"));
    assert_eq!(inner.matches("class=\"badge\"").count(), 3);
    assert!(inner.contains(&format!("<strong>Environment:</strong> {}", app.mode())));

    drop(app);
    cleanup_container("test-initial");
}

#[wasm_bindgen_test]
fn test_clicks_update_label() {
    let container = create_test_container("test-clicks");
    let app = mount("#test-clicks");
    let button = button_in(&container);

    button.click();
    assert_eq!(button.text_content().as_deref(), Some("Click me! (1)"));

    button.click();
    button.click();
    assert_eq!(button.text_content().as_deref(), Some("Click me! (3)"));
    assert_eq!(app.count(), 3);
    assert_eq!(app.label(), "Click me! (3)");

    drop(app);
    cleanup_container("test-clicks");
}

#[wasm_bindgen_test]
fn test_activate_matches_click() {
    let container = create_test_container("test-activate");
    let app = mount("#test-activate");

    app.activate();
    button_in(&container).click();
    assert_eq!(app.count(), 2);
    assert_eq!(
        button_in(&container).text_content().as_deref(),
        Some("Click me! (2)")
    );

    drop(app);
    cleanup_container("test-activate");
}

#[wasm_bindgen_test]
fn test_static_markup_untouched_by_clicks() {
    let container = create_test_container("test-static");
    let app = mount("#test-static");

    let before = container.inner_html();
    let split = |html: &str| html[..html.find("<button").expect("button")].to_string();
    app.activate();
    app.activate();
    let after = container.inner_html();
    assert_eq!(split(&before), split(&after));

    drop(app);
    cleanup_container("test-static");
}

#[wasm_bindgen_test]
fn test_dropped_handle_stops_counting() {
    let container = create_test_container("test-dropped");
    let app = mount("#test-dropped");
    let button = button_in(&container);

    button.click();
    assert_eq!(button.text_content().as_deref(), Some("Click me! (1)"));

    drop(app);
    button.click();
    button.click();
    assert_eq!(button.text_content().as_deref(), Some("Click me! (1)"));

    cleanup_container("test-dropped");
}

#[wasm_bindgen_test]
fn test_detached_handle_keeps_counting() {
    let container = create_test_container("test-detached");
    mount("#test-detached").detach();
    let button = button_in(&container);

    button.click();
    button.click();
    assert_eq!(button.text_content().as_deref(), Some("Click me! (2)"));

    cleanup_container("test-detached");
}

#[wasm_bindgen_test]
fn test_missing_mount_point_fails() {
    assert!(launchpad_wasm::mount("#does-not-exist").is_err());
}

#[wasm_bindgen_test]
fn test_mount_with_content() {
    let container = create_test_container("test-content");
    let app = launchpad_wasm::mount_with_content(
        "mount_selector = \"#test-content\"\nbutton_caption = \"Tap\"\nbutton_id = \"tap\"\n",
    )
    .unwrap_or_else(|_| panic!("mount with content failed"));

    let button = container
        .query_selector("#tap")
        .expect("valid selector")
        .expect("button rendered")
        .dyn_into::<HtmlElement>()
        .expect("button is an HtmlElement");
    button.click();
    assert_eq!(button.text_content().as_deref(), Some("Tap (1)"));

    drop(app);
    cleanup_container("test-content");
}

#[wasm_bindgen_test]
fn test_invalid_content_fails() {
    assert!(launchpad_wasm::mount_with_content("not = [valid").is_err());
}
