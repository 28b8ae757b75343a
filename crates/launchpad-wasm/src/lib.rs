//! # launchpad-wasm
//!
//! Browser bindings for the launchpad template page, compiled to WebAssembly.
//!
//! The widget renders into an existing container, and a click listener on
//! its button drives the counter. The browser's event loop is the only
//! dispatcher: each click runs the handler to completion before the next one.
//!
//! ## Quick Start (JavaScript)
//!
//! ```javascript
//! import init, { run } from './launchpad_wasm.js';
//!
//! await init();
//! run(); // mounts into #app
//! ```
//!
//! ## Available APIs
//!
//! - `run()` - Mount into `#app` for the lifetime of the page
//! - `mount(selector)` - Mount into any container, returning a `MountedApp`
//! - `mountWithContent(toml)` - Mount with page copy overridden from TOML
//! - `MountedApp.count()` / `.label()` / `.activate()`
//! - `version()` - Crate version

#![forbid(unsafe_code)]

// Use wee_alloc for smaller binaries (optional)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

use std::cell::RefCell;
use std::rc::Rc;

use launchpad::config::DEFAULT_MOUNT_SELECTOR;
use launchpad::{BuildMode, CounterWidget, Error, Model, PageContent};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::Element;

/// Install the panic hook when the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// A widget mounted into the page.
///
/// Dropping the handle unregisters the click listener and leaves the
/// rendered markup in place, frozen at its last label. Call
/// [`MountedApp::detach`] to keep the listener for the page lifetime instead.
#[wasm_bindgen]
pub struct MountedApp {
    widget: Rc<RefCell<CounterWidget>>,
    button: Element,
    on_click: Option<Closure<dyn FnMut()>>,
}

#[wasm_bindgen]
impl MountedApp {
    /// Number of activations so far.
    #[must_use]
    pub fn count(&self) -> u64 {
        self.widget.borrow().count()
    }

    /// Current button text.
    #[must_use]
    pub fn label(&self) -> String {
        self.widget.borrow().button_label()
    }

    /// Environment mode shown on the page.
    #[must_use]
    pub fn mode(&self) -> String {
        self.widget.borrow().mode().to_string()
    }

    /// Activate the counter the same way a click does.
    pub fn activate(&self) {
        activate(&self.widget, &self.button);
    }

    /// Keep the click listener for the rest of the page's life.
    pub fn detach(mut self) {
        if let Some(on_click) = self.on_click.take() {
            on_click.forget();
        }
    }
}

impl Drop for MountedApp {
    fn drop(&mut self) {
        if let Some(on_click) = self.on_click.take() {
            let _ = self
                .button
                .remove_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
        }
    }
}

fn activate(widget: &RefCell<CounterWidget>, button: &Element) {
    let label = {
        let mut widget = widget.borrow_mut();
        widget.on_activate();
        widget.button_label()
    };
    button.set_text_content(Some(&label));
}

/// Mount the widget into the element matching `selector`.
///
/// # Errors
///
/// Fails if the page has no such element or the button cannot be found
/// after the markup is injected.
#[wasm_bindgen]
pub fn mount(selector: &str) -> Result<MountedApp, JsError> {
    let content = PageContent {
        mount_selector: selector.to_string(),
        ..PageContent::default()
    };
    Ok(mount_content(content)?)
}

/// Mount using page content parsed from TOML.
///
/// # Errors
///
/// Fails on invalid TOML, a missing mount point or a missing button.
#[wasm_bindgen(js_name = "mountWithContent")]
pub fn mount_with_content(toml: &str) -> Result<MountedApp, JsError> {
    let content = PageContent::from_toml_str(toml)?;
    Ok(mount_content(content)?)
}

/// Mount into `#app` and keep the widget alive for the page lifetime.
///
/// # Errors
///
/// Fails if the host page has no `#app` container.
#[wasm_bindgen]
pub fn run() -> Result<(), JsError> {
    match mount(DEFAULT_MOUNT_SELECTOR) {
        Ok(app) => {
            app.detach();
            Ok(())
        }
        Err(err) => {
            web_sys::console::error_1(&JsValue::from_str("launchpad: failed to mount"));
            Err(err)
        }
    }
}

/// Module version information.
#[must_use]
#[wasm_bindgen(js_name = "version")]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn mount_content(content: PageContent) -> launchpad::Result<MountedApp> {
    let selector = content.mount_selector.clone();
    let missing = || Error::MountPointMissing {
        selector: selector.clone(),
    };

    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(missing)?;
    let container = document
        .query_selector(&selector)
        .ok()
        .flatten()
        .ok_or_else(missing)?;

    let button_id = content.button_id.clone();
    let widget = CounterWidget::with_content(content, &BuildMode)?;
    container.set_inner_html(&widget.view());

    let button = container
        .query_selector(&format!("#{button_id}"))
        .ok()
        .flatten()
        .ok_or(Error::ButtonMissing { id: button_id })?;

    let widget = Rc::new(RefCell::new(widget));
    let on_click = {
        let widget = Rc::clone(&widget);
        let button = button.clone();
        Closure::<dyn FnMut()>::new(move || activate(&widget, &button))
    };
    button
        .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
        .map_err(|_| Error::ButtonMissing {
            id: button.id(),
        })?;

    web_sys::console::debug_1(&JsValue::from_str(&format!(
        "launchpad: mounted into {selector}"
    )));

    Ok(MountedApp {
        widget,
        button,
        on_click: Some(on_click),
    })
}
