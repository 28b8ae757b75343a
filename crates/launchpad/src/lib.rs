#![forbid(unsafe_code)]

//! # Launchpad
//!
//! A deployment template page built on The Elm Architecture: a greeting, a
//! status block showing the environment mode, and a button that counts its
//! own clicks.
//!
//! The crate is platform independent. It owns the widget state, renders the
//! markup as a string and exposes a headless simulator. The browser binding
//! lives in `launchpad-wasm`; the `launchpad` binary prerenders pages for
//! deployment pipelines.
//!
//! ## Example
//!
//! ```rust
//! use launchpad::{CounterWidget, FixedMode};
//!
//! let mut widget = CounterWidget::new(&FixedMode::new("production")).unwrap();
//! assert_eq!(widget.button_label(), "Click me! (0)");
//!
//! widget.on_activate();
//! assert_eq!(widget.button_label(), "Click me! (1)");
//! ```

pub mod config;
pub mod environment;
pub mod error;
pub mod markup;
pub mod message;
pub mod page;
pub mod simulator;
pub mod widget;

#[cfg(feature = "cli")]
pub mod cli;

pub use config::PageContent;
pub use environment::{BuildMode, FixedMode, ModeSource};
pub use error::{Error, Result};
pub use message::{ActivateMsg, Message};
pub use page::Document;
pub use simulator::WidgetSimulator;
pub use widget::CounterWidget;

/// Result of feeding a message to a [`Model`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// State changed; the runtime should refresh what it displays.
    Changed,
    /// Message was not relevant to this model.
    Unchanged,
}

impl Outcome {
    /// Whether the view needs refreshing.
    #[must_use]
    pub const fn is_changed(self) -> bool {
        matches!(self, Self::Changed)
    }
}

/// The Elm Architecture contract for anything a runtime can drive.
///
/// Runtimes deliver messages one at a time through [`Model::update`] and ask
/// for fresh markup with [`Model::view`]. Models never perform side effects
/// themselves.
pub trait Model {
    /// Apply a message to the model.
    fn update(&mut self, msg: Message) -> Outcome;

    /// Render the current state as markup.
    fn view(&self) -> String;
}
