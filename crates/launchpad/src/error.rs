//! Error types for launchpad.
//!
//! Activating the counter never fails. Errors only come from the places where
//! the widget meets its host: the mode source, the page it mounts into, the
//! config file and the exported document.

use std::io;

/// Errors raised while building, mounting or exporting the template page.
///
/// # Example
///
/// ```rust
/// use launchpad::{CounterWidget, Error, ModeSource};
///
/// struct Unset;
///
/// impl ModeSource for Unset {
///     fn current_mode(&self) -> Option<String> {
///         None
///     }
/// }
///
/// assert!(matches!(CounterWidget::new(&Unset), Err(Error::ModeUnavailable)));
/// ```
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The environment collaborator did not provide a mode string.
    ///
    /// The widget cannot render its environment paragraph without one, so
    /// construction stops here instead of showing a placeholder.
    #[error("environment mode is not available")]
    ModeUnavailable,

    /// The host page has no element matching the mount selector.
    #[error("mount point `{selector}` not found in the host page")]
    MountPointMissing {
        /// Selector that was queried.
        selector: String,
    },

    /// The counter button disappeared after the markup was injected.
    #[error("counter button `#{id}` not found after mounting")]
    ButtonMissing {
        /// Element id the widget rendered for its button.
        id: String,
    },

    /// Exported documents need an `#id` mount selector to build the container.
    #[error("unsupported mount selector `{selector}`: expected `#id`")]
    UnsupportedSelector {
        /// Selector from the page content.
        selector: String,
    },

    /// The page content file is not valid TOML or has the wrong shape.
    #[error("invalid page content: {0}")]
    Config(#[from] toml::de::Error),

    /// Reading the config file or writing an export failed.
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// A specialized [`Result`] type for launchpad operations.
pub type Result<T> = std::result::Result<T, Error>;
