//! Static page copy.
//!
//! [`PageContent`] is the single source of truth for every fixed string the
//! template shows. Defaults reproduce the stock template; deployments can
//! override any subset of fields from a TOML file.
//!
//! # Examples
//!
//! ```rust
//! use launchpad::PageContent;
//!
//! let content = PageContent::from_toml_str(r#"title = "Staging box""#).unwrap();
//! assert_eq!(content.title, "Staging box");
//! assert_eq!(content.button_caption, "Click me!");
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Selector of the container the widget mounts into.
pub const DEFAULT_MOUNT_SELECTOR: &str = "#app";

/// Element id of the counter button.
pub const DEFAULT_BUTTON_ID: &str = "counter";

/// Fixed text and element identifiers for the template page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageContent {
    /// Page heading, also used as the document title.
    pub title: String,

    /// Line under the heading.
    pub tagline: String,

    /// Text after the `Status:` label.
    pub status: String,

    /// Badge labels shown under the environment line.
    pub badges: Vec<String>,

    /// Button text before the parenthesized count.
    pub button_caption: String,

    /// Selector of the host container.
    pub mount_selector: String,

    /// Element id given to the counter button.
    pub button_id: String,
}

impl Default for PageContent {
    fn default() -> Self {
        Self {
            title: "🚀 VPS Deployment Template".to_string(),
            tagline: "Your web app is running successfully!".to_string(),
            status: "✅ Live and deployed".to_string(),
            badges: vec![
                "Rust".to_string(),
                "GitHub Actions".to_string(),
                "VPS Ready".to_string(),
            ],
            button_caption: "Click me!".to_string(),
            mount_selector: DEFAULT_MOUNT_SELECTOR.to_string(),
            button_id: DEFAULT_BUTTON_ID.to_string(),
        }
    }
}

impl PageContent {
    /// Parse content from TOML. Missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Config`] for malformed TOML or unknown keys.
    pub fn from_toml_str(input: &str) -> Result<Self> {
        Ok(toml::from_str(input)?)
    }

    /// Load content from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Io`] if the file cannot be read and
    /// [`crate::Error::Config`] if it does not parse.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)?;
        let content = Self::from_toml_str(&raw)?;
        tracing::debug!(path = %path.display(), "loaded page content");
        Ok(content)
    }

    /// Render the button text for a given count.
    #[must_use]
    pub fn button_label(&self, count: u64) -> String {
        format!("{} ({count})", self.button_caption)
    }
}
