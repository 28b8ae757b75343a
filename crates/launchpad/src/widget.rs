//! The counter display widget.
//!
//! One heading, a tagline, an info block (status, environment mode, badges)
//! and a button whose label carries the number of times it was activated.
//! Everything except the button label is fixed once the widget exists.

use crate::config::PageContent;
use crate::environment::ModeSource;
use crate::error::{Error, Result};
use crate::markup::Element;
use crate::message::{ActivateMsg, Message};
use crate::{Model, Outcome};

/// Counter widget state.
///
/// The count lives in the widget and is changed only by
/// [`CounterWidget::on_activate`], directly or through an [`ActivateMsg`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterWidget {
    count: u64,
    mode: String,
    content: PageContent,
}

impl CounterWidget {
    /// Create a widget with the stock page content.
    ///
    /// The mode source is consulted once, here.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ModeUnavailable`] if the source has no mode.
    pub fn new<S: ModeSource + ?Sized>(source: &S) -> Result<Self> {
        Self::with_content(PageContent::default(), source)
    }

    /// Create a widget with custom page content.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ModeUnavailable`] if the source has no mode.
    pub fn with_content<S: ModeSource + ?Sized>(content: PageContent, source: &S) -> Result<Self> {
        let mode = source.current_mode().ok_or(Error::ModeUnavailable)?;
        tracing::debug!(mode = %mode, "counter widget created");
        Ok(Self {
            count: 0,
            mode,
            content,
        })
    }

    /// Start counting from `count` instead of zero.
    #[must_use]
    pub fn starting_at(mut self, count: u64) -> Self {
        self.count = count;
        self
    }

    /// Number of activations so far.
    #[must_use]
    pub const fn count(&self) -> u64 {
        self.count
    }

    /// Environment mode captured at construction.
    #[must_use]
    pub fn mode(&self) -> &str {
        &self.mode
    }

    /// Page copy this widget renders.
    #[must_use]
    pub const fn content(&self) -> &PageContent {
        &self.content
    }

    /// Current button text, e.g. `Click me! (3)`.
    #[must_use]
    pub fn button_label(&self) -> String {
        self.content.button_label(self.count)
    }

    /// Handle one activation: bump the count by one.
    ///
    /// Saturates at `u64::MAX` so the displayed value never goes backwards.
    pub fn on_activate(&mut self) {
        self.count = self.count.saturating_add(1);
        tracing::debug!(count = self.count, "counter activated");
    }

    /// Build the markup tree for a given count.
    #[must_use]
    pub fn tree(&self, count: u64) -> Element {
        let content = &self.content;
        let badges = content
            .badges
            .iter()
            .map(|badge| Element::new("span").class("badge").text(badge.as_str()));

        Element::new("div")
            .child(Element::new("h1").text(content.title.as_str()))
            .child(Element::new("p").text(content.tagline.as_str()))
            .child(
                Element::new("div")
                    .class("info")
                    .child(labelled("Status:", &content.status))
                    .child(labelled("Environment:", &self.mode))
                    .child(Element::new("div").children(badges)),
            )
            .child(
                Element::new("button")
                    .id(content.button_id.as_str())
                    .attr("type", "button")
                    .text(content.button_label(count)),
            )
    }

    /// Render the widget markup for a given count.
    #[must_use]
    pub fn render(&self, count: u64) -> String {
        self.tree(count).render()
    }
}

fn labelled(label: &str, value: &str) -> Element {
    Element::new("p")
        .child(Element::new("strong").text(label))
        .text(format!(" {value}"))
}

impl Model for CounterWidget {
    fn update(&mut self, msg: Message) -> Outcome {
        if msg.is::<ActivateMsg>() {
            self.on_activate();
            Outcome::Changed
        } else {
            Outcome::Unchanged
        }
    }

    fn view(&self) -> String {
        self.render(self.count)
    }
}
