//! Headless driver for testing models without a browser.
//!
//! The simulator plays the part of the host runtime: it queues messages,
//! delivers them one at a time in order and records the view after each
//! one, the way a DOM event loop would dispatch clicks.

use std::collections::VecDeque;

use crate::Model;
use crate::message::{ActivateMsg, Message};

/// Statistics tracked during simulation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimulationStats {
    /// Number of times the initial view was produced.
    pub init_calls: usize,
    /// Number of times update() was called.
    pub update_calls: usize,
    /// Number of times view() was called.
    pub view_calls: usize,
    /// Updates that reported a state change.
    pub changes: usize,
}

/// A simulator for testing Model implementations without a browser.
///
/// # Example
///
/// ```rust
/// use launchpad::{CounterWidget, FixedMode, WidgetSimulator};
///
/// let widget = CounterWidget::new(&FixedMode::new("production")).unwrap();
/// let mut sim = WidgetSimulator::new(widget);
/// sim.click_n(3);
///
/// assert_eq!(sim.model().button_label(), "Click me! (3)");
/// assert_eq!(sim.views().len(), 4);
/// ```
pub struct WidgetSimulator<M: Model> {
    model: M,
    input_queue: VecDeque<Message>,
    output_views: Vec<String>,
    stats: SimulationStats,
    initialized: bool,
}

impl<M: Model> WidgetSimulator<M> {
    /// Create a new simulator with the given model.
    pub fn new(model: M) -> Self {
        Self {
            model,
            input_queue: VecDeque::new(),
            output_views: Vec::new(),
            stats: SimulationStats::default(),
            initialized: false,
        }
    }

    /// Capture the initial view. Later calls do nothing.
    pub fn init(&mut self) {
        if self.initialized {
            return;
        }
        self.initialized = true;
        self.stats.init_calls += 1;
        self.stats.view_calls += 1;
        self.output_views.push(self.model.view());
    }

    /// Queue a message for processing.
    pub fn send(&mut self, msg: impl Into<Message>) {
        self.input_queue.push_back(msg.into());
    }

    /// Process one message from the queue, calling update and, on change, view.
    ///
    /// Returns `None` when the queue is empty.
    pub fn step(&mut self) -> Option<crate::Outcome> {
        self.init();

        let msg = self.input_queue.pop_front()?;
        self.stats.update_calls += 1;
        let outcome = self.model.update(msg);
        if outcome.is_changed() {
            self.stats.changes += 1;
            self.stats.view_calls += 1;
            self.output_views.push(self.model.view());
        }
        Some(outcome)
    }

    /// Process all pending messages.
    ///
    /// Returns the number of messages processed.
    pub fn run_until_empty(&mut self) -> usize {
        let mut processed = 0;
        while self.step().is_some() {
            processed += 1;
        }
        processed
    }

    /// Deliver one activation and process it.
    pub fn click(&mut self) {
        self.send(ActivateMsg);
        self.run_until_empty();
    }

    /// Deliver `n` activations and process them.
    pub fn click_n(&mut self, n: usize) {
        for _ in 0..n {
            self.send(ActivateMsg);
        }
        self.run_until_empty();
    }

    /// Get a reference to the current model state.
    pub const fn model(&self) -> &M {
        &self.model
    }

    /// Consume the simulator and return the final model.
    pub fn into_model(self) -> M {
        self.model
    }

    /// Get the simulation statistics.
    pub const fn stats(&self) -> &SimulationStats {
        &self.stats
    }

    /// Get all captured view outputs.
    pub fn views(&self) -> &[String] {
        &self.output_views
    }

    /// Get the most recent view output.
    pub fn last_view(&self) -> Option<&str> {
        self.output_views.last().map(String::as_str)
    }

    /// Number of messages still queued.
    pub fn pending(&self) -> usize {
        self.input_queue.len()
    }
}
