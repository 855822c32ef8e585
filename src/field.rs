//! Input-surface model.
//!
//! [`DecimalField`] is the state a numeric text-entry widget keeps, minus
//! the widget: the displayed text and the field's policies. A UI layer feeds
//! it [`EditEvent`]s from its own control events and renders
//! [`DecimalField::text`] (or [`DecimalField::PLACEHOLDER`] while empty).
//!
//! | Event                              | Pass                              |
//! |------------------------------------|-----------------------------------|
//! | [`EditEvent::Changed`]             | `normalize`                       |
//! | [`EditEvent::DidBegin`]            | `clear_if_zero`, if enabled       |
//! | [`EditEvent::DidEnd`] / `DidEndOnExit` | `commit_non_empty`, if enabled |
//! | `set_allows_negative_numbers`      | `strip_negative_if_disallowed`    |
//!
//! # Examples
//!
//! ```rust
//! use decimal_field::{DecimalField, EditEvent};
//!
//! let mut field = DecimalField::default();
//! field.handle(EditEvent::Changed("-03,0470".into()));
//! assert_eq!(field.text(), "-03.0470");
//!
//! field.handle(EditEvent::DidEnd);
//! assert_eq!(field.text(), "-3.047");
//!
//! field.set_allows_negative_numbers(false);
//! assert_eq!(field.text(), "3.047");
//! ```

use tracing::{debug, trace};

use crate::config::DecimalFieldConfig;
use crate::processor::{DecimalTextProcessor, TextProcessing};

/// Lifecycle events an input surface forwards to its field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditEvent {
    /// The user edited the text; carries the raw text now in the control.
    Changed(String),
    /// The field gained focus.
    DidBegin,
    /// The field lost focus.
    DidEnd,
    /// Editing ended through the return / done key.
    DidEndOnExit,
}

/// Text and policies of one decimal input field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DecimalField {
    text: String,
    config: DecimalFieldConfig,
}

impl DecimalField {
    /// Shown by the surface while the text is empty.
    pub const PLACEHOLDER: &'static str = "0";

    pub fn new(config: DecimalFieldConfig) -> Self {
        Self {
            text: String::new(),
            config,
        }
    }

    /// Current display text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replaces the text. Every assignment is filtered, so the field never
    /// holds text the live filter would reject.
    pub fn set_text(&mut self, text: &str) {
        self.text = self.processor().process(text);
    }

    pub fn clear_text(&mut self) {
        self.text.clear();
    }

    pub fn config(&self) -> &DecimalFieldConfig {
        &self.config
    }

    pub fn allows_negative_numbers(&self) -> bool {
        self.config.allows_negative_numbers
    }

    /// Updates the negative-number policy and strips a leading minus from
    /// the current text when negatives are no longer allowed.
    pub fn set_allows_negative_numbers(&mut self, allows: bool) {
        if self.config.allows_negative_numbers != allows {
            debug!(allows, "negative-number policy changed");
        }
        self.config.allows_negative_numbers = allows;
        self.text = self.processor().trim_minus_if_needed(&self.text);
    }

    pub fn clear_zero_on_focus(&self) -> bool {
        self.config.clear_zero_on_focus
    }

    pub fn set_clear_zero_on_focus(&mut self, enabled: bool) {
        self.config.clear_zero_on_focus = enabled;
    }

    pub fn trim_on_commit(&self) -> bool {
        self.config.trim_on_commit
    }

    pub fn set_trim_on_commit(&mut self, enabled: bool) {
        self.config.trim_on_commit = enabled;
    }

    /// Dispatches a lifecycle event to the matching pass.
    pub fn handle(&mut self, event: EditEvent) {
        match event {
            EditEvent::Changed(raw) => self.on_text_changed(&raw),
            EditEvent::DidBegin => self.on_focus_gained(),
            EditEvent::DidEnd | EditEvent::DidEndOnExit => self.on_focus_lost(),
        }
    }

    pub fn on_text_changed(&mut self, raw: &str) {
        self.set_text(raw);
        trace!(raw, text = %self.text, "filtered keystroke");
    }

    pub fn on_focus_gained(&mut self) {
        if !self.config.clear_zero_on_focus {
            return;
        }
        self.text = self.processor().clear_zero(&self.text);
        debug!(text = %self.text, "editing began");
    }

    pub fn on_focus_lost(&mut self) {
        if !self.config.trim_on_commit {
            return;
        }
        self.text = self.processor().make_non_empty_trimmed_text(&self.text);
        debug!(text = %self.text, "editing committed");
    }

    fn processor(&self) -> DecimalTextProcessor {
        DecimalTextProcessor::new(self.config.allows_negative_numbers)
    }
}
