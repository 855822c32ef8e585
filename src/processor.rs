//! Processor objects bound to a negative-number policy.
//!
//! The free functions in this crate take the policy as an argument on every
//! call. Input surfaces usually want one value that carries it instead; that
//! is what [`DecimalTextProcessor`] is. [`BasicTextProcessor`] is the older,
//! simpler keystroke filter kept for fields that do not need point collapsing.

use crate::commit::{clear_if_zero, commit_non_empty};
use crate::normalize::{POINT, normalize};
use crate::sign::{MINUS, strip_negative_if_disallowed};

/// A keystroke filter: maps whatever the user typed to displayable text.
pub trait TextProcessing: Send + Sync {
    fn process(&self, text: &str) -> String;
}

/// Decimal text processor with a fixed negative-number policy.
///
/// ```rust
/// use decimal_field::{DecimalTextProcessor, TextProcessing};
///
/// let processor = DecimalTextProcessor::new(false);
/// assert_eq!(processor.process("-783"), "783");
/// assert_eq!(processor.make_non_empty_trimmed_text("00.350"), "0.35");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecimalTextProcessor {
    allows_negative_numbers: bool,
}

impl DecimalTextProcessor {
    pub fn new(allows_negative_numbers: bool) -> Self {
        Self {
            allows_negative_numbers,
        }
    }

    pub fn allows_negative_numbers(&self) -> bool {
        self.allows_negative_numbers
    }

    /// See [`strip_negative_if_disallowed`].
    pub fn trim_minus_if_needed(&self, text: &str) -> String {
        strip_negative_if_disallowed(text, self.allows_negative_numbers)
    }

    /// See [`clear_if_zero`].
    pub fn clear_zero(&self, text: &str) -> String {
        clear_if_zero(text)
    }

    /// See [`commit_non_empty`].
    pub fn make_non_empty_trimmed_text(&self, text: &str) -> String {
        commit_non_empty(text, self.allows_negative_numbers)
    }
}

impl Default for DecimalTextProcessor {
    fn default() -> Self {
        Self::new(true)
    }
}

impl TextProcessing for DecimalTextProcessor {
    fn process(&self, text: &str) -> String {
        normalize(text, self.allows_negative_numbers)
    }
}

/// Minimal keystroke filter.
///
/// Keeps a `-` only when it is the very first character, then keeps digits
/// and points as typed. Points are not collapsed and commas are not mapped.
///
/// ```rust
/// use decimal_field::{BasicTextProcessor, TextProcessing};
///
/// let processor = BasicTextProcessor::default();
/// assert_eq!(processor.process("-321"), "-321");
/// assert_eq!(processor.process("2-1"), "21");
/// assert_eq!(processor.process("1.2.3"), "1.2.3");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BasicTextProcessor {
    allows_negative_numbers: bool,
}

impl BasicTextProcessor {
    pub fn new(allows_negative_numbers: bool) -> Self {
        Self {
            allows_negative_numbers,
        }
    }
}

impl Default for BasicTextProcessor {
    fn default() -> Self {
        Self::new(true)
    }
}

impl TextProcessing for BasicTextProcessor {
    fn process(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        if self.allows_negative_numbers && text.starts_with(MINUS) {
            out.push(MINUS);
        }
        out.extend(text.chars().filter(|ch| ch.is_ascii_digit() || *ch == POINT));
        out
    }
}
