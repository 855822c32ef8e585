//! Decimal text normalization for editable numeric input fields.
//!
//! This crate turns whatever the user types into a well-formed decimal string
//! that a text-entry control can display. It works on strings only and never
//! converts the text into a numeric type.
//!
//! ## What we do
//!
//! - Live-edit filtering on every keystroke ([`normalize`])
//! - Sign handling with an adjacency rule ([`has_negative_prefix`])
//! - Single decimal point enforcement, `,` accepted as a separator
//! - Clearing a zero when the field gains focus ([`clear_if_zero`])
//! - Zero trimming and non-empty text on commit ([`commit_non_empty`])
//! - Retroactive sign stripping on policy change ([`strip_negative_if_disallowed`])
//!
//! ## Pure function guarantee
//!
//! The four passes hold no state, do no I/O and never fail. Every input
//! string has a defined output, and they are linear in the input length.
//!
//! ## Input surfaces
//!
//! A UI layer owns the visible text and calls the passes at four lifecycle
//! points. [`DecimalField`] models that surface without the UI so the whole
//! edit lifecycle can be driven and tested headless.
//!
//! ```rust
//! use decimal_field::{commit_non_empty, normalize, strip_negative_if_disallowed};
//!
//! assert_eq!(normalize("71.2.0.3", true), "71.203");
//! assert_eq!(commit_non_empty("1.05020", true), "1.0502");
//! assert_eq!(strip_negative_if_disallowed("-123", false), "123");
//! ```

mod commit;
mod config;
mod error;
mod field;
mod normalize;
mod processor;
mod sign;

pub use crate::commit::{clear_if_zero, commit_non_empty, is_numeric_zero, is_zero_equivalent};
pub use crate::config::DecimalFieldConfig;
pub use crate::error::ConfigError;
pub use crate::field::{DecimalField, EditEvent};
pub use crate::normalize::normalize;
pub use crate::processor::{BasicTextProcessor, DecimalTextProcessor, TextProcessing};
pub use crate::sign::{has_negative_prefix, strip_negative_if_disallowed};
