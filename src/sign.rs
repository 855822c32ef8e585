//! Sign handling for decimal input.
//!
//! A `-` is a sign only when a digit follows it immediately and no digit
//! appeared anywhere before it. Every other dash in the input is noise and is
//! dropped by the filtering passes.
//!
//! # Examples
//!
//! ```rust
//! use decimal_field::{has_negative_prefix, strip_negative_if_disallowed};
//!
//! assert!(has_negative_prefix("abc -935z"));
//! assert!(!has_negative_prefix("2-1"));
//! assert!(!has_negative_prefix("- 125"));
//!
//! assert_eq!(strip_negative_if_disallowed("-123", false), "123");
//! assert_eq!(strip_negative_if_disallowed("-123", true), "-123");
//! ```

pub(crate) const MINUS: char = '-';

/// State of the forward sign scan.
///
/// The scan stops as soon as it meets the first digit, so there is no third
/// "digit seen" state to carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SignScan {
    /// Previous character was anything but a minus.
    Searching,
    /// Previous character was a minus.
    CandidateMinus,
}

impl SignScan {
    fn step(self, ch: char) -> Step {
        if ch.is_ascii_digit() {
            return match self {
                SignScan::CandidateMinus => Step::Signed,
                SignScan::Searching => Step::Unsigned,
            };
        }
        if ch == MINUS {
            Step::Continue(SignScan::CandidateMinus)
        } else {
            Step::Continue(SignScan::Searching)
        }
    }
}

enum Step {
    Continue(SignScan),
    Signed,
    Unsigned,
}

/// Returns true if `text` carries an adjacency-valid leading minus.
///
/// Single forward pass with no backtracking. Only ASCII digits count as
/// digits, matching the alphabet the filters keep.
pub fn has_negative_prefix(text: &str) -> bool {
    let mut state = SignScan::Searching;
    for ch in text.chars() {
        match state.step(ch) {
            Step::Continue(next) => state = next,
            Step::Signed => return true,
            Step::Unsigned => return false,
        }
    }
    false
}

/// Drops a leading `-` when negative numbers are disallowed.
///
/// Nothing but the first character is ever touched. With `allows_negative`
/// set, or without a leading minus, the text comes back unchanged.
pub fn strip_negative_if_disallowed(text: &str, allows_negative: bool) -> String {
    match text.strip_prefix(MINUS) {
        Some(rest) if !allows_negative => rest.to_owned(),
        _ => text.to_owned(),
    }
}
