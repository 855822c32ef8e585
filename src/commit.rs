//! Focus-change passes: clearing a zero on focus-gain and reshaping the text
//! into its canonical, non-empty form on commit.
//!
//! # Zero-equivalence
//!
//! Text is *numerically zero* when it reads as a plain decimal literal (an
//! optional `+`/`-`, digits with at most one `.`, at least one digit) whose
//! digits are all `0`. No float parsing is involved, so exponents, `inf` and
//! `nan` are never read as numbers.
//!
//! On commit the degenerate texts `""`, `"."`, `"-"` and `"-."` are zero too.
//!
//! # Examples
//!
//! ```rust
//! use decimal_field::{clear_if_zero, commit_non_empty};
//!
//! assert_eq!(clear_if_zero("0"), "");
//! assert_eq!(clear_if_zero("0.5"), "0.5");
//!
//! assert_eq!(commit_non_empty("-0.0", true), "0");
//! assert_eq!(commit_non_empty("1.05020", true), "1.0502");
//! assert_eq!(commit_non_empty("-03.047", true), "-3.047");
//! assert_eq!(commit_non_empty("31500", true), "31500");
//! ```

use crate::normalize::{POINT, normalize};
use crate::sign::{MINUS, has_negative_prefix};

pub(crate) const ZERO: &str = "0";

/// Returns true if `text` reads as a decimal literal equal to zero.
///
/// Empty or unparseable text is not zero.
pub fn is_numeric_zero(text: &str) -> bool {
    let body = text
        .strip_prefix(MINUS)
        .or_else(|| text.strip_prefix('+'))
        .unwrap_or(text);

    let mut digits = 0usize;
    let mut points = 0usize;
    for ch in body.chars() {
        match ch {
            '0' => digits += 1,
            POINT => points += 1,
            _ => return false,
        }
    }
    digits > 0 && points <= 1
}

/// Returns true if committing `text` should produce `"0"`.
pub fn is_zero_equivalent(text: &str) -> bool {
    matches!(text, "" | "." | "-" | "-.") || is_numeric_zero(text)
}

/// Clears a numerically-zero text so a freshly focused field is blank.
///
/// `"0"`, `"0.0"` and `"-0"` become `""`; anything else, including `"0.5"`,
/// empty or unparseable text, is returned unchanged.
pub fn clear_if_zero(text: &str) -> String {
    if is_numeric_zero(text) {
        String::new()
    } else {
        text.to_owned()
    }
}

/// Reshapes text into its committed display form.
///
/// The result is never empty. It is either `"0"` or a number with no
/// insignificant zeros and no dangling decimal point:
///
/// 1. Zero-equivalent text commits to `"0"`.
/// 2. A leading sign is detached.
/// 3. With a decimal point present, every leading and trailing `0` is
///    trimmed, a single `0` goes back in front of a bare `.`, and a trailing
///    `.` is dropped.
/// 4. Without one, only leading zeros go; `"31500"` keeps its trailing zeros.
/// 5. The sign is reattached when `allows_negative`.
///
/// The text is passed through [`normalize`] first, so stray characters in
/// the input never reach the display.
pub fn commit_non_empty(text: &str, allows_negative: bool) -> String {
    let filtered = normalize(text, allows_negative);
    if is_zero_equivalent(&filtered) {
        return ZERO.to_owned();
    }

    let negative = has_negative_prefix(&filtered);
    let magnitude = if negative {
        filtered.strip_prefix(MINUS).unwrap_or(filtered.as_str())
    } else {
        filtered.as_str()
    };

    let trimmed = if magnitude.contains(POINT) {
        trim_decimal(magnitude)
    } else {
        magnitude.trim_start_matches('0').to_owned()
    };

    if negative && allows_negative {
        let mut out = String::with_capacity(trimmed.len() + 1);
        out.push(MINUS);
        out.push_str(&trimmed);
        out
    } else {
        trimmed
    }
}

/// Trims zero characters around a number that has a decimal point.
///
/// Character-class trim, not rounding: `"00.350"` → `".35"` → `"0.35"`.
fn trim_decimal(magnitude: &str) -> String {
    let trimmed = magnitude.trim_matches('0');

    let mut out = String::with_capacity(trimmed.len() + 1);
    if trimmed.starts_with(POINT) {
        out.push('0');
    }
    out.push_str(trimmed);

    if out.ends_with(POINT) {
        out.pop();
    }
    out
}
