//! Live-edit filtering.
//!
//! [`normalize`] runs on every keystroke. It never trims zeros and never
//! drops a trailing decimal point, so text like `"00000.10000"` or `"-28."`
//! survives while the user is still typing. Reshaping happens once, on commit
//! (see [`commit_non_empty`](crate::commit_non_empty)).
//!
//! The passes (comma mapping, alphabet filter, single-point collapse, zero
//! padding, sign reinsertion) are fused into one forward loop over the input.

use crate::sign::{MINUS, has_negative_prefix};

pub(crate) const POINT: char = '.';
const COMMA: char = ',';
const BARE_MINUS: &str = "-";

/// Filters raw keystroke text into normalized decimal text.
///
/// - A bare `"-"` is returned as is, whatever the policy, so the user can
///   go on typing. Commit and the policy flip take care of it later.
/// - `,` is read as a decimal separator.
/// - Only ASCII digits and the first decimal point survive.
/// - A leading point gets a `0` in front of it.
/// - An adjacency-valid sign is put back in front when `allows_negative`.
///
/// Input with no numeric content yields an empty string, not `"0"`.
///
/// # Examples
///
/// ```rust
/// use decimal_field::normalize;
///
/// assert_eq!(normalize("hell0wor1d!", true), "01");
/// assert_eq!(normalize("71.2.0.3", true), "71.203");
/// assert_eq!(normalize("82,6", true), "82.6");
/// assert_eq!(normalize("abc -935z", true), "-935");
/// assert_eq!(normalize("-783", false), "783");
/// assert_eq!(normalize(".", true), "0.");
/// assert_eq!(normalize("ZeroOneTwoThree", true), "");
/// ```
pub fn normalize(input: &str, allows_negative: bool) -> String {
    if input == BARE_MINUS {
        return input.to_owned();
    }

    let signed = allows_negative && has_negative_prefix(input);

    // Room for the sign and a padding zero.
    let mut out = String::with_capacity(input.len() + 2);
    if signed {
        out.push(MINUS);
    }
    let body_start = out.len();
    let mut seen_point = false;

    for ch in input.chars() {
        let ch = if ch == COMMA { POINT } else { ch };
        if ch.is_ascii_digit() {
            out.push(ch);
        } else if ch == POINT && !seen_point {
            if out.len() == body_start {
                out.push('0');
            }
            out.push(POINT);
            seen_point = true;
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_stays_empty() {
        assert_eq!(normalize("", true), "");
    }

    #[test]
    fn letters_are_dropped() {
        assert_eq!(normalize("ZeroOneTwoThree", true), "");
        assert_eq!(normalize("hell0wor1d!", true), "01");
    }

    #[test]
    fn digits_pass_through() {
        assert_eq!(normalize("1234567890", true), "1234567890");
        assert_eq!(normalize("3.15", true), "3.15");
    }

    #[test]
    fn bare_minus_is_kept_while_typing() {
        assert_eq!(normalize("-", true), "-");
    }

    #[test]
    fn bare_minus_is_kept_regardless_of_policy() {
        assert_eq!(normalize("-", false), "-");
    }

    #[test]
    fn stray_dashes_are_removed() {
        assert_eq!(normalize("2-1", true), "21");
        assert_eq!(normalize("5-", true), "5");
        assert_eq!(normalize("- 125", true), "125");
    }

    #[test]
    fn sign_survives_surrounding_noise() {
        assert_eq!(normalize("-321", true), "-321");
        assert_eq!(normalize("abc -935z", true), "-935");
    }

    #[test]
    fn sign_dropped_when_disallowed() {
        assert_eq!(normalize("-783", false), "783");
        assert_eq!(normalize("- 125", false), "125");
    }

    #[test]
    fn only_first_point_is_kept() {
        assert_eq!(normalize("71.2.0.3", true), "71.203");
        assert_eq!(normalize("1.3.0.5", true), "1.305");
        assert_eq!(normalize("..", true), "0.");
    }

    #[test]
    fn comma_reads_as_point() {
        assert_eq!(normalize("82,6", true), "82.6");
        assert_eq!(normalize("0,0", true), "0.0");
        assert_eq!(normalize("1,2.3", true), "1.23");
    }

    #[test]
    fn leading_point_gets_zero() {
        assert_eq!(normalize(".", true), "0.");
        assert_eq!(normalize(".5", true), "0.5");
        assert_eq!(normalize("x.5", true), "0.5");
    }

    #[test]
    fn signed_leading_point_is_not_a_sign() {
        // '-' followed by '.' is noise
        assert_eq!(normalize("-.5", true), "0.5");
    }

    #[test]
    fn untrimmed_input_is_left_alone() {
        assert_eq!(normalize("00000.10000", true), "00000.10000");
        assert_eq!(normalize("-28.", true), "-28.");
    }
}
