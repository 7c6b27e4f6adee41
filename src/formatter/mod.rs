//! Hyphenated display formatting for Japanese phone numbers.
//!
//! Both formatters are pure string transforms intended for the
//! controlled-input pattern: call on every keystroke, write the result back
//! into the field. Partial input is grouped as far as the digits allow;
//! input that cannot be a domestic number (no trunk prefix) is passed
//! through digits-only, unformatted. Nothing here touches the area-code
//! table; segment boundaries are re-derived from the same digit heuristics
//! the classifier falls back on.

use crate::classifier::helper_constants::{
    MAX_DOMESTIC_DIGITS, MOBILE_SECOND_DIGITS, TRUNK_PREFIX,
};
use crate::classifier::helper_functions::heuristic_area_code_len;
use crate::string_util::strip_to_digits;

/// Formats a mobile number as `XXX-XXXX-XXXX` (3-4-4).
///
/// Digits beyond the 11th are dropped. Input whose second digit rules out a
/// mobile block is returned as bare digits, as is anything not starting
/// with `0`.
pub fn format_mobile(raw: &str) -> String {
    let mut digits = strip_to_digits(raw);
    digits.truncate(MAX_DOMESTIC_DIGITS);

    if !digits.starts_with(TRUNK_PREFIX) {
        return digits;
    }
    if digits.len() >= 2 && !MOBILE_SECOND_DIGITS.contains(&digits[1..2]) {
        return digits;
    }

    match digits.len() {
        0..=3 => digits,
        4..=7 => fast_cat::concat_str!(&digits[..3], "-", &digits[3..]),
        _ => fast_cat::concat_str!(&digits[..3], "-", &digits[3..7], "-", &digits[7..]),
    }
}

/// Formats a fixed-line number, hyphenating at the detected area-code
/// boundary: `AA-BBBB-CCCC`, `AAA-BBB-CCCC` or `AAAA-BBB-CCCC`.
///
/// The area-code length comes from the structural second/third-digit
/// heuristic; when it is inconclusive the 2-digit grouping is used.
pub fn format_fixed(raw: &str) -> String {
    let mut digits = strip_to_digits(raw);
    digits.truncate(MAX_DOMESTIC_DIGITS);

    if !digits.starts_with(TRUNK_PREFIX) {
        return digits;
    }

    match heuristic_area_code_len(&digits).unwrap_or(2) {
        4 => match digits.len() {
            0..=4 => digits,
            5..=7 => fast_cat::concat_str!(&digits[..4], "-", &digits[4..]),
            _ => fast_cat::concat_str!(&digits[..4], "-", &digits[4..7], "-", &digits[7..]),
        },
        3 => match digits.len() {
            0..=3 => digits,
            4..=6 => fast_cat::concat_str!(&digits[..3], "-", &digits[3..]),
            _ => fast_cat::concat_str!(&digits[..3], "-", &digits[3..6], "-", &digits[6..]),
        },
        _ => match digits.len() {
            0..=2 => digits,
            3..=6 => fast_cat::concat_str!(&digits[..2], "-", &digits[2..]),
            _ => fast_cat::concat_str!(&digits[..2], "-", &digits[2..6], "-", &digits[6..]),
        },
    }
}
