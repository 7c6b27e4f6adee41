use super::helper_constants::{
    FOUR_DIGIT_AREA_SECOND, FOUR_DIGIT_AREA_THIRD, THREE_DIGIT_AREA_SECOND,
    TWO_DIGIT_AREA_SECOND,
};

/// Guesses the area-code length of `digits` from its second and third digit.
///
/// This is the structural last-resort used when the area-code table has no
/// entry for a prefix; a table hit always takes precedence. The same chain
/// drives segment boundaries in the fixed-line formatter, so classification
/// and display can never disagree about a prefix length.
pub(crate) fn heuristic_area_code_len(digits: &str) -> Option<usize> {
    let mut chars = digits.chars().skip(1);
    let second = chars.next()?;
    let third = chars.next();

    // 0120, 0570 and the rural 4-digit codes share 0[1-5] second digits.
    if FOUR_DIGIT_AREA_SECOND.contains(second)
        && third.is_some_and(|c| FOUR_DIGIT_AREA_THIRD.contains(c))
    {
        return Some(4);
    }
    // 075 (京都), 078 (神戸) and the other 0[6-9]X codes. A zero third digit
    // would be a mobile block, never an area code.
    if THREE_DIGIT_AREA_SECOND.contains(second) && third.is_some_and(|c| c != '0') {
        return Some(3);
    }
    // 03 (東京), 06 (大阪).
    if TWO_DIGIT_AREA_SECOND.contains(second) {
        return Some(2);
    }
    None
}

/// Placeholder region string for a prefix that is structurally a fixed line
/// but absent from the table, e.g. 「3桁市外局番地域」.
pub(super) fn placeholder_region(area_code_len: usize) -> String {
    let mut buf = itoa::Buffer::new();
    let len_str = buf.format(area_code_len);
    fast_cat::concat_str!(len_str, "桁市外局番地域")
}
