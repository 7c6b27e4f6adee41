/// The minimum digit count of a complete Japanese domestic number.
pub const MIN_DOMESTIC_DIGITS: usize = 10;
/// The maximum digit count of any Japanese domestic number, mobile or fixed.
pub const MAX_DOMESTIC_DIGITS: usize = 11;

/// Every Japanese domestic number begins with the trunk prefix.
pub const TRUNK_PREFIX: char = '0';

/// Second digits valid for a mobile number (060/070/080/090 blocks).
pub const MOBILE_SECOND_DIGITS: &'static str = "6789";

// Structural area-code-length heuristics, applied only when the table has no
// entry for a prefix. Keyed off the second and third digit of the number.
pub const FOUR_DIGIT_AREA_SECOND: &'static str = "12345";
pub const FOUR_DIGIT_AREA_THIRD: &'static str = "02579";
pub const THREE_DIGIT_AREA_SECOND: &'static str = "6789";
pub const TWO_DIGIT_AREA_SECOND: &'static str = "123456";

pub const REASON_NO_TRUNK_PREFIX: &'static str = "0から始まる番号ではありません";
pub const REASON_TOO_MANY_DIGITS: &'static str = "桁数が多すぎます（最大11桁）";
pub const REASON_UNCLASSIFIABLE: &'static str = "電話番号として判定できません";
