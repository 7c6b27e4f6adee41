use std::borrow::Cow;

use log::trace;
use strum::IntoEnumIterator;

use crate::{
    areacodes::AreaCodeTable,
    regex_util::RegexFullMatch,
    string_util::strip_to_digits,
};

use super::{
    classification_result::{ClassificationResult, FixedLineCheck},
    classifier_patterns::ClassifierPatterns,
    enums::{PhoneNumberType, SpecialNumberClass},
    helper_constants::{
        MAX_DOMESTIC_DIGITS, MIN_DOMESTIC_DIGITS, REASON_NO_TRUNK_PREFIX,
        REASON_TOO_MANY_DIGITS, REASON_UNCLASSIFIABLE, TRUNK_PREFIX,
    },
    helper_functions::{heuristic_area_code_len, placeholder_region},
};

/// A fixed-line match and the metadata behind it.
struct FixedLineInfo<'a> {
    region: Cow<'a, str>,
    is_kinki: bool,
}

/// Classifies raw input strings as Japanese domestic phone numbers.
///
/// The classifier owns its [`AreaCodeTable`] (injected at construction,
/// immutable afterwards) and performs no I/O. `classify` is pure and
/// `&self`-only, so one instance can serve any number of concurrently
/// validating form fields.
pub struct PhoneNumberClassifier {
    /// Mapping from area-code prefix to region metadata.
    table: AreaCodeTable,

    /// Helper class holding useful regular expressions.
    patterns: ClassifierPatterns,
}

impl PhoneNumberClassifier {
    /// Builds a classifier over the compiled-in table snapshot.
    pub fn new() -> Self {
        Self::new_for_table(AreaCodeTable::load_compiled())
    }

    /// Builds a classifier over an explicitly loaded table. An empty table is
    /// fine: region lookups miss and fixed-line detection degrades to the
    /// structural placeholder path.
    pub fn new_for_table(table: AreaCodeTable) -> Self {
        Self {
            table,
            patterns: ClassifierPatterns::new(),
        }
    }

    pub fn table(&self) -> &AreaCodeTable {
        &self.table
    }

    /// Classifies `raw` into mobile / fixed / special / incomplete / unknown,
    /// attaching region metadata where the area-code table has it.
    ///
    /// Never panics and never fails: every input, however malformed, yields a
    /// fully populated [`ClassificationResult`]. Meant to be called on every
    /// keystroke of a live input field.
    pub fn classify(&self, raw: &str) -> ClassificationResult {
        let digits = strip_to_digits(raw);

        if !digits.starts_with(TRUNK_PREFIX) {
            return ClassificationResult::invalid(PhoneNumberType::Unknown, REASON_NO_TRUNK_PREFIX);
        }

        if digits.len() < MIN_DOMESTIC_DIGITS {
            let mut buf = itoa::Buffer::new();
            let count_str = buf.format(digits.len());
            return ClassificationResult::invalid(
                PhoneNumberType::Incomplete,
                fast_cat::concat_str!("桁数が不足しています（", count_str, "桁 / 最小10桁）"),
            );
        }

        if digits.len() > MAX_DOMESTIC_DIGITS {
            return ClassificationResult::invalid(PhoneNumberType::Unknown, REASON_TOO_MANY_DIGITS);
        }

        self.classify_number_type(&digits)
    }

    /// Dispatches a 10-11 digit, `0`-leading digit string to its type.
    fn classify_number_type(&self, digits: &str) -> ClassificationResult {
        if self.is_mobile_number(digits) {
            // is_kinki is unconditionally true on mobile results; see
            // ClassificationResult::is_kinki.
            return ClassificationResult {
                is_valid: true,
                is_general: true,
                number_type: PhoneNumberType::Mobile,
                region: None,
                is_kinki: true,
                reason: fast_cat::concat_str!("携帯電話（0", &digits[1..2], "0系）"),
            };
        }

        if let Some(info) = self.lookup_fixed_line(digits) {
            let reason = fast_cat::concat_str!("固定電話（", info.region.as_ref(), "）");
            return ClassificationResult {
                is_valid: true,
                is_general: true,
                number_type: PhoneNumberType::Fixed,
                region: Some(info.region.into_owned()),
                is_kinki: info.is_kinki,
                reason,
            };
        }

        // Special prefixes are tested before the structural fallback; the
        // fallback's digit ranges cover every special prefix and would
        // otherwise shadow them. Table entries still win over special
        // classes because lookup_fixed_line runs first.
        if let Some(class) = identify_special_number(digits) {
            return ClassificationResult {
                is_valid: true,
                is_general: class.is_general(),
                number_type: PhoneNumberType::Special,
                region: None,
                is_kinki: false,
                reason: class.name_ja().to_owned(),
            };
        }

        if let Some(area_code_len) = heuristic_area_code_len(digits) {
            let region = placeholder_region(area_code_len);
            let reason = fast_cat::concat_str!("固定電話（", &region, "）");
            return ClassificationResult {
                is_valid: true,
                is_general: true,
                number_type: PhoneNumberType::Fixed,
                region: Some(region),
                is_kinki: false,
                reason,
            };
        }

        ClassificationResult::invalid(PhoneNumberType::Unknown, REASON_UNCLASSIFIABLE)
    }

    fn is_mobile_number(&self, digits: &str) -> bool {
        self.patterns.mobile_pattern.full_match(digits)
    }

    /// Longest-prefix match against the table, trying the 5-digit partition
    /// down to the 2-digit one. The first hit wins.
    fn lookup_fixed_line<'a>(&'a self, digits: &str) -> Option<FixedLineInfo<'a>> {
        // A mobile number must never resolve as a fixed line, even when a
        // table entry happens to share its prefix.
        if self.is_mobile_number(digits) {
            return None;
        }

        for len in (2..=5).rev() {
            if digits.len() < len {
                continue;
            }
            if let Some(entry) = self.table.lookup(&digits[..len]) {
                trace!("area code {} matched region {}", &digits[..len], entry.region);
                return Some(FixedLineInfo {
                    region: Cow::Borrowed(&entry.region),
                    is_kinki: entry.is_kinki,
                });
            }
        }
        None
    }

    /// True when `raw` is a complete, valid mobile number.
    pub fn is_mobile_phone(&self, raw: &str) -> bool {
        let result = self.classify(raw);
        result.number_type == PhoneNumberType::Mobile && result.is_valid
    }

    /// Fixed-line check, with the matched region when there is one.
    pub fn is_fixed_phone(&self, raw: &str) -> FixedLineCheck {
        let result = self.classify(raw);
        FixedLineCheck {
            is_fixed: result.number_type == PhoneNumberType::Fixed && result.is_valid,
            region: result.region,
        }
    }

    /// True when `raw` is plausibly the number of an individual or ordinary
    /// organization.
    pub fn is_general_phone_number(&self, raw: &str) -> bool {
        let result = self.classify(raw);
        result.is_general && result.is_valid
    }

    /// True when `raw` is a valid Japanese domestic number of any type.
    pub fn is_valid_japanese_phone_number(&self, raw: &str) -> bool {
        self.classify(raw).is_valid
    }
}

impl Default for PhoneNumberClassifier {
    fn default() -> Self {
        Self::new()
    }
}

fn identify_special_number(digits: &str) -> Option<SpecialNumberClass> {
    SpecialNumberClass::iter().find(|class| {
        class
            .prefixes()
            .iter()
            .any(|prefix| digits.starts_with(prefix))
    })
}
