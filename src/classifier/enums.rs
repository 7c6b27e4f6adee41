// Copyright (C) 2025 The jphonenumber Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use strum::{Display, EnumIter};

/// Categorizes a Japanese domestic number based on what its digits can
/// plausibly represent.
///
/// `Incomplete` is deliberately distinct from `Unknown`: it signals "keep
/// typing" to live-input validation, while `Unknown` means the digits can
/// never become a valid domestic number without being re-entered.
#[derive(Debug, Display, EnumIter, Clone, Copy, PartialEq, Eq, Hash)]
#[strum(serialize_all = "lowercase")]
pub enum PhoneNumberType {
    /// **Mobile numbers.**
    /// Eleven digits matching `0[6789]0` followed by an 8-digit subscriber
    /// number.
    Mobile,
    /// **Fixed-line numbers.**
    /// Geographic numbers carrying a 2-5 digit area code, either matched
    /// against the area-code table or inferred structurally.
    Fixed,
    /// **Special service numbers.**
    /// Non-geographic prefixes such as toll-free or navigation dial.
    Special,
    /// **Partial input.**
    /// Starts with the trunk prefix `0` but has fewer than the 10-digit
    /// minimum; expected to grow as the user types.
    Incomplete,
    /// **Unknown.**
    /// Cannot be a Japanese domestic number (wrong trunk prefix, too many
    /// digits, or no classification matched).
    Unknown,
}

/// Known non-geographic special-number classes.
#[derive(Debug, Display, EnumIter, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecialNumberClass {
    /// フリーダイヤル: calls are paid by the recipient.
    TollFree,
    /// ナビダイヤル: single routing number for call centers.
    NaviDial,
}

impl SpecialNumberClass {
    /// Digit prefixes assigned to this class.
    pub fn prefixes(self) -> &'static [&'static str] {
        match self {
            SpecialNumberClass::TollFree => &["0120", "0800"],
            SpecialNumberClass::NaviDial => &["0570"],
        }
    }

    /// Whether numbers of this class are plausibly held by an individual.
    /// All currently known classes are organizational service numbers.
    pub fn is_general(self) -> bool {
        match self {
            SpecialNumberClass::TollFree | SpecialNumberClass::NaviDial => false,
        }
    }

    /// Japanese display name, used as the classification reason.
    pub fn name_ja(self) -> &'static str {
        match self {
            SpecialNumberClass::TollFree => "フリーダイヤル",
            SpecialNumberClass::NaviDial => "ナビダイヤル",
        }
    }
}
