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

use super::enums::PhoneNumberType;

/// The outcome of classifying one input string.
///
/// Every classification path produces a fully populated result; there is no
/// error variant. "Invalid so far" is a normal state for a value that is
/// re-classified on every keystroke.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationResult {
    /// Whether the input is plausibly a complete Japanese domestic number.
    pub is_valid: bool,
    /// Whether the number is plausibly held by an individual or ordinary
    /// organization. False for service numbers and for anything invalid.
    pub is_general: bool,
    pub number_type: PhoneNumberType,
    /// Place name for fixed-line numbers; absent for every other type.
    pub region: Option<String>,
    /// True when the matched area code lies in the Kinki (近畿) area.
    ///
    /// Mobile results carry `true` unconditionally, for compatibility with
    /// existing consumers; on mobile numbers treat it as a pass-through
    /// flag, not a geographic claim.
    pub is_kinki: bool,
    /// Human-readable explanation of the verdict. Diagnostic only; branch on
    /// `number_type`, never on this text.
    pub reason: String,
}

impl ClassificationResult {
    pub(super) fn invalid(number_type: PhoneNumberType, reason: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            is_general: false,
            number_type,
            region: None,
            is_kinki: false,
            reason: reason.into(),
        }
    }
}

/// Result of the fixed-line convenience check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedLineCheck {
    pub is_fixed: bool,
    /// Region of the matched area code, when the number is a fixed line.
    pub region: Option<String>,
}
