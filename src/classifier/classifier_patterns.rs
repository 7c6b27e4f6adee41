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

use regex::Regex;

/// Helper class holding the compiled patterns used during classification.
/// Built once per classifier instance.
pub(super) struct ClassifierPatterns {
    /// A complete mobile number: trunk prefix, second digit 6-9, third digit
    /// 0, then an 8-digit subscriber number. Must full-match, so the 11-digit
    /// length requirement is part of the pattern.
    pub mobile_pattern: Regex,
}

impl ClassifierPatterns {
    pub fn new() -> Self {
        Self {
            mobile_pattern: Regex::new("0[6789]0[0-9]{8}").expect("Invalid constant pattern!"),
        }
    }
}
