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

/// Reduces a raw input string to its decimal digits.
///
/// Any Unicode decimal digit (full-width `０`–`９` included) is normalized
/// to its ASCII form first, then every remaining non-digit character is
/// dropped. For plain ASCII input this is exactly "strip everything that is
/// not `0`-`9`".
pub(crate) fn strip_to_digits(raw: &str) -> String {
    let normalized = dec_from_char::normalize_decimals(raw);
    normalized.chars().filter(|c| c.is_ascii_digit()).collect()
}
