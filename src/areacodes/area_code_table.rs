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

use std::collections::HashMap;
use std::path::Path;

use log::error;
use serde::{Deserialize, Serialize};

use super::errors::TableLoadError;

/// The canonical table snapshot shipped with the crate.
const COMPILED_TABLE_JSON: &str = include_str!("../../resources/area-codes.json");

/// Metadata attached to one area-code prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaCodeEntry {
    /// Human-readable place name. May enumerate several prefectures when the
    /// prefix spans a border, e.g. 「群馬県・埼玉県」.
    pub region: String,
    /// True when the region belongs to the Kinki (近畿) administrative area.
    #[serde(rename = "isKinki", default)]
    pub is_kinki: bool,
}

/// A static mapping from digit prefix (2-5 digits, always starting with `0`)
/// to region metadata, partitioned by prefix length.
///
/// The table is immutable after construction and is meant to be loaded once
/// at application start, then handed to a
/// [`PhoneNumberClassifier`](crate::PhoneNumberClassifier). The partitions
/// match the top-level keys of the external JSON document, so the snapshot
/// can be authored and replaced without touching classifier code.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AreaCodeTable {
    #[serde(rename = "twoDigit")]
    two_digit: HashMap<String, AreaCodeEntry>,
    #[serde(rename = "threeDigit")]
    three_digit: HashMap<String, AreaCodeEntry>,
    #[serde(rename = "fourDigit")]
    four_digit: HashMap<String, AreaCodeEntry>,
    #[serde(rename = "fiveDigit")]
    five_digit: HashMap<String, AreaCodeEntry>,
}

impl AreaCodeTable {
    /// A table with no prefixes at all. Every lookup misses, which pushes
    /// classification onto its structural-fallback path.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Exact-match lookup of `prefix_candidate` within the partition selected
    /// by its length. Candidates outside the 2-5 digit range always miss.
    pub fn lookup(&self, prefix_candidate: &str) -> Option<&AreaCodeEntry> {
        let partition = match prefix_candidate.len() {
            2 => &self.two_digit,
            3 => &self.three_digit,
            4 => &self.four_digit,
            5 => &self.five_digit,
            _ => return None,
        };
        partition.get(prefix_candidate)
    }

    /// Parses a table from the external JSON document format.
    pub fn from_json_str(json: &str) -> Result<Self, TableLoadError> {
        let table = serde_json::from_str(json)?;
        Ok(table)
    }

    /// Reads and parses a table from `path`.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, TableLoadError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Reads a table from `path`, degrading to [`AreaCodeTable::empty`] on
    /// any failure. The failure is logged, never raised; callers stay
    /// functional with region lookups disabled.
    pub fn load_from_path_or_empty<P: AsRef<Path>>(path: P) -> Self {
        match Self::load_from_path(path.as_ref()) {
            Ok(table) => table,
            Err(err) => {
                error!(
                    "Could not load area-code table from {}: {}",
                    path.as_ref().display(),
                    err
                );
                Self::empty()
            }
        }
    }

    /// Parses the compiled-in table snapshot. A corrupt snapshot degrades to
    /// an empty table with a logged diagnostic, same as the path loader.
    pub fn load_compiled() -> Self {
        match Self::from_json_str(COMPILED_TABLE_JSON) {
            Ok(table) => table,
            Err(err) => {
                error!("Could not parse compiled-in area-code table: {}", err);
                Self::empty()
            }
        }
    }

    /// Total number of prefixes across all partitions.
    pub fn len(&self) -> usize {
        self.two_digit.len()
            + self.three_digit.len()
            + self.four_digit.len()
            + self.five_digit.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
