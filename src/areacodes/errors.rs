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

use thiserror::Error;

/// Errors raised by the explicit table-loading API.
///
/// Classification itself never returns errors; the infallible loaders
/// (`load_from_path_or_empty`, `load_compiled`) swallow these, log a
/// diagnostic and degrade to an empty table.
#[derive(Debug, Error)]
pub enum TableLoadError {
    #[error("Could not read the area-code table: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not parse the area-code table: {0}")]
    Json(#[from] serde_json::Error),
}
