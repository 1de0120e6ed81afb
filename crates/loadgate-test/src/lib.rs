// Dweve Loadgate - Load-test results gate
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Shared test fixtures for Loadgate.
//!
//! Statistics tables shaped like the `*_stats.csv` files different Locust
//! releases write, plus a helper to put one on disk.
//!
//! ```rust
//! use loadgate_test::{fixtures, temp_csv};
//!
//! let file = temp_csv(fixtures::LOCUST_STATS);
//! assert!(file.path().exists());
//! ```

use std::io::Write;
use tempfile::NamedTempFile;

/// Canonical statistics tables.
pub mod fixtures;

/// Type alias for a list of named fixtures.
pub type FixtureList = Vec<(&'static str, &'static str)>;

/// Write `content` to a fresh `.csv` temp file.
///
/// Panics on I/O failure; meant for tests only.
pub fn temp_csv(content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .prefix("loadgate_")
        .suffix("_stats.csv")
        .tempfile()
        .expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write temp file");
    file.flush().expect("Failed to flush temp file");
    file
}
