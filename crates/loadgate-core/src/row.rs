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

//! A single row of a results table.

/// One row of a load-test statistics table.
///
/// Cells are kept in header order as `(label, raw value)` pairs. Labels are
/// stored exactly as the producer wrote them; lookups that must tolerate
/// producer differences go through [`FieldIndex`](crate::FieldIndex).
///
/// Rows are immutable once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultRow {
    cells: Vec<(String, String)>,
}

impl ResultRow {
    /// Create a row from owned `(label, value)` cells.
    pub fn new(cells: Vec<(String, String)>) -> Self {
        Self { cells }
    }

    /// Create a row from any iterator of label/value pairs.
    ///
    /// ```
    /// use loadgate_core::ResultRow;
    ///
    /// let row = ResultRow::from_pairs([("Name", "GET /"), ("Requests", "10")]);
    /// assert_eq!(row.get("Requests"), Some("10"));
    /// ```
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            cells: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Exact-label lookup. Returns the first cell whose label matches.
    pub fn get(&self, label: &str) -> Option<&str> {
        self.cells
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, v)| v.as_str())
    }

    /// Iterate over `(label, value)` cells in header order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.cells.iter().map(|(l, v)| (l.as_str(), v.as_str()))
    }

    /// Column labels in header order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|(l, _)| l.as_str())
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
