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

//! Column-label resolution across producer versions.
//!
//! Locust has renamed its CSV columns several times (`# requests`,
//! `Requests`, `Request Count`, ...). Every logical field therefore has an
//! ordered list of accepted spellings. Labels are compared after
//! [`normalize`], so case, spacing and punctuation never matter, while the
//! candidate order decides which column wins when a table carries more than
//! one spelling.
//!
//! # Examples
//!
//! ```
//! use loadgate_core::{FieldIndex, LogicalField, ResultRow};
//!
//! let row = ResultRow::from_pairs([("# reqs", "42"), ("Name", "GET /")]);
//! let index = FieldIndex::new(&row);
//!
//! assert_eq!(index.field(LogicalField::Requests), Some("42"));
//! assert_eq!(index.field(LogicalField::Failures), None);
//! ```

use crate::row::ResultRow;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

/// The logical columns Loadgate knows how to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LogicalField {
    Name,
    Requests,
    Failures,
    AverageResponseTime,
    P95ResponseTime,
}

impl LogicalField {
    pub const ALL: [LogicalField; 5] = [
        LogicalField::Name,
        LogicalField::Requests,
        LogicalField::Failures,
        LogicalField::AverageResponseTime,
        LogicalField::P95ResponseTime,
    ];

    /// The logical field a raw column label maps to, if any.
    ///
    /// ```
    /// use loadgate_core::LogicalField;
    ///
    /// assert_eq!(LogicalField::recognize("# fails"), Some(LogicalField::Failures));
    /// assert_eq!(LogicalField::recognize("Median Response Time"), None);
    /// ```
    pub fn recognize(label: &str) -> Option<LogicalField> {
        let key = normalize(label);
        Self::ALL.into_iter().find(|field| {
            field
                .candidates()
                .iter()
                .any(|candidate| normalize(candidate) == key)
        })
    }

    /// Accepted spellings, highest priority first.
    pub fn candidates(self) -> &'static [&'static str] {
        match self {
            LogicalField::Name => &["Name", "name"],
            LogicalField::Requests => &[
                "Requests",
                "# requests",
                "# reqs",
                "Request Count",
                "Total Requests",
                "num_requests",
            ],
            LogicalField::Failures => &[
                "Failures",
                "# failures",
                "# fails",
                "Failure Count",
                "Total Failures",
                "num_failures",
            ],
            LogicalField::AverageResponseTime => &[
                "Average response time",
                "Average Response Time",
                "avg_response_time",
            ],
            LogicalField::P95ResponseTime => &["95%", "95th percentile", "p95"],
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LogicalField::Name => "name",
            LogicalField::Requests => "requests",
            LogicalField::Failures => "failures",
            LogicalField::AverageResponseTime => "avg_response_time",
            LogicalField::P95ResponseTime => "p95_response_time",
        }
    }
}

impl fmt::Display for LogicalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lower-case a label and drop every non-alphanumeric character.
///
/// ```
/// use loadgate_core::normalize;
///
/// assert_eq!(normalize("# Requests"), "requests");
/// assert_eq!(normalize("95%"), "95");
/// assert_eq!(normalize("95th percentile"), "95thpercentile");
/// ```
pub fn normalize(label: &str) -> String {
    label
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Normalized-key view of a single row, built once and queried many times.
#[derive(Debug)]
pub struct FieldIndex<'a> {
    by_key: HashMap<String, &'a str>,
}

impl<'a> FieldIndex<'a> {
    /// Index `row` by normalized label. When two labels collapse to the same
    /// key the leftmost column wins.
    pub fn new(row: &'a ResultRow) -> Self {
        let mut by_key = HashMap::with_capacity(row.len());
        for (label, value) in row.iter() {
            by_key.entry(normalize(label)).or_insert(value);
        }
        Self { by_key }
    }

    /// First candidate present with a non-blank value.
    pub fn resolve(&self, candidates: &[&str]) -> Option<&'a str> {
        candidates.iter().find_map(|candidate| {
            self.by_key
                .get(&normalize(candidate))
                .copied()
                .filter(|value| !value.trim().is_empty())
        })
    }

    /// Resolve one of the built-in logical fields.
    pub fn field(&self, field: LogicalField) -> Option<&'a str> {
        self.resolve(field.candidates())
    }
}

/// One-shot lookup; prefer [`FieldIndex`] when several fields are read from
/// the same row.
pub fn resolve<'a>(row: &'a ResultRow, candidates: &[&str]) -> Option<&'a str> {
    FieldIndex::new(row).resolve(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_punctuation_and_case() {
        assert_eq!(normalize("Average Response Time"), "averageresponsetime");
        assert_eq!(normalize("average_response_time"), "averageresponsetime");
        assert_eq!(normalize("  # fails "), "fails");
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("%#!"), "");
    }

    #[test]
    fn test_percentile_labels_stay_distinct() {
        assert_ne!(normalize("95%"), normalize("95th percentile"));
    }

    #[test]
    fn test_request_spellings_collapse() {
        assert_eq!(normalize("# requests"), normalize("Requests"));
        assert_eq!(normalize("num_requests"), "numrequests");
    }

    #[test]
    fn test_resolve_honors_candidate_order() {
        let row = ResultRow::from_pairs([("Total Requests", "7"), ("# requests", "5")]);
        assert_eq!(resolve(&row, LogicalField::Requests.candidates()), Some("5"));
    }

    #[test]
    fn test_resolve_skips_empty_values() {
        let row = ResultRow::from_pairs([("Requests", "  "), ("# reqs", "12")]);
        assert_eq!(resolve(&row, LogicalField::Requests.candidates()), Some("12"));
    }

    #[test]
    fn test_resolve_absent() {
        let row = ResultRow::from_pairs([("Type", "GET")]);
        assert_eq!(resolve(&row, LogicalField::Name.candidates()), None);
    }

    #[test]
    fn test_leftmost_duplicate_wins() {
        let row = ResultRow::from_pairs([("Requests", "1"), ("requests", "2")]);
        assert_eq!(resolve(&row, &["requests"]), Some("1"));
    }

    #[test]
    fn test_recognize_labels() {
        assert_eq!(LogicalField::recognize("NAME"), Some(LogicalField::Name));
        assert_eq!(LogicalField::recognize("95%"), Some(LogicalField::P95ResponseTime));
        assert_eq!(LogicalField::recognize("99%"), None);
        assert_eq!(LogicalField::recognize(""), None);
    }

    #[test]
    fn test_case_insensitive_header() {
        let row =
            ResultRow::from_pairs([("AVERAGE RESPONSE TIME", "9.5"), ("95TH PERCENTILE", "20")]);
        let index = FieldIndex::new(&row);
        assert_eq!(index.field(LogicalField::AverageResponseTime), Some("9.5"));
        assert_eq!(index.field(LogicalField::P95ResponseTime), Some("20"));
    }
}
