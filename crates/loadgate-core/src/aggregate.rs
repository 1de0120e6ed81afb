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

//! Run-wide metric aggregation.
//!
//! Two strategies are available and they are never mixed:
//!
//! - [`Strategy::SummaryRow`] (default): trust the producer's own
//!   `Aggregated` row. The first such row wins; without one, every metric
//!   is zero.
//! - [`Strategy::WeightedEndpoints`]: ignore summary rows and combine the
//!   per-endpoint rows. Counts are summed, the average is weighted by
//!   request count and p95 is the largest endpoint p95. The p95 is an
//!   upper-bound approximation, not a true run-wide percentile.
//!
//! The two disagree whenever endpoints have very different traffic or
//! failure rates, so the chosen strategy is carried on [`Aggregation`] and
//! printed with every report.

use crate::coerce::{to_float, to_int};
use crate::resolve::{FieldIndex, LogicalField};
use crate::row::ResultRow;
use serde::Serialize;
use std::fmt;
use tracing::{debug, warn};

/// Name of the whole-run row Locust appends to its stats table.
pub const SUMMARY_ROW_NAME: &str = "aggregated";

/// Row names treated as totals (and skipped) by the weighted strategy.
const TOTAL_ROW_NAMES: &[&str] = &["aggregated", "total", "sum"];

/// How run-wide metrics are derived from the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Read the first `Aggregated` row.
    #[default]
    SummaryRow,
    /// Combine all per-endpoint rows.
    WeightedEndpoints,
}

impl Strategy {
    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::SummaryRow => "summary-row",
            Strategy::WeightedEndpoints => "weighted-endpoints",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Run-wide health metrics.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct AggregatedMetrics {
    /// `total_failures / total_requests`, or `0.0` with no requests.
    pub fail_ratio: f64,
    pub avg_response_ms: f64,
    pub p95_response_ms: f64,
    pub total_requests: u64,
    pub total_failures: u64,
}

impl AggregatedMetrics {
    /// Build metrics from counts and latencies, deriving the failure ratio.
    ///
    /// The ratio is capped at `1.0`; counts are kept as reported.
    pub fn from_counts(
        total_requests: u64,
        total_failures: u64,
        avg_response_ms: f64,
        p95_response_ms: f64,
    ) -> Self {
        let fail_ratio = if total_requests > 0 {
            if total_failures > total_requests {
                warn!(total_requests, total_failures, "failure count exceeds request count");
            }
            (total_failures as f64 / total_requests as f64).min(1.0)
        } else {
            0.0
        };

        Self {
            fail_ratio,
            avg_response_ms,
            p95_response_ms,
            total_requests,
            total_failures,
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}

/// Result of one aggregation pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Aggregation {
    pub strategy: Strategy,
    pub metrics: AggregatedMetrics,
    /// Rows that contributed to the metrics (0 or 1 for the summary-row strategy).
    pub rows_used: usize,
    /// Numeric fields that were absent or unparsable and defaulted to zero.
    pub missing_fields: Vec<LogicalField>,
}

impl Aggregation {
    /// Whether any data backed the metrics.
    pub fn summary_found(&self) -> bool {
        self.rows_used > 0
    }

    fn empty(strategy: Strategy) -> Self {
        Self {
            strategy,
            metrics: AggregatedMetrics::default(),
            rows_used: 0,
            missing_fields: Vec::new(),
        }
    }
}

/// Aggregate `rows` with the given strategy.
pub fn aggregate(rows: &[ResultRow], strategy: Strategy) -> Aggregation {
    match strategy {
        Strategy::SummaryRow => from_summary_row(rows),
        Strategy::WeightedEndpoints => from_endpoints(rows),
    }
}

/// Trimmed, lower-cased value of a row's name column, or `""`.
///
/// Punctuation is kept: `/aggregated` is an endpoint, not the summary row.
fn row_name(index: &FieldIndex<'_>) -> String {
    index
        .field(LogicalField::Name)
        .map(|name| name.trim().to_lowercase())
        .unwrap_or_default()
}

/// Non-negative count, recording the field as missing when absent or unparsable.
fn count(index: &FieldIndex<'_>, field: LogicalField, missing: &mut Vec<LogicalField>) -> u64 {
    // to_int maps garbage and non-finite text to 0
    let parsed = index
        .field(field)
        .and_then(|text| to_float(text).is_finite().then(|| to_int(text)));
    match parsed {
        Some(n) => u64::try_from(n).unwrap_or(0),
        None => {
            missing.push(field);
            0
        }
    }
}

/// Latency in ms, or `None` when absent, unparsable, non-finite or negative.
fn latency(index: &FieldIndex<'_>, field: LogicalField) -> Option<f64> {
    index
        .field(field)
        .map(to_float)
        .filter(|ms| ms.is_finite() && *ms >= 0.0)
}

/// Position of the first row named `Aggregated` (case-insensitive), if any.
pub fn summary_row_position(rows: &[ResultRow]) -> Option<usize> {
    rows.iter()
        .position(|row| row_name(&FieldIndex::new(row)) == SUMMARY_ROW_NAME)
}

fn from_summary_row(rows: &[ResultRow]) -> Aggregation {
    let Some(position) = summary_row_position(rows) else {
        warn!(rows = rows.len(), "no Aggregated row found; metrics default to zero");
        return Aggregation::empty(Strategy::SummaryRow);
    };
    debug!(row = position + 1, "using Aggregated row");
    let index = FieldIndex::new(&rows[position]);

    let mut missing_fields = Vec::new();
    let total_requests = count(&index, LogicalField::Requests, &mut missing_fields);
    let total_failures = count(&index, LogicalField::Failures, &mut missing_fields);

    let mut latency_or_zero = |field| {
        latency(&index, field).unwrap_or_else(|| {
            missing_fields.push(field);
            0.0
        })
    };
    let avg_response_ms = latency_or_zero(LogicalField::AverageResponseTime);
    let p95_response_ms = latency_or_zero(LogicalField::P95ResponseTime);

    if !missing_fields.is_empty() {
        debug!(?missing_fields, "Aggregated row is missing fields");
    }

    Aggregation {
        strategy: Strategy::SummaryRow,
        metrics: AggregatedMetrics::from_counts(
            total_requests,
            total_failures,
            avg_response_ms,
            p95_response_ms,
        ),
        rows_used: 1,
        missing_fields,
    }
}

fn from_endpoints(rows: &[ResultRow]) -> Aggregation {
    let mut total_requests: u64 = 0;
    let mut total_failures: u64 = 0;
    let mut weighted_avg_sum = 0.0;
    let mut p95_max: f64 = 0.0;
    let mut rows_used = 0;
    let mut missing_fields = Vec::new();

    for row in rows.iter().filter(|row| !row.is_empty()) {
        let index = FieldIndex::new(row);
        if TOTAL_ROW_NAMES.contains(&row_name(&index).as_str()) {
            continue;
        }
        rows_used += 1;

        let mut row_missing = Vec::new();
        let requests = count(&index, LogicalField::Requests, &mut row_missing);
        let failures = count(&index, LogicalField::Failures, &mut row_missing);
        total_requests = total_requests.saturating_add(requests);
        total_failures = total_failures.saturating_add(failures);

        match latency(&index, LogicalField::AverageResponseTime) {
            Some(avg) if requests > 0 => weighted_avg_sum += avg * requests as f64,
            Some(_) => {}
            None => row_missing.push(LogicalField::AverageResponseTime),
        }
        match latency(&index, LogicalField::P95ResponseTime) {
            Some(p95) => p95_max = p95_max.max(p95),
            None => row_missing.push(LogicalField::P95ResponseTime),
        }

        for field in row_missing {
            if !missing_fields.contains(&field) {
                missing_fields.push(field);
            }
        }
    }

    if rows_used == 0 {
        warn!("no endpoint rows found; metrics default to zero");
        return Aggregation::empty(Strategy::WeightedEndpoints);
    }
    debug!(rows_used, "combined endpoint rows");

    let avg_response_ms = if total_requests > 0 {
        weighted_avg_sum / total_requests as f64
    } else {
        0.0
    };
    // The weighted sum can overflow on absurd inputs; stay finite and fail any latency bound.
    let avg_response_ms = if avg_response_ms.is_finite() {
        avg_response_ms
    } else {
        warn!("weighted average response time overflowed");
        f64::MAX
    };

    Aggregation {
        strategy: Strategy::WeightedEndpoints,
        metrics: AggregatedMetrics::from_counts(
            total_requests,
            total_failures,
            avg_response_ms,
            p95_max,
        ),
        rows_used,
        missing_fields,
    }
}
