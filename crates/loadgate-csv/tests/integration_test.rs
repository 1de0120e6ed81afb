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

//! End-to-end tests: fixture file → rows → metrics → verdict.

use loadgate_core::{aggregate, evaluate, Strategy, ThresholdSpec, Violation};
use loadgate_csv::{load_table, load_table_from_str, CsvError, LoadConfig};
use loadgate_test::{fixtures, temp_csv};

fn reference_spec() -> ThresholdSpec {
    ThresholdSpec {
        max_fail_ratio: Some(0.05),
        max_avg_response_ms: Some(200.0),
        max_p95_response_ms: Some(500.0),
    }
}

#[test]
fn test_every_fixture_loads() {
    for (name, table) in fixtures::all() {
        let result = load_table_from_str(table, &LoadConfig::default());
        assert!(result.is_ok(), "fixture {} failed to load", name);
    }
}

#[test]
fn test_locust_stats_from_file() {
    let file = temp_csv(fixtures::LOCUST_STATS);
    let rows = load_table(file.path(), &LoadConfig::default()).unwrap();
    assert_eq!(rows.len(), 3);

    let agg = aggregate(&rows, Strategy::SummaryRow);
    assert!(agg.summary_found());
    assert_eq!(agg.metrics.fail_ratio, 0.025);
    assert_eq!(agg.metrics.avg_response_ms, 120.5);
    assert_eq!(agg.metrics.p95_response_ms, 300.0);
    assert_eq!(agg.metrics.total_requests, 1000);
    assert_eq!(agg.metrics.total_failures, 25);

    let verdict = evaluate(&agg.metrics, &reference_spec());
    assert!(verdict.passed);
    assert!(verdict.reasons().is_empty());
}

#[test]
fn test_weighted_strategy_on_locust_stats() {
    let rows = load_table_from_str(fixtures::LOCUST_STATS, &LoadConfig::default()).unwrap();
    let agg = aggregate(&rows, Strategy::WeightedEndpoints);
    assert_eq!(agg.rows_used, 2);
    assert_eq!(agg.metrics.total_requests, 1000);
    assert_eq!(agg.metrics.avg_response_ms, 120.5);
    assert_eq!(agg.metrics.p95_response_ms, 300.0);
}

#[test]
fn test_legacy_layout() {
    let rows = load_table_from_str(fixtures::LEGACY_STATS, &LoadConfig::default()).unwrap();
    let agg = aggregate(&rows, Strategy::SummaryRow);
    assert_eq!(agg.metrics.total_requests, 50);
    assert_eq!(agg.metrics.total_failures, 1);
    assert_eq!(agg.metrics.avg_response_ms, 12.0);
    assert_eq!(agg.metrics.p95_response_ms, 40.0);
}

#[test]
fn test_duplicate_aggregated_first_wins() {
    let rows =
        load_table_from_str(fixtures::DUPLICATE_AGGREGATED, &LoadConfig::default()).unwrap();
    let agg = aggregate(&rows, Strategy::SummaryRow);
    assert_eq!(agg.metrics.total_requests, 1000);
    assert_eq!(agg.metrics.avg_response_ms, 120.5);
}

#[test]
fn test_missing_file_fails_configured_gate() {
    let rows = load_table("/nonexistent/loadgate_stats.csv", &LoadConfig::default()).unwrap();
    assert!(rows.is_empty());

    let agg = aggregate(&rows, Strategy::SummaryRow);
    assert!(agg.metrics.is_zero());
    assert_eq!(agg.metrics.fail_ratio, 0.0);

    let verdict = evaluate(&agg.metrics, &reference_spec());
    assert!(!verdict.passed);
    assert_eq!(verdict.violations, vec![Violation::NoRequests]);
    assert!(verdict.reasons()[0].contains("no requests found"));
}

#[test]
fn test_no_summary_row_is_zero() {
    let rows = load_table_from_str(fixtures::NO_SUMMARY_ROW, &LoadConfig::default()).unwrap();
    let agg = aggregate(&rows, Strategy::SummaryRow);
    assert!(!agg.summary_found());
    assert!(agg.metrics.is_zero());
}

#[test]
fn test_failing_run_reasons() {
    let rows = load_table_from_str(fixtures::FAILING_RUN, &LoadConfig::default()).unwrap();
    let agg = aggregate(&rows, Strategy::SummaryRow);
    let verdict = evaluate(&agg.metrics, &reference_spec());
    assert!(!verdict.passed);
    assert_eq!(
        verdict.reasons(),
        vec![
            "fail_ratio 0.3000 > 0.0500".to_string(),
            "avg_response_time 850.00ms > 200.00ms".to_string(),
            "p95_response_time 2400.00ms > 500.00ms".to_string(),
        ]
    );
}

#[test]
fn test_malformed_values_degrade_to_zero() {
    let rows = load_table_from_str(fixtures::MALFORMED_VALUES, &LoadConfig::default()).unwrap();
    let agg = aggregate(&rows, Strategy::SummaryRow);
    assert!(agg.summary_found());
    assert!(agg.metrics.is_zero());
    assert_eq!(agg.missing_fields.len(), 4);
}

#[test]
fn test_header_only_table() {
    let rows = load_table_from_str(fixtures::HEADER_ONLY, &LoadConfig::default()).unwrap();
    assert!(rows.is_empty());
}

#[test]
fn test_file_size_limit() {
    let file = temp_csv(fixtures::LOCUST_STATS);
    let config = LoadConfig {
        max_file_size: 16,
        ..Default::default()
    };
    let err = load_table(file.path(), &config).unwrap_err();
    assert!(matches!(err, CsvError::FileTooLarge { max: 16, .. }));
}

#[test]
fn test_directory_is_io_error() {
    let dir = std::env::temp_dir();
    let err = load_table(&dir, &LoadConfig::default()).unwrap_err();
    assert!(matches!(err, CsvError::Io { .. } | CsvError::CsvLib(_)));
}
