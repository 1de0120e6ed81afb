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

//! Result emission: key/value outputs, console summary and output-file append.
//!
//! The key/value pairs follow the GitHub Actions `$GITHUB_OUTPUT` convention
//! (`key=value`, one per line). Their order and formatting are fixed so that
//! two runs over the same table produce byte-identical blocks.

use crate::aggregate::{AggregatedMetrics, Aggregation, Strategy};
use crate::error::{EmitError, Result};
use crate::threshold::Verdict;
use serde::{Serialize, Serializer};
use std::fmt::Write as _;
use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Ordered key/value outputs for machine consumption.
///
/// Keys: `fail_ratio` (6 dp), `avg_response_time` and `p95_response_time`
/// (2 dp), `total_requests`, `total_failures` and `thresholds_passed`.
/// Without a verdict no bound was configured and `thresholds_passed` is
/// `true`.
///
/// ```
/// use loadgate_core::{output_pairs, AggregatedMetrics};
///
/// let metrics = AggregatedMetrics::from_counts(1000, 25, 120.5, 300.0);
/// let pairs = output_pairs(&metrics, None);
/// assert_eq!(pairs[0], ("fail_ratio", "0.025000".to_string()));
/// assert_eq!(pairs[5], ("thresholds_passed", "true".to_string()));
/// ```
pub fn output_pairs(
    metrics: &AggregatedMetrics,
    verdict: Option<&Verdict>,
) -> Vec<(&'static str, String)> {
    vec![
        ("fail_ratio", format!("{:.6}", metrics.fail_ratio)),
        ("avg_response_time", format!("{:.2}", metrics.avg_response_ms)),
        ("p95_response_time", format!("{:.2}", metrics.p95_response_ms)),
        ("total_requests", metrics.total_requests.to_string()),
        ("total_failures", metrics.total_failures.to_string()),
        ("thresholds_passed", verdict.map_or(true, |v| v.passed).to_string()),
    ]
}

/// Everything one run produced, ready for display or JSON serialization.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub strategy: Strategy,
    pub summary_found: bool,
    pub metrics: AggregatedMetrics,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verdict: Option<Verdict>,
    #[serde(serialize_with = "serialize_pairs")]
    pub outputs: Vec<(&'static str, String)>,
}

impl Report {
    pub fn new(aggregation: &Aggregation, verdict: Option<Verdict>) -> Self {
        let outputs = output_pairs(&aggregation.metrics, verdict.as_ref());
        Self {
            strategy: aggregation.strategy,
            summary_found: aggregation.summary_found(),
            metrics: aggregation.metrics,
            verdict,
            outputs,
        }
    }

    /// `None` when no thresholds were evaluated.
    pub fn passed(&self) -> Option<bool> {
        self.verdict.as_ref().map(|v| v.passed)
    }
}

// Keeps output order in the JSON object.
fn serialize_pairs<S>(
    pairs: &[(&'static str, String)],
    serializer: S,
) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_map(pairs.iter().map(|(k, v)| (*k, v)))
}

/// Multi-line console summary.
pub fn render_summary(report: &Report) -> String {
    let m = &report.metrics;
    let mut out = String::new();

    // Writing to a String cannot fail.
    let _ = writeln!(out, "Locust summary:");
    let _ = writeln!(out, "  strategy: {}", report.strategy);
    if !report.summary_found {
        let _ = writeln!(out, "  note: no statistics rows found, metrics are zero");
    }
    let _ = writeln!(out, "  total_requests: {}", m.total_requests);
    let _ = writeln!(out, "  total_failures: {}", m.total_failures);
    let _ = writeln!(out, "  fail_ratio: {:.6}", m.fail_ratio);
    let _ = writeln!(out, "  avg_response_time: {:.2} ms", m.avg_response_ms);
    let _ = writeln!(out, "  p95_response_time: {:.2} ms", m.p95_response_ms);
    out
}

/// Append `key=value` lines to the output file at `path`, creating it if needed.
///
/// The append is not transactional: if a write fails midway, lines already
/// written stay in the file.
pub fn append_to_sink(path: &Path, pairs: &[(&'static str, String)]) -> Result<()> {
    let sink_err = |source| EmitError::Sink {
        path: path.to_path_buf(),
        source,
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(sink_err)?;
    let mut writer = BufWriter::new(file);
    for (key, value) in pairs {
        writeln!(writer, "{}={}", key, value).map_err(sink_err)?;
    }
    writer.flush().map_err(sink_err)?;

    debug!(path = %path.display(), lines = pairs.len(), "appended outputs");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::threshold::{evaluate, ThresholdSpec};
    use crate::{aggregate, ResultRow};
    use std::fs;

    fn reference_aggregation() -> Aggregation {
        let rows = vec![ResultRow::from_pairs([
            ("Name", "Aggregated"),
            ("Request Count", "1000"),
            ("Failure Count", "25"),
            ("Average Response Time", "120.5"),
            ("95%", "300"),
        ])];
        aggregate(&rows, Strategy::SummaryRow)
    }

    #[test]
    fn test_output_pairs_formatting() {
        let agg = reference_aggregation();
        let pairs = output_pairs(&agg.metrics, None);
        assert_eq!(
            pairs,
            vec![
                ("fail_ratio", "0.025000".to_string()),
                ("avg_response_time", "120.50".to_string()),
                ("p95_response_time", "300.00".to_string()),
                ("total_requests", "1000".to_string()),
                ("total_failures", "25".to_string()),
                ("thresholds_passed", "true".to_string()),
            ]
        );
    }

    #[test]
    fn test_thresholds_passed_without_bounds() {
        let metrics = AggregatedMetrics::default();
        let verdict = evaluate(&metrics, &ThresholdSpec::default());
        assert!(verdict.passed);

        let pairs = output_pairs(&metrics, None);
        assert_eq!(pairs, output_pairs(&metrics, Some(&verdict)));
        assert_eq!(pairs.last(), Some(&("thresholds_passed", "true".to_string())));
    }

    #[test]
    fn test_output_pairs_with_verdict() {
        let metrics = AggregatedMetrics::default();
        let spec = ThresholdSpec {
            max_fail_ratio: Some(0.1),
            ..Default::default()
        };
        let verdict = evaluate(&metrics, &spec);
        let pairs = output_pairs(&metrics, Some(&verdict));
        assert_eq!(pairs.last(), Some(&("thresholds_passed", "false".to_string())));
    }

    #[test]
    fn test_summary_text() {
        let report = Report::new(&reference_aggregation(), None);
        let text = render_summary(&report);
        assert!(text.starts_with("Locust summary:\n"));
        assert!(text.contains("  strategy: summary-row\n"));
        assert!(text.contains("  total_requests: 1000\n"));
        assert!(text.contains("  fail_ratio: 0.025000\n"));
        assert!(text.contains("  p95_response_time: 300.00 ms\n"));
        assert!(!text.contains("note:"));
    }

    #[test]
    fn test_summary_notes_missing_data() {
        let agg = aggregate(&[], Strategy::SummaryRow);
        let text = render_summary(&Report::new(&agg, None));
        assert!(text.contains("note: no statistics rows found"));
    }

    #[test]
    fn test_report_json_keeps_output_order() {
        let report = Report::new(&reference_aggregation(), None);
        let json = serde_json::to_string(&report).unwrap();
        let fail = json.find("\"fail_ratio\":\"0.025000\"").unwrap();
        let total = json.find("\"total_failures\":\"25\"").unwrap();
        assert!(fail < total);
        assert!(!json.contains("verdict"));
        assert!(json.contains("\"strategy\":\"summary-row\""));
    }

    #[test]
    fn test_append_is_additive() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("github_output");
        let pairs = output_pairs(&reference_aggregation().metrics, None);

        append_to_sink(&path, &pairs).unwrap();
        let first = fs::read_to_string(&path).unwrap();
        append_to_sink(&path, &pairs).unwrap();
        let second = fs::read_to_string(&path).unwrap();

        assert_eq!(first.lines().count(), 6);
        assert_eq!(second, format!("{}{}", first, first));
        assert!(first.starts_with("fail_ratio=0.025000\n"));
    }

    #[test]
    fn test_append_reports_path_on_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out");
        let err = append_to_sink(&path, &[("k", "v".to_string())]).unwrap_err();
        assert!(err.to_string().contains("missing"));
    }
}
