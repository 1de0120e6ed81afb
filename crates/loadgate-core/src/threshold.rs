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

//! Threshold gating.
//!
//! A [`ThresholdSpec`] holds optional upper bounds. [`evaluate`] checks each
//! configured bound with a strict `>` and collects every violation, in a
//! fixed order, into a [`Verdict`].
//!
//! An empty run is never a pass: as soon as any bound is configured and the
//! metrics report zero requests, the verdict fails with
//! [`Violation::NoRequests`]. All-zero metrics usually mean the stats file
//! was missing or the test never ran.

use crate::aggregate::AggregatedMetrics;
use serde::Serialize;
use std::fmt;

/// Optional upper bounds, one per gated metric.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ThresholdSpec {
    /// Maximum failure ratio (0-1).
    pub max_fail_ratio: Option<f64>,
    /// Maximum average response time in ms.
    pub max_avg_response_ms: Option<f64>,
    /// Maximum 95th-percentile response time in ms.
    pub max_p95_response_ms: Option<f64>,
}

impl ThresholdSpec {
    /// True when at least one bound is set.
    pub fn is_configured(&self) -> bool {
        self.max_fail_ratio.is_some()
            || self.max_avg_response_ms.is_some()
            || self.max_p95_response_ms.is_some()
    }
}

/// A single failed condition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Violation {
    NoRequests,
    FailRatio { actual: f64, limit: f64 },
    AvgResponseTime { actual: f64, limit: f64 },
    P95ResponseTime { actual: f64, limit: f64 },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::NoRequests => write!(f, "no requests found (CSV missing or empty)"),
            Violation::FailRatio { actual, limit } => {
                write!(f, "fail_ratio {:.4} > {:.4}", actual, limit)
            }
            Violation::AvgResponseTime { actual, limit } => {
                write!(f, "avg_response_time {:.2}ms > {:.2}ms", actual, limit)
            }
            Violation::P95ResponseTime { actual, limit } => {
                write!(f, "p95_response_time {:.2}ms > {:.2}ms", actual, limit)
            }
        }
    }
}

/// Outcome of a threshold check.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Verdict {
    pub passed: bool,
    pub violations: Vec<Violation>,
}

impl Verdict {
    /// Human-readable reasons, one per violation, in check order.
    pub fn reasons(&self) -> Vec<String> {
        self.violations.iter().map(ToString::to_string).collect()
    }
}

/// Compare `metrics` against every configured bound in `spec`.
///
/// Check order: zero-request guard, failure ratio, average latency, p95
/// latency.
///
/// ```
/// use loadgate_core::{evaluate, AggregatedMetrics, ThresholdSpec, Violation};
///
/// let spec = ThresholdSpec {
///     max_p95_response_ms: Some(500.0),
///     ..Default::default()
/// };
///
/// let verdict = evaluate(&AggregatedMetrics::default(), &spec);
/// assert!(!verdict.passed);
/// assert_eq!(verdict.violations, vec![Violation::NoRequests]);
/// ```
pub fn evaluate(metrics: &AggregatedMetrics, spec: &ThresholdSpec) -> Verdict {
    let mut violations = Vec::new();

    if spec.is_configured() && metrics.total_requests == 0 {
        violations.push(Violation::NoRequests);
    }

    if let Some(limit) = spec.max_fail_ratio {
        if metrics.fail_ratio > limit {
            violations.push(Violation::FailRatio {
                actual: metrics.fail_ratio,
                limit,
            });
        }
    }
    if let Some(limit) = spec.max_avg_response_ms {
        if metrics.avg_response_ms > limit {
            violations.push(Violation::AvgResponseTime {
                actual: metrics.avg_response_ms,
                limit,
            });
        }
    }
    if let Some(limit) = spec.max_p95_response_ms {
        if metrics.p95_response_ms > limit {
            violations.push(Violation::P95ResponseTime {
                actual: metrics.p95_response_ms,
                limit,
            });
        }
    }

    Verdict {
        passed: violations.is_empty(),
        violations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_metrics() -> AggregatedMetrics {
        AggregatedMetrics::from_counts(1000, 25, 120.5, 300.0)
    }

    fn reference_spec() -> ThresholdSpec {
        ThresholdSpec {
            max_fail_ratio: Some(0.05),
            max_avg_response_ms: Some(200.0),
            max_p95_response_ms: Some(500.0),
        }
    }

    #[test]
    fn test_within_bounds_passes() {
        let verdict = evaluate(&reference_metrics(), &reference_spec());
        assert!(verdict.passed);
        assert!(verdict.reasons().is_empty());
    }

    #[test]
    fn test_zero_requests_fails_when_configured() {
        let verdict = evaluate(&AggregatedMetrics::default(), &reference_spec());
        assert!(!verdict.passed);
        assert_eq!(
            verdict.reasons(),
            vec!["no requests found (CSV missing or empty)".to_string()]
        );
    }

    #[test]
    fn test_zero_requests_passes_without_bounds() {
        let verdict = evaluate(&AggregatedMetrics::default(), &ThresholdSpec::default());
        assert!(verdict.passed);
        assert!(verdict.violations.is_empty());
    }

    #[test]
    fn test_bounds_are_strict() {
        let spec = ThresholdSpec {
            max_fail_ratio: Some(0.025),
            max_avg_response_ms: Some(120.5),
            max_p95_response_ms: Some(300.0),
        };
        assert!(evaluate(&reference_metrics(), &spec).passed);
    }

    #[test]
    fn test_all_violations_in_order() {
        let spec = ThresholdSpec {
            max_fail_ratio: Some(0.01),
            max_avg_response_ms: Some(100.0),
            max_p95_response_ms: Some(250.0),
        };
        let verdict = evaluate(&reference_metrics(), &spec);
        assert!(!verdict.passed);
        assert_eq!(
            verdict.reasons(),
            vec![
                "fail_ratio 0.0250 > 0.0100".to_string(),
                "avg_response_time 120.50ms > 100.00ms".to_string(),
                "p95_response_time 300.00ms > 250.00ms".to_string(),
            ]
        );
    }

    #[test]
    fn test_unset_bounds_are_skipped() {
        let spec = ThresholdSpec {
            max_p95_response_ms: Some(250.0),
            ..Default::default()
        };
        let verdict = evaluate(&reference_metrics(), &spec);
        assert_eq!(verdict.violations.len(), 1);
        assert!(matches!(
            verdict.violations[0],
            Violation::P95ResponseTime { .. }
        ));
    }

    #[test]
    fn test_zero_request_guard_comes_first() {
        let metrics = AggregatedMetrics {
            avg_response_ms: 900.0,
            ..Default::default()
        };
        let spec = ThresholdSpec {
            max_avg_response_ms: Some(100.0),
            ..Default::default()
        };
        let verdict = evaluate(&metrics, &spec);
        assert_eq!(verdict.violations[0], Violation::NoRequests);
        assert_eq!(verdict.violations.len(), 2);
    }
}
