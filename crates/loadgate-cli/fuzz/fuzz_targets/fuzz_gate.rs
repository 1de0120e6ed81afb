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

#![no_main]

//! Fuzz target for the load → aggregate → evaluate → emit pipeline.
//!
//! Arbitrary bytes must either fail to load with a `CsvError` or produce
//! metrics inside their documented ranges.

use libfuzzer_sys::fuzz_target;
use loadgate_core::{
    aggregate, evaluate, output_pairs, render_summary, Report, Strategy, ThresholdSpec,
};
use loadgate_csv::{load_table_from_reader, LoadConfig};

fuzz_target!(|data: &[u8]| {
    let config = LoadConfig {
        max_rows: 10_000,
        ..Default::default()
    };
    let Ok(rows) = load_table_from_reader(data, &config) else {
        return;
    };

    let spec = ThresholdSpec {
        max_fail_ratio: Some(0.05),
        max_avg_response_ms: Some(200.0),
        max_p95_response_ms: Some(500.0),
    };

    for strategy in [Strategy::SummaryRow, Strategy::WeightedEndpoints] {
        let aggregation = aggregate(&rows, strategy);
        let m = &aggregation.metrics;
        assert!((0.0..=1.0).contains(&m.fail_ratio));
        assert!(m.avg_response_ms.is_finite() && m.avg_response_ms >= 0.0);
        assert!(m.p95_response_ms.is_finite() && m.p95_response_ms >= 0.0);

        let verdict = evaluate(m, &spec);
        assert_eq!(verdict.passed, verdict.violations.is_empty());
        assert_eq!(output_pairs(m, Some(&verdict)).len(), 6);

        let _ = render_summary(&Report::new(&aggregation, Some(verdict)));
    }
});
