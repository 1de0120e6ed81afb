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

//! Core data model and decision logic for Loadgate.
//!
//! Loadgate turns a load-test statistics table (as written by Locust's
//! `--csv` option) into a handful of run-wide health metrics and, when the
//! caller supplies limits, a pass/fail verdict for a CI pipeline.
//!
//! # Pipeline
//!
//! ```text
//! ResultRow* ──► aggregate ──► AggregatedMetrics ──► evaluate ──► Verdict
//!                  │                                               │
//!                  └── resolve + coerce                 emit ◄─────┘
//! ```
//!
//! - [`resolve`]: column-label normalization and prioritized lookup
//! - [`coerce`]: sentinel-returning numeric parsing
//! - [`aggregate`]: summary-row and weighted-endpoint aggregation
//! - [`threshold`]: upper-bound checks
//! - [`emit`]: key/value output, console summary and output-file append
//!
//! # Example
//!
//! ```
//! use loadgate_core::{aggregate, evaluate, ResultRow, Strategy, ThresholdSpec};
//!
//! let rows = vec![ResultRow::from_pairs([
//!     ("Name", "Aggregated"),
//!     ("Request Count", "1000"),
//!     ("Failure Count", "25"),
//!     ("Average Response Time", "120.5"),
//!     ("95%", "300"),
//! ])];
//!
//! let aggregation = aggregate(&rows, Strategy::SummaryRow);
//! assert_eq!(aggregation.metrics.total_requests, 1000);
//! assert!((aggregation.metrics.fail_ratio - 0.025).abs() < 1e-12);
//!
//! let spec = ThresholdSpec {
//!     max_fail_ratio: Some(0.05),
//!     ..Default::default()
//! };
//! assert!(evaluate(&aggregation.metrics, &spec).passed);
//! ```

pub mod aggregate;
pub mod coerce;
pub mod emit;
mod error;
pub mod resolve;
mod row;
pub mod threshold;

pub use aggregate::{aggregate, summary_row_position, AggregatedMetrics, Aggregation, Strategy};
pub use coerce::{to_float, to_int};
pub use emit::{append_to_sink, output_pairs, render_summary, Report};
pub use error::{EmitError, Result};
pub use resolve::{normalize, resolve, FieldIndex, LogicalField};
pub use row::ResultRow;
pub use threshold::{evaluate, ThresholdSpec, Verdict, Violation};
