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

//! Statistics table loading for Loadgate.
//!
//! Reads the `*_stats.csv` file written by `locust --csv <prefix>` into an
//! ordered list of [`ResultRow`](loadgate_core::ResultRow)s. Column labels
//! are kept verbatim; interpreting them is left to
//! [`loadgate_core::resolve`].
//!
//! # Features
//!
//! - **Missing files are empty tables**: a run that never produced stats
//!   yields zero rows and a logged warning, not an error
//! - **Ragged rows**: records shorter or longer than the header are accepted
//! - **Configurable**: delimiter, whitespace trimming, row and size limits
//!
//! # Examples
//!
//! ```
//! use loadgate_core::{aggregate, Strategy};
//! use loadgate_csv::{load_table_from_str, LoadConfig};
//!
//! let csv_data = "\
//! Type,Name,Request Count,Failure Count,Average Response Time,95%
//! GET,/,1000,25,120.5,300
//! ,Aggregated,1000,25,120.5,300
//! ";
//!
//! let rows = load_table_from_str(csv_data, &LoadConfig::default()).unwrap();
//! let aggregation = aggregate(&rows, Strategy::SummaryRow);
//! assert_eq!(aggregation.metrics.total_failures, 25);
//! ```

mod error;
mod from_csv;

pub use error::{CsvError, Result};
pub use from_csv::{
    load_table, load_table_from_reader, load_table_from_str, LoadConfig, DEFAULT_MAX_FILE_SIZE,
    DEFAULT_MAX_ROWS,
};
