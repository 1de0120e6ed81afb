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

//! Loadgate CLI library for command-line parsing and execution.
//!
//! This library provides the command implementations behind the `loadgate`
//! binary. It wires the table loader in `loadgate-csv` to the aggregation,
//! threshold and emission logic in `loadgate-core`.
//!
//! # Commands
//!
//! ## Gating
//!
//! - **check**: Summarize a statistics table, evaluate thresholds, append
//!   `key=value` outputs and exit with the gate status
//!
//! ## Diagnostics
//!
//! - **inspect**: Show how each row and column of a table was interpreted
//!
//! # Exit Status
//!
//! | Code | Meaning |
//! |------|---------|
//! | 0    | Success, or no thresholds configured |
//! | 1    | Operational error (unreadable table, invalid arguments) |
//! | 2    | One or more thresholds violated |
//!
//! # Environment
//!
//! - `GITHUB_OUTPUT`: default output file for `check`
//! - `LOADGATE_MAX_FILE_SIZE`: maximum table size in bytes (default 1 GB)
//! - `LOADGATE_MAX_ROWS`: maximum number of data rows (default 1,000,000)
//! - `RUST_LOG`: log filter; logs are written to stderr

pub mod cli;
pub mod commands;
pub mod error;
