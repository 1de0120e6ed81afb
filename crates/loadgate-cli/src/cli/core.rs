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

//! Loadgate commands for gating and inspection.

use crate::commands::{self, CheckOptions};
use crate::error::CliError;
use clap::{Subcommand, ValueEnum};
use loadgate_core::{Strategy, ThresholdSpec};
use std::path::PathBuf;

/// How run-wide metrics are derived from the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum StrategyArg {
    /// Read the producer's `Aggregated` row
    #[default]
    SummaryRow,
    /// Combine per-endpoint rows (request-weighted average, worst p95)
    WeightedEndpoints,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::SummaryRow => Strategy::SummaryRow,
            StrategyArg::WeightedEndpoints => Strategy::WeightedEndpoints,
        }
    }
}

/// Console output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    #[default]
    Text,
    /// JSON report
    Json,
}

/// Top-level Loadgate commands.
///
/// - **Check**: Summarize a run, evaluate thresholds and emit outputs
/// - **Inspect**: Show how the table's rows and columns were interpreted
///
/// # Examples
///
/// ```no_run
/// use clap::Parser;
/// use loadgate_cli::cli::Commands;
///
/// #[derive(Parser)]
/// struct Cli {
///     #[command(subcommand)]
///     command: Commands,
/// }
/// ```
#[derive(Subcommand)]
pub enum Commands {
    /// Summarize a load-test run and gate on thresholds
    ///
    /// Reads the statistics CSV, prints a summary, appends key=value outputs
    /// to the output file and exits with status 2 when any configured
    /// threshold is exceeded. A missing CSV is reported as zero requests.
    Check {
        /// Path to the statistics CSV (e.g. Locust's <prefix>_stats.csv)
        #[arg(long, value_name = "FILE")]
        csv_path: PathBuf,

        /// File to append key=value outputs to
        #[arg(long, value_name = "FILE", env = "GITHUB_OUTPUT")]
        github_output: Option<PathBuf>,

        /// Maximum allowed failure ratio (0.0 - 1.0)
        #[arg(long, value_name = "RATIO", allow_negative_numbers = true)]
        check_fail_ratio: Option<f64>,

        /// Maximum allowed average response time in milliseconds
        #[arg(long, value_name = "MS", allow_negative_numbers = true)]
        check_avg_response_time: Option<f64>,

        /// Maximum allowed 95th percentile response time in milliseconds
        #[arg(long, value_name = "MS", allow_negative_numbers = true)]
        check_p95_response_time: Option<f64>,

        /// Aggregation strategy
        #[arg(long, value_enum, default_value_t = StrategyArg::SummaryRow)]
        strategy: StrategyArg,

        /// Console output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Field delimiter of the CSV
        #[arg(short, long, default_value = ",")]
        delimiter: char,

        /// Fail when the output file cannot be written
        #[arg(long)]
        strict_output: bool,
    },

    /// Show how each row and column of a statistics table was interpreted
    ///
    /// Lists the resolved request, failure and latency values per row, marks
    /// the summary row, and reports columns that match no known field.
    Inspect {
        /// Path to the statistics CSV
        #[arg(long, value_name = "FILE")]
        csv_path: PathBuf,

        /// Field delimiter of the CSV
        #[arg(short, long, default_value = ",")]
        delimiter: char,
    },
}

impl Commands {
    /// Execute the command with the provided arguments.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the table cannot be loaded, an argument is invalid,
    /// a strict output write fails, or configured thresholds are violated.
    /// Use [`CliError::exit_code`] to map the error to a process status.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            Commands::Check {
                csv_path,
                github_output,
                check_fail_ratio,
                check_avg_response_time,
                check_p95_response_time,
                strategy,
                format,
                delimiter,
                strict_output,
            } => commands::check(&CheckOptions {
                csv_path,
                output_path: github_output,
                thresholds: ThresholdSpec {
                    max_fail_ratio: check_fail_ratio,
                    max_avg_response_ms: check_avg_response_time,
                    max_p95_response_ms: check_p95_response_time,
                },
                strategy: strategy.into(),
                format,
                delimiter,
                strict_output,
            }),
            Commands::Inspect {
                csv_path,
                delimiter,
            } => commands::inspect(&csv_path, delimiter),
        }
    }
}
