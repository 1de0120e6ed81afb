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

//! Check command - summarize a load-test run and gate on thresholds

use super::load_config;
use crate::cli::OutputFormat;
use crate::error::CliError;
use colored::Colorize;
use loadgate_core::{
    aggregate, append_to_sink, evaluate, render_summary, Report, Strategy, ThresholdSpec,
};
use loadgate_csv::load_table;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Options for [`check`].
#[derive(Debug, Clone)]
pub struct CheckOptions {
    /// Statistics CSV; a missing file counts as an empty run.
    pub csv_path: PathBuf,
    /// File that receives `key=value` outputs, if any.
    pub output_path: Option<PathBuf>,
    pub thresholds: ThresholdSpec,
    pub strategy: Strategy,
    pub format: OutputFormat,
    pub delimiter: char,
    /// Treat a failed output write as an error instead of a warning.
    pub strict_output: bool,
}

/// Summarize a statistics table and evaluate the configured thresholds.
///
/// Prints the summary (or JSON report) to stdout, then appends the
/// `key=value` outputs to `output_path`. Thresholds are only evaluated when
/// at least one is set; with none set the command always succeeds once the
/// table has been read.
///
/// # Errors
///
/// Returns `Err` if:
/// - A threshold is negative or not a finite number
/// - The table exists but cannot be read or parsed
/// - `strict_output` is set and the output file cannot be written
/// - Any configured threshold is violated ([`CliError::ThresholdsFailed`])
///
/// # Examples
///
/// ```no_run
/// use loadgate_cli::cli::OutputFormat;
/// use loadgate_cli::commands::{check, CheckOptions};
/// use loadgate_core::{Strategy, ThresholdSpec};
///
/// let options = CheckOptions {
///     csv_path: "results/run_stats.csv".into(),
///     output_path: None,
///     thresholds: ThresholdSpec {
///         max_fail_ratio: Some(0.01),
///         ..Default::default()
///     },
///     strategy: Strategy::SummaryRow,
///     format: OutputFormat::Text,
///     delimiter: ',',
///     strict_output: false,
/// };
/// check(&options).unwrap();
/// ```
pub fn check(options: &CheckOptions) -> Result<(), CliError> {
    validate_thresholds(&options.thresholds)?;
    let config = load_config(options.delimiter)?;

    let rows = load_table(&options.csv_path, &config)?;
    let aggregation = aggregate(&rows, options.strategy);
    debug!(
        strategy = %aggregation.strategy,
        rows_used = aggregation.rows_used,
        "aggregated stats table"
    );

    let verdict = options
        .thresholds
        .is_configured()
        .then(|| evaluate(&aggregation.metrics, &options.thresholds));
    let report = Report::new(&aggregation, verdict);

    match options.format {
        OutputFormat::Text => print_text(&report),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    if let Some(path) = options
        .output_path
        .as_deref()
        .filter(|path| !path.as_os_str().is_empty())
    {
        match append_to_sink(path, &report.outputs) {
            Ok(()) => {}
            Err(e) if options.strict_output => return Err(e.into()),
            Err(e) => warn!(error = %e, "outputs not written"),
        }
    }

    match report.verdict {
        Some(verdict) if !verdict.passed => Err(CliError::ThresholdsFailed {
            reasons: verdict.reasons(),
        }),
        _ => Ok(()),
    }
}

fn print_text(report: &Report) {
    print!("{}", render_summary(report));
    match &report.verdict {
        Some(verdict) if verdict.passed => {
            println!("{} thresholds passed", "✓".green().bold());
        }
        Some(verdict) => {
            println!("{} thresholds failed", "✗".red().bold());
            for reason in verdict.reasons() {
                println!("  - {}", reason);
            }
        }
        None => {}
    }
}

/// Reject bounds that can never be compared meaningfully.
///
/// ```
/// use loadgate_cli::commands::validate_thresholds;
/// use loadgate_core::ThresholdSpec;
///
/// let spec = ThresholdSpec {
///     max_fail_ratio: Some(-0.1),
///     ..Default::default()
/// };
/// assert!(validate_thresholds(&spec).is_err());
/// ```
pub fn validate_thresholds(spec: &ThresholdSpec) -> Result<(), CliError> {
    let bounds = [
        ("--check-fail-ratio", spec.max_fail_ratio),
        ("--check-avg-response-time", spec.max_avg_response_ms),
        ("--check-p95-response-time", spec.max_p95_response_ms),
    ];
    for (flag, bound) in bounds {
        if let Some(value) = bound {
            if !value.is_finite() || value < 0.0 {
                return Err(CliError::invalid_input(format!(
                    "{} must be a non-negative number, got {}",
                    flag, value
                )));
            }
        }
    }
    Ok(())
}
