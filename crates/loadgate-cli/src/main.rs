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

//! Loadgate Command Line Interface

use clap::Parser;
use loadgate_cli::cli::Commands;
use loadgate_cli::error::CliError;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Loadgate - gate CI pipelines on load-test results
///
/// Reads the statistics table written by a load-test run, reports the run's
/// failure ratio and latencies, and fails the job when configured limits are
/// exceeded.
///
/// # Examples
///
/// ```bash
/// # Summarize a Locust run
/// loadgate check --csv-path results/run_stats.csv
///
/// # Gate on failure ratio and p95 latency
/// loadgate check --csv-path results/run_stats.csv \
///     --check-fail-ratio 0.01 --check-p95-response-time 800
///
/// # Show how each column was interpreted
/// loadgate inspect --csv-path results/run_stats.csv
/// ```
#[derive(Parser)]
#[command(name = "loadgate")]
#[command(author, version, about = "Loadgate - gate CI pipelines on load-test results", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    // Logs go to stderr; stdout carries the summary and JSON reports.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("loadgate_cli=info".parse().expect("valid log directive"))
                .add_directive("loadgate_core=info".parse().expect("valid log directive"))
                .add_directive("loadgate_csv=info".parse().expect("valid log directive")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e @ CliError::ThresholdsFailed { .. }) => {
            eprintln!("{}", e);
            ExitCode::from(e.exit_code())
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}
