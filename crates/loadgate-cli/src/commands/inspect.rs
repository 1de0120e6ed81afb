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

//! Inspect command - show how a statistics table is interpreted

use super::load_config;
use crate::error::CliError;
use colored::Colorize;
use loadgate_core::{summary_row_position, FieldIndex, LogicalField, ResultRow};
use loadgate_csv::load_table;
use std::path::Path;

/// Print the column mapping and per-row resolved fields of a table.
///
/// # Errors
///
/// Returns `Err` if the delimiter is invalid or the table exists but cannot
/// be read. A missing table is reported, not an error.
///
/// # Output
///
/// - Every distinct column label with the logical field it maps to
/// - One line per row with the resolved name, requests, failures, average
///   and p95 values; the row used by the summary-row strategy is marked `*`
pub fn inspect(csv_path: &Path, delimiter: char) -> Result<(), CliError> {
    let config = load_config(delimiter)?;
    let rows = load_table(csv_path, &config)?;

    println!("{}", "Stats Table".bold().underline());
    println!();
    println!("{}  {}", "Path:".cyan(), csv_path.display());
    println!("{}  {}", "Rows:".cyan(), rows.len());

    if rows.is_empty() {
        println!();
        println!("{} no statistics rows (missing or empty file)", "✗".red().bold());
        return Ok(());
    }

    println!();
    println!("{}", "Columns:".cyan());
    for (label, field) in classify_columns(&rows) {
        match field {
            Some(field) => println!("  {} -> {}", label.green(), field),
            None => println!("  {} -> {}", label.yellow(), "(ignored)".dimmed()),
        }
    }

    let summary = summary_row_position(&rows);

    println!();
    println!("{}", "Rows:".cyan());
    for (position, row) in rows.iter().enumerate() {
        let marker = if Some(position) == summary { "*" } else { " " };
        println!("  {} [{}] {}", marker.green().bold(), position, describe_row(row));
    }

    println!();
    match summary {
        Some(position) => println!("{} summary row at [{}]", "✓".green().bold(), position),
        None => println!(
            "{} no \"Aggregated\" row; summary-row metrics will be zero",
            "✗".red().bold()
        ),
    }

    Ok(())
}

/// Distinct column labels in first-seen order, with the logical field each
/// one is recognized as.
pub fn classify_columns(rows: &[ResultRow]) -> Vec<(String, Option<LogicalField>)> {
    let mut columns: Vec<(String, Option<LogicalField>)> = Vec::new();
    for label in rows.iter().flat_map(|row| row.labels()) {
        if !columns.iter().any(|(seen, _)| seen == label) {
            columns.push((label.to_string(), LogicalField::recognize(label)));
        }
    }
    columns
}

fn describe_row(row: &ResultRow) -> String {
    let index = FieldIndex::new(row);
    LogicalField::ALL
        .iter()
        .map(|&field| format!("{}={}", field, index.field(field).unwrap_or("-")))
        .collect::<Vec<_>>()
        .join(" ")
}
