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

//! CLI command implementations

mod check;
mod inspect;

pub use check::{check, validate_thresholds, CheckOptions};
pub use inspect::inspect;

use crate::error::CliError;
use loadgate_csv::{LoadConfig, DEFAULT_MAX_FILE_SIZE, DEFAULT_MAX_ROWS};

/// Get the maximum table size from environment or use default.
///
/// Reads `LOADGATE_MAX_FILE_SIZE` (bytes). Falls back to
/// [`DEFAULT_MAX_FILE_SIZE`] if the variable is not set or is not a number.
fn get_max_file_size() -> u64 {
    std::env::var("LOADGATE_MAX_FILE_SIZE")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(DEFAULT_MAX_FILE_SIZE)
}

/// Get the maximum row count from environment or use default.
fn get_max_rows() -> usize {
    std::env::var("LOADGATE_MAX_ROWS")
        .ok()
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(DEFAULT_MAX_ROWS)
}

/// Build the loader configuration for a command.
///
/// # Errors
///
/// Returns `Err` if `delimiter` is not a single-byte ASCII character other
/// than the quote character.
///
/// # Examples
///
/// ```
/// use loadgate_cli::commands::load_config;
///
/// let config = load_config(';').unwrap();
/// assert_eq!(config.delimiter, b';');
///
/// assert!(load_config('é').is_err());
/// ```
pub fn load_config(delimiter: char) -> Result<LoadConfig, CliError> {
    if !delimiter.is_ascii() || delimiter == '"' || delimiter == '\n' || delimiter == '\r' {
        return Err(CliError::invalid_input(format!(
            "Delimiter must be a single ASCII character other than a quote or newline, got {:?}",
            delimiter
        )));
    }

    Ok(LoadConfig {
        delimiter: delimiter as u8,
        max_rows: get_max_rows(),
        max_file_size: get_max_file_size(),
        ..LoadConfig::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_config_defaults() {
        let config = load_config(',').unwrap();
        assert_eq!(config.delimiter, b',');
        assert!(config.trim);
    }

    #[test]
    fn test_load_config_tab() {
        let config = load_config('\t').unwrap();
        assert_eq!(config.delimiter, b'\t');
    }

    #[test]
    fn test_load_config_rejects_quote_and_non_ascii() {
        assert!(matches!(load_config('"'), Err(CliError::InvalidInput(_))));
        assert!(matches!(load_config('\n'), Err(CliError::InvalidInput(_))));
        assert!(matches!(load_config('€'), Err(CliError::InvalidInput(_))));
    }
}
