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

//! Read statistics CSV files into [`ResultRow`]s.

use crate::error::{CsvError, Result};
use loadgate_core::ResultRow;
use std::fs::{self, File};
use std::io::{self, Read};
use std::path::Path;
use tracing::{debug, warn};

/// Default maximum number of rows to prevent memory exhaustion.
///
/// A Locust stats table has one row per endpoint plus the `Aggregated` row,
/// so real files sit far below this.
pub const DEFAULT_MAX_ROWS: usize = 1_000_000;

/// Default maximum file size (1 GB).
pub const DEFAULT_MAX_FILE_SIZE: u64 = 1024 * 1024 * 1024;

/// Configuration for table loading.
///
/// # Examples
///
/// ```
/// # use loadgate_csv::LoadConfig;
/// let config = LoadConfig::default();
/// assert_eq!(config.delimiter, b',');
/// assert!(config.trim);
/// assert_eq!(config.max_rows, 1_000_000);
///
/// // Tab-separated stats
/// let config = LoadConfig {
///     delimiter: b'\t',
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct LoadConfig {
    /// Field delimiter character (default: `,`).
    pub delimiter: u8,

    /// Whether to trim leading/trailing whitespace from labels and values
    /// (default: `true`).
    pub trim: bool,

    /// Maximum number of data rows (default: 1,000,000).
    pub max_rows: usize,

    /// Maximum file size in bytes, checked before reading (default: 1 GB).
    pub max_file_size: u64,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            trim: true,
            max_rows: DEFAULT_MAX_ROWS,
            max_file_size: DEFAULT_MAX_FILE_SIZE,
        }
    }
}

/// Load the statistics table at `path`.
///
/// A path that does not exist is logged and loads as an empty table: the
/// caller treats "no rows" as "no data". Any other I/O problem, an oversized
/// file, or a CSV syntax error is returned as [`CsvError`].
///
/// The first line is the header. Records shorter than the header simply
/// lack the trailing columns; cells beyond the header are dropped.
///
/// # Examples
///
/// ```no_run
/// use loadgate_csv::{load_table, LoadConfig};
///
/// let rows = load_table("results/run_stats.csv", &LoadConfig::default()).unwrap();
/// println!("{} rows", rows.len());
/// ```
pub fn load_table(path: impl AsRef<Path>, config: &LoadConfig) -> Result<Vec<ResultRow>> {
    let path = path.as_ref();
    let io_err = |source| CsvError::Io {
        path: path.to_path_buf(),
        source,
    };

    let metadata = match fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            warn!(path = %path.display(), "stats CSV not found");
            return Ok(Vec::new());
        }
        Err(e) => return Err(io_err(e)),
    };

    if metadata.len() > config.max_file_size {
        return Err(CsvError::FileTooLarge {
            path: path.to_path_buf(),
            actual: metadata.len(),
            max: config.max_file_size,
        });
    }

    let file = File::open(path).map_err(io_err)?;
    let rows = load_table_from_reader(file, config)?;
    debug!(path = %path.display(), rows = rows.len(), "loaded stats table");
    Ok(rows)
}

/// Load a table from any reader.
pub fn load_table_from_reader<R: Read>(reader: R, config: &LoadConfig) -> Result<Vec<ResultRow>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(config.delimiter)
        .has_headers(true)
        .flexible(true)
        .trim(if config.trim {
            csv::Trim::All
        } else {
            csv::Trim::None
        })
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let mut rows = Vec::new();

    for (record_idx, result) in csv_reader.records().enumerate() {
        // Security: Limit row count to prevent memory exhaustion
        if record_idx >= config.max_rows {
            return Err(CsvError::SecurityLimit {
                limit: config.max_rows,
                actual: record_idx + 1,
            });
        }

        let record = result.map_err(|e| CsvError::ParseError {
            line: e
                .position()
                .map(|pos| pos.line() as usize)
                .unwrap_or(record_idx + 2),
            message: e.to_string(),
        })?;

        if record.iter().all(str::is_empty) {
            continue;
        }

        let cells = headers
            .iter()
            .zip(record.iter())
            .map(|(label, value)| (label.to_string(), value.to_string()))
            .collect();
        rows.push(ResultRow::new(cells));
    }

    Ok(rows)
}

/// Load a table held in memory.
///
/// ```
/// use loadgate_csv::{load_table_from_str, LoadConfig};
///
/// let rows = load_table_from_str("Name,Requests\nAggregated,10\n", &LoadConfig::default()).unwrap();
/// assert_eq!(rows[0].get("Requests"), Some("10"));
/// ```
pub fn load_table_from_str(data: &str, config: &LoadConfig) -> Result<Vec<ResultRow>> {
    load_table_from_reader(data.as_bytes(), config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_table() {
        let data = "Type,Name,Request Count\nGET,/,10\n,Aggregated,10\n";
        let rows = load_table_from_str(data, &LoadConfig::default()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get("Name"), Some("/"));
        assert_eq!(rows[1].get("Type"), Some(""));
        assert_eq!(rows[1].get("Name"), Some("Aggregated"));
    }

    #[test]
    fn test_header_only() {
        let rows = load_table_from_str("Name,Requests\n", &LoadConfig::default()).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_empty_input() {
        let rows = load_table_from_str("", &LoadConfig::default()).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_trim_values() {
        let data = " Name , Requests \n Aggregated , 5 \n";
        let rows = load_table_from_str(data, &LoadConfig::default()).unwrap();
        assert_eq!(rows[0].get("Name"), Some("Aggregated"));
        assert_eq!(rows[0].get("Requests"), Some("5"));
    }

    #[test]
    fn test_no_trim() {
        let config = LoadConfig {
            trim: false,
            ..Default::default()
        };
        let rows = load_table_from_str("Name,Requests\nx, 5\n", &config).unwrap();
        assert_eq!(rows[0].get("Requests"), Some(" 5"));
    }

    #[test]
    fn test_ragged_rows() {
        let data = "Name,Requests,Failures\nshort,1\nlong,1,2,3\n";
        let rows = load_table_from_str(data, &LoadConfig::default()).unwrap();
        assert_eq!(rows[0].len(), 2);
        assert_eq!(rows[0].get("Failures"), None);
        assert_eq!(rows[1].len(), 3);
        assert_eq!(rows[1].get("Failures"), Some("2"));
    }

    #[test]
    fn test_quoted_cells() {
        let data = "Name,Requests\n\"GET /a,b\",3\n";
        let rows = load_table_from_str(data, &LoadConfig::default()).unwrap();
        assert_eq!(rows[0].get("Name"), Some("GET /a,b"));
    }

    #[test]
    fn test_custom_delimiter() {
        let config = LoadConfig {
            delimiter: b';',
            ..Default::default()
        };
        let rows = load_table_from_str("Name;Requests\nAggregated;7\n", &config).unwrap();
        assert_eq!(rows[0].get("Requests"), Some("7"));
    }

    #[test]
    fn test_row_limit() {
        let config = LoadConfig {
            max_rows: 2,
            ..Default::default()
        };
        let data = "Name\na\nb\nc\n";
        let err = load_table_from_str(data, &config).unwrap_err();
        assert!(matches!(
            err,
            CsvError::SecurityLimit {
                limit: 2,
                actual: 3
            }
        ));
    }

    #[test]
    fn test_invalid_utf8_is_parse_error() {
        let data: &[u8] = b"Name,Requests\n\xff\xfe,1\n";
        let err = load_table_from_reader(data, &LoadConfig::default()).unwrap_err();
        assert!(matches!(err, CsvError::ParseError { .. }));
    }

    #[test]
    fn test_missing_file_is_empty() {
        let rows = load_table("/nonexistent/loadgate/stats.csv", &LoadConfig::default()).unwrap();
        assert!(rows.is_empty());
    }
}
