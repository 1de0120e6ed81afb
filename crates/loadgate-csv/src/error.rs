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

//! Error types for table loading.

use std::path::PathBuf;
use thiserror::Error;

/// Table loading errors.
///
/// A missing file is not an error (it loads as an empty table); these cover
/// files that exist but cannot be read or parsed.
///
/// # Examples
///
/// ```
/// use loadgate_csv::CsvError;
///
/// let err = CsvError::ParseError {
///     line: 42,
///     message: "unequal lengths".to_string(),
/// };
/// assert!(err.to_string().contains("line 42"));
/// ```
#[derive(Debug, Error)]
pub enum CsvError {
    /// CSV parsing error at a specific record.
    #[error("CSV parse error at line {line}: {message}")]
    ParseError {
        /// Line number where the error occurred (1-based, header is line 1).
        line: usize,
        /// Detailed error message.
        message: String,
    },

    /// I/O error while opening or reading the table.
    #[error("I/O error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the underlying CSV library outside record parsing
    /// (for example while reading the header).
    #[error("CSV library error: {0}")]
    CsvLib(#[from] csv::Error),

    /// Row count exceeded the configured limit.
    ///
    /// ```
    /// use loadgate_csv::CsvError;
    ///
    /// let err = CsvError::SecurityLimit {
    ///     limit: 1_000_000,
    ///     actual: 1_000_001,
    /// };
    /// assert!(err.to_string().contains("Security limit"));
    /// ```
    #[error("Security limit exceeded: row count {actual} exceeds maximum {limit}")]
    SecurityLimit {
        /// Maximum allowed rows.
        limit: usize,
        /// Actual row count encountered.
        actual: usize,
    },

    /// File is larger than the configured limit.
    #[error("File '{path}' is too large ({actual} bytes). Maximum allowed: {max} bytes")]
    FileTooLarge {
        path: PathBuf,
        actual: u64,
        max: u64,
    },
}

/// Result type for table loading.
pub type Result<T> = std::result::Result<T, CsvError>;
