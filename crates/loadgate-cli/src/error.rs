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

//! Structured error types for the Loadgate CLI.
//!
//! All commands return `Result<(), CliError>`. Each variant maps to a process
//! exit status through [`CliError::exit_code`]; a threshold violation is a
//! business outcome with its own status, distinct from operational errors.

use loadgate_core::EmitError;
use loadgate_csv::CsvError;
use thiserror::Error;

/// Exit status for a run that passed (or had no thresholds).
pub const EXIT_SUCCESS: u8 = 0;
/// Exit status for operational errors (unreadable table, bad arguments, ...).
pub const EXIT_ERROR: u8 = 1;
/// Exit status when configured thresholds are violated.
pub const EXIT_THRESHOLDS_FAILED: u8 = 2;

/// The main error type for Loadgate CLI operations.
///
/// # Examples
///
/// ```rust
/// use loadgate_cli::error::{CliError, EXIT_THRESHOLDS_FAILED};
///
/// let err = CliError::ThresholdsFailed {
///     reasons: vec!["fail_ratio 0.3000 > 0.0500".to_string()],
/// };
/// assert_eq!(err.exit_code(), EXIT_THRESHOLDS_FAILED);
/// assert_eq!(err.to_string(), "Thresholds failed: fail_ratio 0.3000 > 0.0500");
/// ```
#[derive(Error, Debug, Clone)]
pub enum CliError {
    /// The statistics table exists but could not be loaded.
    #[error("Failed to load stats table: {0}")]
    Load(String),

    /// Writing the key/value output file failed (only fatal with `--strict-output`).
    #[error("Failed to write outputs: {0}")]
    Output(String),

    /// JSON serialization error.
    #[error("JSON format error: {message}")]
    JsonFormat {
        /// The error message
        message: String,
    },

    /// Invalid input provided by the user.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// One or more configured thresholds were violated.
    #[error("Thresholds failed: {}", reasons.join("; "))]
    ThresholdsFailed {
        /// Reasons in check order.
        reasons: Vec<String>,
    },
}

impl CliError {
    /// Create an invalid input error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::ThresholdsFailed { .. } => EXIT_THRESHOLDS_FAILED,
            _ => EXIT_ERROR,
        }
    }
}

impl From<CsvError> for CliError {
    fn from(source: CsvError) -> Self {
        Self::Load(source.to_string())
    }
}

impl From<EmitError> for CliError {
    fn from(source: EmitError) -> Self {
        Self::Output(source.to_string())
    }
}

// Automatic conversion from serde_json::Error
impl From<serde_json::Error> for CliError {
    fn from(source: serde_json::Error) -> Self {
        Self::JsonFormat {
            message: source.to_string(),
        }
    }
}
