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

//! Error types for result emission.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while writing outputs.
///
/// Aggregation and threshold evaluation cannot fail; only the output-file
/// append performs I/O.
#[derive(Debug, Error)]
pub enum EmitError {
    /// Opening or appending to the key/value output file failed.
    ///
    /// Lines written before the failure stay in the file.
    #[error("failed to write outputs to '{path}': {source}")]
    Sink {
        /// Output file path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Result type for emission operations.
pub type Result<T> = std::result::Result<T, EmitError>;
