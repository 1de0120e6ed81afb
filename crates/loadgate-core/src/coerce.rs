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

//! Lenient numeric parsing for raw table cells.
//!
//! Neither function fails. Malformed input maps to a sentinel: `0` for
//! integers, `NaN` for floats. Callers must test `is_nan()` before using a
//! coerced float in arithmetic.

/// Parse an integer cell.
///
/// Tries an integer parse first, then a float parse truncated toward zero.
/// Anything else, including non-finite floats, yields `0`.
///
/// ```
/// use loadgate_core::to_int;
///
/// assert_eq!(to_int("42"), 42);
/// assert_eq!(to_int("42.9"), 42);
/// assert_eq!(to_int("-3.5"), -3);
/// assert_eq!(to_int("n/a"), 0);
/// ```
pub fn to_int(text: &str) -> i64 {
    let text = text.trim();
    if let Ok(n) = text.parse::<i64>() {
        return n;
    }
    match text.parse::<f64>() {
        // `as` saturates at the i64 bounds
        Ok(f) if f.is_finite() => f.trunc() as i64,
        _ => 0,
    }
}

/// Parse a floating-point cell, returning `f64::NAN` when it is not a number.
///
/// ```
/// use loadgate_core::to_float;
///
/// assert_eq!(to_float("120.5"), 120.5);
/// assert!(to_float("").is_nan());
/// assert!(to_float("fast").is_nan());
/// ```
pub fn to_float(text: &str) -> f64 {
    text.trim().parse::<f64>().unwrap_or(f64::NAN)
}
