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

use crate::FixtureList;

/// Locust 2.x layout. `Aggregated`: 1000 requests, 25 failures, 120.5 ms
/// average, 300 ms p95.
pub const LOCUST_STATS: &str = "\
Type,Name,Request Count,Failure Count,Median Response Time,Average Response Time,Min Response Time,Max Response Time,Average Content Size,Requests/s,Failures/s,50%,66%,75%,80%,90%,95%,98%,99%,99.9%,99.99%,100%
GET,/,600,5,95,100,12,410,512,20.0,0.17,95,110,120,130,160,250,300,330,400,410,410
POST,/items,400,20,140,151.25,20,900,128,13.3,0.67,140,160,170,180,220,300,500,700,900,900,900
,Aggregated,1000,25,110,120.5,12,900,358.4,33.3,0.83,110,130,140,150,190,300,400,500,900,900,900
";

/// Locust 0.x layout with `#`-prefixed counts and quoted cells.
pub const LEGACY_STATS: &str = "\
\"Method\",\"Name\",\"# requests\",\"# failures\",\"Median response time\",\"Average response time\",\"Min response time\",\"Max response time\",\"Average Content Size\",\"Requests/s\",\"95th percentile\"
\"GET\",\"/\",\"50\",\"1\",11,12,3,80,100,5.00,40
\"None\",\"Aggregated\",\"50\",\"1\",11,12,3,80,100,5.00,40
";

/// Two summary rows; the first one is authoritative.
pub const DUPLICATE_AGGREGATED: &str = "\
Type,Name,Request Count,Failure Count,Average Response Time,95%
GET,/,1000,25,120.5,300
,Aggregated,1000,25,120.5,300
,Aggregated,10,10,9999,9999
";

/// Per-endpoint rows only.
pub const NO_SUMMARY_ROW: &str = "\
Type,Name,Request Count,Failure Count,Average Response Time,95%
GET,/,600,5,100,250
POST,/items,400,20,150,320
";

/// A run that breaks every reasonable limit: 30% failures, slow.
pub const FAILING_RUN: &str = "\
Type,Name,Request Count,Failure Count,Average Response Time,95%
GET,/fail,200,60,850,2400
,Aggregated,200,60,850,2400
";

/// Summary row with unparsable numbers.
pub const MALFORMED_VALUES: &str = "\
Type,Name,Request Count,Failure Count,Average Response Time,95%
,Aggregated,N/A,,fast,-
";

/// Header without data rows.
pub const HEADER_ONLY: &str = "\
Type,Name,Request Count,Failure Count,Average Response Time,95%
";

/// All fixtures for iteration.
pub fn all() -> FixtureList {
    vec![
        ("locust_stats", LOCUST_STATS),
        ("legacy_stats", LEGACY_STATS),
        ("duplicate_aggregated", DUPLICATE_AGGREGATED),
        ("no_summary_row", NO_SUMMARY_ROW),
        ("failing_run", FAILING_RUN),
        ("malformed_values", MALFORMED_VALUES),
        ("header_only", HEADER_ONLY),
    ]
}
