// Dweve PerfCmp - Performance Counter Comparison Toolkit
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

//! Analyze command - the baseline-vs-optimized comparison report.

use super::load_sorted_records;
use crate::error::CliError;
use perfcmp_core::ExtractOptions;
use perfcmp_report::{console, pair_records};

/// Analyzes a log directory and prints the comparison report to stdout.
///
/// Extracts all recognized logs, pairs baseline with optimized runs per
/// `(dataset, sample size)` key, and prints either the full report or, with
/// `summary`, one line per pair. Keys missing one of the two versions are
/// omitted from the output.
///
/// # Errors
///
/// Returns `Err` when the directory cannot be read.
pub fn analyze(dir: &str, summary: bool, options: &ExtractOptions) -> Result<(), CliError> {
    let records = load_sorted_records(dir, options)?;
    let pairs = pair_records(&records);

    if summary {
        console::print_summary(&pairs);
    } else {
        console::print_report(&pairs);
    }
    Ok(())
}
