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

//! Export commands - CSV and JSON serialization of the record set.

use super::{load_sorted_records, write_output};
use crate::error::CliError;
use perfcmp_core::ExtractOptions;
use perfcmp_report::{csv, json, pair_records};

/// Exports the sorted record set as CSV to a file or stdout.
///
/// # Errors
///
/// Returns `Err` when the directory cannot be read, serialization fails, or
/// the output file cannot be written.
pub fn export_csv(dir: &str, output: Option<&str>, options: &ExtractOptions) -> Result<(), CliError> {
    let records = load_sorted_records(dir, options)?;
    let content = csv::records_to_csv(&records)?;
    write_output(output, &content)
}

/// Exports records, or baseline/optimized pairs with `pairs`, as JSON.
///
/// # Errors
///
/// Returns `Err` when the directory cannot be read, serialization fails, or
/// the output file cannot be written.
pub fn export_json(
    dir: &str,
    output: Option<&str>,
    pretty: bool,
    pairs: bool,
    options: &ExtractOptions,
) -> Result<(), CliError> {
    let records = load_sorted_records(dir, options)?;
    let mut content = if pairs {
        json::pairs_to_json(&pair_records(&records), pretty)?
    } else {
        json::records_to_json(&records, pretty)?
    };
    content.push('\n');
    write_output(output, &content)
}
