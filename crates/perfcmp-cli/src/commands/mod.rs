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

//! CLI command implementations.

mod analyze;
mod completion;
mod export;
mod records;

pub use analyze::analyze;
pub use completion::completion;
pub use export::{export_csv, export_json};
pub use records::records;

use crate::error::CliError;
use perfcmp_core::{extract_all_with_options, sort_records, ExtractOptions, MetricRecord};
use std::fs;
use std::path::Path;

/// Extracts every record from `dir` and applies the pipeline sort.
pub(crate) fn load_sorted_records(
    dir: &str,
    options: &ExtractOptions,
) -> Result<Vec<MetricRecord>, CliError> {
    let mut records = extract_all_with_options(Path::new(dir), options)?;
    sort_records(&mut records);
    Ok(records)
}

/// Writes `content` to `output`, or to stdout when no path is given.
pub(crate) fn write_output(output: Option<&str>, content: &str) -> Result<(), CliError> {
    match output {
        Some(path) => fs::write(path, content).map_err(|e| CliError::io_error(path, &e)),
        None => {
            print!("{}", content);
            Ok(())
        }
    }
}
