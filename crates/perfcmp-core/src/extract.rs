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

//! Directory scanning and record assembly.

use crate::counters::{compute_derived_rates, extract_counters};
use crate::error::{ExtractError, ExtractResult};
use crate::filename::classify_filename;
use crate::record::MetricRecord;
use std::fs;
use std::path::Path;

/// Filename filter applied before classification.
///
/// Only files whose name contains `marker` and ends in one of `extensions`
/// are considered at all. The defaults match the layout written by the
/// benchmark harness: `*perf*.log` / `*perf*.txt`.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Substring that must appear somewhere in the filename.
    pub marker: String,
    /// Accepted file extensions, compared case-insensitively, without dots.
    pub extensions: Vec<String>,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            marker: "perf".to_string(),
            extensions: vec!["log".to_string(), "txt".to_string()],
        }
    }
}

impl ExtractOptions {
    fn accepts(&self, name: &str) -> bool {
        if !name.contains(&self.marker) {
            return false;
        }
        let Some(ext) = Path::new(name).extension().and_then(|e| e.to_str()) else {
            return false;
        };
        self.extensions.iter().any(|e| ext.eq_ignore_ascii_case(e))
    }
}

/// Extracts one [`MetricRecord`] per recognized log file in `dir`.
///
/// Equivalent to [`extract_all_with_options`] with [`ExtractOptions::default`].
///
/// # Errors
///
/// Returns [`ExtractError::DirectoryAccess`] when `dir` is absent or
/// unreadable. Per-file problems never fail the scan: unrecognized
/// filenames are skipped and unmatched counters default to zero.
pub fn extract_all(dir: &Path) -> ExtractResult<Vec<MetricRecord>> {
    extract_all_with_options(dir, &ExtractOptions::default())
}

/// Extracts records from `dir` using an explicit filename filter.
///
/// Files are processed independently, each read to completion and released
/// before the next is opened. The returned order is the directory iteration
/// order; callers present results only after [`sort_records`].
///
/// A file that disappears or is not valid UTF-8 between the directory
/// snapshot and the read is skipped, the same way a file with unmatched
/// counter text contributes zeros: partial input is absent data, not an
/// error.
///
/// # Errors
///
/// Returns [`ExtractError::DirectoryAccess`] when the directory itself
/// cannot be enumerated.
pub fn extract_all_with_options(
    dir: &Path,
    options: &ExtractOptions,
) -> ExtractResult<Vec<MetricRecord>> {
    let entries = fs::read_dir(dir).map_err(|e| ExtractError::directory_access(dir, &e))?;

    let mut records = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| ExtractError::directory_access(dir, &e))?;
        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            continue;
        };
        if !options.accepts(name) {
            continue;
        }
        let Some(identity) = classify_filename(name) else {
            continue;
        };
        let Ok(content) = fs::read_to_string(entry.path()) else {
            continue;
        };
        let counters = extract_counters(&content);
        let rates = compute_derived_rates(&counters);
        records.push(MetricRecord::assemble(identity, counters, rates));
    }
    Ok(records)
}

/// Sorts records by `(dataset, sample_count, version)` ascending.
///
/// Dataset alphabetically, sample count numerically, version by its literal
/// label ordering (`baseline` before `optimized`). The sort is stable, so
/// equal keys keep their extraction order. Applying this after
/// [`extract_all`] is the required post-condition of the full pipeline.
pub fn sort_records(records: &mut [MetricRecord]) {
    records.sort_by(|a, b| {
        a.dataset
            .cmp(&b.dataset)
            .then_with(|| a.sample_count.total_cmp(&b.sample_count))
            .then_with(|| a.version.cmp(&b.version))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filename::Version;

    fn record(dataset: &str, samples: f64, version: Version) -> MetricRecord {
        MetricRecord::assemble(
            crate::filename::LogFileIdentity {
                version,
                dataset: dataset.to_string(),
                sample_count: samples,
            },
            Default::default(),
            Default::default(),
        )
    }

    #[test]
    fn options_filter_marker_and_extension() {
        let options = ExtractOptions::default();
        assert!(options.accepts("baseline_adult_1k_perf.log"));
        assert!(options.accepts("baseline_adult_1k_perf.TXT"));
        assert!(!options.accepts("baseline_adult_1k_train.log"));
        assert!(!options.accepts("baseline_adult_1k_perf.csv"));
        assert!(!options.accepts("perf"));
    }

    #[test]
    fn sort_orders_dataset_then_samples_then_version() {
        let mut records = vec![
            record("skin", 1000.0, Version::Baseline),
            record("adult", 10_000.0, Version::Optimized),
            record("adult", 1000.0, Version::Optimized),
            record("adult", 1000.0, Version::Baseline),
        ];
        sort_records(&mut records);

        let keys: Vec<_> = records
            .iter()
            .map(|r| (r.dataset.as_str(), r.sample_count, r.version))
            .collect();
        assert_eq!(
            keys,
            vec![
                ("adult", 1000.0, Version::Baseline),
                ("adult", 1000.0, Version::Optimized),
                ("adult", 10_000.0, Version::Optimized),
                ("skin", 1000.0, Version::Baseline),
            ]
        );
    }

    #[test]
    fn missing_directory_is_a_directory_access_error() {
        let err = extract_all(Path::new("/definitely/not/a/real/dir")).unwrap_err();
        assert!(matches!(err, ExtractError::DirectoryAccess { .. }));
    }
}
