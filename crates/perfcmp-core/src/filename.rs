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

//! Filename classification.
//!
//! Log filenames follow the grammar
//! `<version>_<dataset>_<samples>[k]_<suffix>.{log,txt}`, e.g.
//! `baseline_optdigits_1k_perf_run1.log`. This module derives a typed
//! [`LogFileIdentity`] from that grammar, or `None` for anything else.

use crate::numeric::parse_locale_number;
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;

/// `<version>_<dataset>_<samples>[k]_` anywhere in the filename.
///
/// The sample token accepts both separator conventions (`2,5k`, `1.000`);
/// the version token is case-insensitive.
static FILENAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(baseline|optimized)_([A-Za-z0-9_]+)_([0-9.,]+)(k?)_").unwrap()
});

/// Which variant of the benchmarked program produced a log.
///
/// The derived `Ord` follows the literal label ordering
/// (`baseline < optimized`), which is the tie-break order of the final
/// record sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Version {
    /// The unmodified reference build.
    Baseline,
    /// The build under evaluation.
    Optimized,
}

impl Version {
    /// The lowercase label as it appears in filenames.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Baseline => "baseline",
            Self::Optimized => "optimized",
        }
    }

    fn from_token(token: &str) -> Option<Self> {
        if token.eq_ignore_ascii_case("baseline") {
            Some(Self::Baseline)
        } else if token.eq_ignore_ascii_case("optimized") {
            Some(Self::Optimized)
        } else {
            None
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity of one log file, derived from its name alone.
#[derive(Debug, Clone, PartialEq)]
pub struct LogFileIdentity {
    /// Which build produced the log.
    pub version: Version,
    /// Dataset identifier (alphanumeric/underscore token).
    pub dataset: String,
    /// Number of samples in the benchmark run. A `k` suffix in the
    /// filename scales the token by 1000 (`2,5k` -> 2500.0).
    pub sample_count: f64,
}

/// Classifies a filename against the expected token layout.
///
/// Returns `None` when the pattern does not match anywhere in the name, or
/// when the sample token does not parse; callers skip such files without
/// raising an error.
///
/// # Examples
///
/// ```
/// use perfcmp_core::{classify_filename, Version};
///
/// let id = classify_filename("baseline_optdigits_1k_perf.log").unwrap();
/// assert_eq!(id.version, Version::Baseline);
/// assert_eq!(id.dataset, "optdigits");
/// assert_eq!(id.sample_count, 1000.0);
///
/// assert!(classify_filename("weird_name_no_version.log").is_none());
/// ```
pub fn classify_filename(name: &str) -> Option<LogFileIdentity> {
    let caps = FILENAME_PATTERN.captures(name)?;
    let version = Version::from_token(&caps[1])?;
    let dataset = caps[2].to_string();
    let mut sample_count = parse_locale_number(&caps[3])?;
    if !caps[4].is_empty() {
        sample_count *= 1000.0;
    }
    Some(LogFileIdentity {
        version,
        dataset,
        sample_count,
    })
}
