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

//! Core extraction pipeline for `perf stat` benchmark logs.
//!
//! This crate turns a flat directory of human-readable performance logs,
//! produced by baseline and optimized runs of a benchmarked program, into a
//! normalized collection of [`MetricRecord`]s ready for tabular analysis.
//!
//! # Pipeline
//!
//! 1. [`classify_filename`] — derive `(version, dataset, sample count)` from
//!    the filename grammar `<version>_<dataset>_<samples>[k]_<suffix>`.
//! 2. [`extract_counters`] — scan the file content against a fixed table of
//!    counter patterns (L1/L2 cache events, branch events, elapsed time).
//! 3. [`compute_derived_rates`] — miss/hit percentages with
//!    division-by-zero guards.
//! 4. [`extract_all`] — the full directory scan, one record per recognized
//!    file. Callers apply [`sort_records`] before presenting the result.
//!
//! # Numeric conventions
//!
//! The logs mix two separator conventions: `.` as a thousands grouping
//! character (`1.234.567`) and `,` as the decimal point (`12,34`). See
//! [`parse_locale_number`] for the normalization rule.
//!
//! # Failure semantics
//!
//! Data-quality problems are never fatal: unrecognized filenames are skipped
//! and unmatched or malformed counter values default to `0.0`. The only
//! fatal condition is an absent or unreadable input directory, reported as
//! [`ExtractError::DirectoryAccess`].

mod counters;
mod error;
mod extract;
mod filename;
mod numeric;
mod record;

pub use counters::{compute_derived_rates, extract_counters, Counters, DerivedRates};
pub use error::{ExtractError, ExtractResult};
pub use extract::{extract_all, extract_all_with_options, sort_records, ExtractOptions};
pub use filename::{classify_filename, LogFileIdentity, Version};
pub use numeric::parse_locale_number;
pub use record::MetricRecord;
