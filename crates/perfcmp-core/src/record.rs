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

//! The normalized per-file record.

use crate::counters::{Counters, DerivedRates};
use crate::filename::{LogFileIdentity, Version};
use serde::Serialize;

/// One normalized record per successfully classified log file.
///
/// The record is flat on purpose: every raw counter and derived rate is
/// exposed by name so that tabular consumers (CSV, JSON, console tables)
/// see one column per metric. Records are immutable after assembly and are
/// never merged; files sharing a `(dataset, sample_count)` key relate only
/// through presentation-time grouping.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricRecord {
    /// Which build produced the log.
    pub version: Version,
    /// Dataset identifier from the filename.
    pub dataset: String,
    /// Benchmark sample count from the filename.
    pub sample_count: f64,
    /// L1 data-cache load count.
    pub l1_loads: f64,
    /// L1 data-cache load misses.
    pub l1_misses: f64,
    /// L2 cache accesses caused by L1 misses.
    pub l2_accesses: f64,
    /// L2 cache hits among those accesses.
    pub l2_hits: f64,
    /// L2 cache misses among those accesses.
    pub l2_misses: f64,
    /// Branch load count.
    pub branch_loads: f64,
    /// Branch load misses.
    pub branch_misses: f64,
    /// Wall-clock duration of the run, in seconds.
    pub time_elapsed: f64,
    /// L1 miss percentage (0 when no loads were measured).
    pub l1_miss_rate: f64,
    /// L2 hit percentage (0 when no accesses were measured).
    pub l2_hit_rate: f64,
    /// L2 miss percentage (0 when no accesses were measured).
    pub l2_miss_rate: f64,
    /// Branch miss percentage (0 when no branch loads were measured).
    pub branch_miss_rate: f64,
}

impl MetricRecord {
    /// Assembles a record from the three extraction stages.
    pub fn assemble(identity: LogFileIdentity, counters: Counters, rates: DerivedRates) -> Self {
        Self {
            version: identity.version,
            dataset: identity.dataset,
            sample_count: identity.sample_count,
            l1_loads: counters.l1_loads,
            l1_misses: counters.l1_misses,
            l2_accesses: counters.l2_accesses,
            l2_hits: counters.l2_hits,
            l2_misses: counters.l2_misses,
            branch_loads: counters.branch_loads,
            branch_misses: counters.branch_misses,
            time_elapsed: counters.time_elapsed,
            l1_miss_rate: rates.l1_miss_rate,
            l2_hit_rate: rates.l2_hit_rate,
            l2_miss_rate: rates.l2_miss_rate,
            branch_miss_rate: rates.branch_miss_rate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counters::{compute_derived_rates, extract_counters};
    use crate::filename::classify_filename;

    #[test]
    fn assemble_carries_all_fields() {
        let identity = classify_filename("baseline_optdigits_1k_perf.log").unwrap();
        let counters = extract_counters("500 L1-dcache-load \n50 L1-dcache-load-misses\n");
        let rates = compute_derived_rates(&counters);
        let record = MetricRecord::assemble(identity, counters, rates);

        assert_eq!(record.version, Version::Baseline);
        assert_eq!(record.dataset, "optdigits");
        assert_eq!(record.sample_count, 1000.0);
        assert_eq!(record.l1_loads, 500.0);
        assert_eq!(record.l1_misses, 50.0);
        assert_eq!(record.l1_miss_rate, 10.0);
        assert_eq!(record.time_elapsed, 0.0);
    }
}
