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

//! Baseline/optimized pairing and per-pair comparison figures.

use perfcmp_core::{sort_records, MetricRecord, Version};
use serde::Serialize;

/// Derived comparison figures for one baseline/optimized pair.
///
/// Each figure is `0.0` when its denominator is not strictly positive, the
/// same guard discipline as the per-record derived rates. Reductions are
/// positive when the optimized run did less work.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Comparison {
    /// `baseline.time_elapsed / optimized.time_elapsed`.
    pub time_speedup: f64,
    /// Percent of baseline time saved by the optimized run.
    pub time_improvement_pct: f64,
    /// Percent reduction in L1 data-cache loads.
    pub l1_load_reduction_pct: f64,
    /// Percent reduction in L2 cache accesses.
    pub l2_access_reduction_pct: f64,
    /// Percent reduction in branch misses.
    pub branch_miss_reduction_pct: f64,
}

/// A matched baseline/optimized record pair for one `(dataset, samples)` key.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonPair {
    /// Dataset identifier shared by both records.
    pub dataset: String,
    /// Sample count shared by both records.
    pub sample_count: f64,
    /// The baseline run.
    pub baseline: MetricRecord,
    /// The optimized run.
    pub optimized: MetricRecord,
    /// Derived comparison figures.
    pub comparison: Comparison,
}

fn speedup(baseline: f64, optimized: f64) -> f64 {
    if optimized > 0.0 {
        baseline / optimized
    } else {
        0.0
    }
}

fn reduction_pct(baseline: f64, optimized: f64) -> f64 {
    if baseline > 0.0 {
        (baseline - optimized) / baseline * 100.0
    } else {
        0.0
    }
}

/// Computes the comparison figures for one matched pair of records.
pub fn compare(baseline: &MetricRecord, optimized: &MetricRecord) -> Comparison {
    Comparison {
        time_speedup: speedup(baseline.time_elapsed, optimized.time_elapsed),
        time_improvement_pct: reduction_pct(baseline.time_elapsed, optimized.time_elapsed),
        l1_load_reduction_pct: reduction_pct(baseline.l1_loads, optimized.l1_loads),
        l2_access_reduction_pct: reduction_pct(baseline.l2_accesses, optimized.l2_accesses),
        branch_miss_reduction_pct: reduction_pct(baseline.branch_misses, optimized.branch_misses),
    }
}

/// Pairs baseline and optimized records sharing a `(dataset, samples)` key.
///
/// The input does not need to be sorted; pairing works on a sorted copy and
/// the output is ordered by `(dataset, sample_count)` ascending. A key that
/// has only one of the two versions is omitted silently: incomplete pairs
/// are a fact of partial benchmark runs, not an error. When duplicates
/// exist for one key, the first record of each version (in sorted order)
/// wins.
pub fn pair_records(records: &[MetricRecord]) -> Vec<ComparisonPair> {
    let mut sorted = records.to_vec();
    sort_records(&mut sorted);

    let mut pairs = Vec::new();
    let mut i = 0;
    while i < sorted.len() {
        let baseline = &sorted[i];
        if baseline.version == Version::Baseline {
            let optimized = sorted[i + 1..].iter().find(|r| {
                r.dataset == baseline.dataset && r.sample_count == baseline.sample_count
                    && r.version == Version::Optimized
            });
            if let Some(optimized) = optimized {
                pairs.push(ComparisonPair {
                    dataset: baseline.dataset.clone(),
                    sample_count: baseline.sample_count,
                    baseline: baseline.clone(),
                    optimized: optimized.clone(),
                    comparison: compare(baseline, optimized),
                });
                // Jump past every record with this key, duplicates included.
                let key = (baseline.dataset.clone(), baseline.sample_count);
                while i < sorted.len()
                    && sorted[i].dataset == key.0
                    && sorted[i].sample_count == key.1
                {
                    i += 1;
                }
                continue;
            }
        }
        i += 1;
    }
    pairs
}
