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

//! Counter extraction and derived-rate computation.
//!
//! `perf stat` prints each counter as `<value> <event-name>`, with the value
//! in the locale convention handled by
//! [`parse_locale_number`](crate::parse_locale_number). The counters of
//! interest are declared once in a label-to-pattern table so that adding an
//! event never touches the extraction control flow.

use crate::numeric::parse_locale_number;
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

/// The fixed set of raw counters extracted from one log file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum CounterKind {
    L1Loads,
    L1Misses,
    L2Accesses,
    L2Hits,
    L2Misses,
    BranchLoads,
    BranchMisses,
    TimeElapsed,
}

/// Label patterns, one per counter, matched against the whole file content.
///
/// Value precedes label on the line. The trailing `\s` on `L1-dcache-load`
/// and `branch-load` keeps them from matching inside their `-misses`
/// siblings.
static COUNTER_TABLE: LazyLock<Vec<(CounterKind, Regex)>> = LazyLock::new(|| {
    [
        (CounterKind::L1Loads, r"([\d.,]+)\s+L1-dcache-load\s"),
        (CounterKind::L1Misses, r"([\d.,]+)\s+L1-dcache-load-misses"),
        (
            CounterKind::L2Accesses,
            r"([\d.,]+)\s+l2_cache_accesses_from_dc_misses",
        ),
        (
            CounterKind::L2Hits,
            r"([\d.,]+)\s+l2_cache_hits_from_dc_misses",
        ),
        (
            CounterKind::L2Misses,
            r"([\d.,]+)\s+l2_cache_misses_from_dc_misses",
        ),
        (CounterKind::BranchLoads, r"([\d.,]+)\s+branch-load\s"),
        (CounterKind::BranchMisses, r"([\d.,]+)\s+branch-load-misses"),
        (CounterKind::TimeElapsed, r"([\d.,]+)\s+seconds time elapsed"),
    ]
    .into_iter()
    .map(|(kind, pattern)| (kind, Regex::new(pattern).unwrap()))
    .collect()
});

/// Raw counters extracted from one log file.
///
/// Every field defaults to `0.0` when its pattern is absent from the file or
/// its value text does not parse; a zero is therefore indistinguishable from
/// a genuinely unmeasured counter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Counters {
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
}

impl Counters {
    fn set(&mut self, kind: CounterKind, value: f64) {
        match kind {
            CounterKind::L1Loads => self.l1_loads = value,
            CounterKind::L1Misses => self.l1_misses = value,
            CounterKind::L2Accesses => self.l2_accesses = value,
            CounterKind::L2Hits => self.l2_hits = value,
            CounterKind::L2Misses => self.l2_misses = value,
            CounterKind::BranchLoads => self.branch_loads = value,
            CounterKind::BranchMisses => self.branch_misses = value,
            CounterKind::TimeElapsed => self.time_elapsed = value,
        }
    }
}

/// Rates derived from [`Counters`], in percent.
///
/// Each rate is `0.0` whenever its denominator is not strictly positive;
/// the three guards (L1, L2, branch) are independent of one another.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct DerivedRates {
    /// `l1_misses / l1_loads * 100`.
    pub l1_miss_rate: f64,
    /// `l2_hits / l2_accesses * 100`.
    pub l2_hit_rate: f64,
    /// `l2_misses / l2_accesses * 100`.
    pub l2_miss_rate: f64,
    /// `branch_misses / branch_loads * 100`.
    pub branch_miss_rate: f64,
}

/// Extracts every known counter from the content of one log file.
///
/// For each entry of the counter table, the first match in the content wins.
/// Absent patterns and malformed value text both yield `0.0`, so the result
/// is always a complete [`Counters`].
///
/// # Examples
///
/// ```
/// use perfcmp_core::extract_counters;
///
/// let content = "  1.234.567  L1-dcache-load-misses\n  12,34 seconds time elapsed\n";
/// let counters = extract_counters(content);
/// assert_eq!(counters.l1_misses, 1_234_567.0);
/// assert_eq!(counters.time_elapsed, 12.34);
/// assert_eq!(counters.l1_loads, 0.0);
/// ```
pub fn extract_counters(content: &str) -> Counters {
    let mut counters = Counters::default();
    for (kind, pattern) in COUNTER_TABLE.iter() {
        if let Some(caps) = pattern.captures(content) {
            let value = parse_locale_number(&caps[1]).unwrap_or(0.0);
            counters.set(*kind, value);
        }
    }
    counters
}

/// Computes the derived percentage rates for a set of raw counters.
///
/// Each denominator is guarded independently: a zero `l1_loads` zeroes only
/// the L1 miss rate, never the L2 or branch rates.
pub fn compute_derived_rates(counters: &Counters) -> DerivedRates {
    let mut rates = DerivedRates::default();
    if counters.l1_loads > 0.0 {
        rates.l1_miss_rate = counters.l1_misses / counters.l1_loads * 100.0;
    }
    if counters.l2_accesses > 0.0 {
        rates.l2_hit_rate = counters.l2_hits / counters.l2_accesses * 100.0;
        rates.l2_miss_rate = counters.l2_misses / counters.l2_accesses * 100.0;
    }
    if counters.branch_loads > 0.0 {
        rates.branch_miss_rate = counters.branch_misses / counters.branch_loads * 100.0;
    }
    rates
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_LOG: &str = "\
 Performance counter stats for './rf_optimized optdigits 1000':

     1.000.000      L1-dcache-load \n\
       100.000      L1-dcache-load-misses
        50.000      l2_cache_accesses_from_dc_misses
        40.000      l2_cache_hits_from_dc_misses
        10.000      l2_cache_misses_from_dc_misses
       200.000      branch-load \n\
         5.000      branch-load-misses

          1,234 seconds time elapsed
";

    #[test]
    fn extracts_every_counter_from_a_full_log() {
        let counters = extract_counters(SAMPLE_LOG);
        assert_eq!(counters.l1_loads, 1_000_000.0);
        assert_eq!(counters.l1_misses, 100_000.0);
        assert_eq!(counters.l2_accesses, 50_000.0);
        assert_eq!(counters.l2_hits, 40_000.0);
        assert_eq!(counters.l2_misses, 10_000.0);
        assert_eq!(counters.branch_loads, 200_000.0);
        assert_eq!(counters.branch_misses, 5_000.0);
        assert_eq!(counters.time_elapsed, 1.234);
    }

    #[test]
    fn load_pattern_does_not_match_the_misses_line() {
        let counters = extract_counters("  500  L1-dcache-load-misses\n");
        assert_eq!(counters.l1_misses, 500.0);
        assert_eq!(counters.l1_loads, 0.0);
    }

    #[test]
    fn absent_counters_default_to_zero() {
        let counters = extract_counters("nothing of interest here\n");
        assert_eq!(counters, Counters::default());
    }

    #[test]
    fn thousands_dots_in_counter_values() {
        let counters = extract_counters("1.234.567 L1-dcache-load-misses\n");
        assert_eq!(counters.l1_misses, 1_234_567.0);
    }

    #[test]
    fn decimal_comma_in_elapsed_time() {
        let counters = extract_counters("12,34 seconds time elapsed\n");
        assert_eq!(counters.time_elapsed, 12.34);
    }

    #[test]
    fn rates_for_a_full_counter_set() {
        let counters = extract_counters(SAMPLE_LOG);
        let rates = compute_derived_rates(&counters);
        assert_eq!(rates.l1_miss_rate, 10.0);
        assert_eq!(rates.l2_hit_rate, 80.0);
        assert_eq!(rates.l2_miss_rate, 20.0);
        assert_eq!(rates.branch_miss_rate, 2.5);
    }

    #[test]
    fn zero_denominators_guard_independently() {
        let counters = Counters {
            l1_misses: 10.0,
            l2_accesses: 100.0,
            l2_hits: 80.0,
            l2_misses: 20.0,
            branch_misses: 7.0,
            ..Counters::default()
        };
        let rates = compute_derived_rates(&counters);
        // l1_loads and branch_loads are zero; only their rates collapse.
        assert_eq!(rates.l1_miss_rate, 0.0);
        assert_eq!(rates.branch_miss_rate, 0.0);
        assert_eq!(rates.l2_hit_rate, 80.0);
        assert_eq!(rates.l2_miss_rate, 20.0);
    }

    #[test]
    fn all_zero_counters_yield_all_zero_rates() {
        assert_eq!(
            compute_derived_rates(&Counters::default()),
            DerivedRates::default()
        );
    }
}
