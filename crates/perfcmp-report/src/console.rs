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

//! Console reporters for records and comparison pairs.
//!
//! Formats and prints banner-style reports to stdout.

use crate::pairing::ComparisonPair;
use colored::Colorize;
use perfcmp_core::MetricRecord;

const BANNER_WIDTH: usize = 100;

/// Groups an integral count with `,` thousands separators for display.
fn group_thousands(value: f64) -> String {
    let digits = format!("{:.0}", value.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if value < 0.0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Prints the full baseline-vs-optimized comparison report.
///
/// One section per dataset, one block per sample size, covering elapsed
/// time with speedup, L1/L2 cache behavior, and branch prediction.
pub fn print_report(pairs: &[ComparisonPair]) {
    println!("{}", "=".repeat(BANNER_WIDTH));
    println!("{}", "PERFORMANCE ANALYSIS - BASELINE vs OPTIMIZED".bold());
    println!("{}", "=".repeat(BANNER_WIDTH));

    if pairs.is_empty() {
        println!("\nNo complete baseline/optimized pairs found.");
        println!("{}\n", "=".repeat(BANNER_WIDTH));
        return;
    }

    let mut current_dataset: Option<&str> = None;
    for pair in pairs {
        if current_dataset != Some(pair.dataset.as_str()) {
            current_dataset = Some(pair.dataset.as_str());
            println!("\n{}", "=".repeat(BANNER_WIDTH));
            println!("DATASET: {}", pair.dataset.to_uppercase().bold());
            println!("{}", "=".repeat(BANNER_WIDTH));
        }
        print_pair(pair);
    }

    println!("\n{}", "=".repeat(BANNER_WIDTH));
    println!("{}", "Analysis complete.".green());
    println!("{}\n", "=".repeat(BANNER_WIDTH));
}

fn print_pair(pair: &ComparisonPair) {
    let b = &pair.baseline;
    let o = &pair.optimized;
    let cmp = &pair.comparison;

    println!("\nSample size: {}", group_thousands(pair.sample_count));
    println!("{}", "-".repeat(BANNER_WIDTH));

    println!("TIME:");
    println!("   Baseline:  {:.3}s", b.time_elapsed);
    println!("   Optimized: {:.3}s", o.time_elapsed);
    let speedup = format!(
        "{:.2}x ({:+.1}%)",
        cmp.time_speedup, cmp.time_improvement_pct
    );
    let speedup = if cmp.time_speedup >= 1.0 {
        speedup.green()
    } else {
        speedup.red()
    };
    println!("   Speedup:   {}", speedup);

    println!("L1 CACHE:");
    println!(
        "   Baseline:  {:>15} loads  (miss rate {:.2}%)",
        group_thousands(b.l1_loads),
        b.l1_miss_rate
    );
    println!(
        "   Optimized: {:>15} loads  (miss rate {:.2}%)",
        group_thousands(o.l1_loads),
        o.l1_miss_rate
    );
    println!("   Load reduction: {:+.1}%", cmp.l1_load_reduction_pct);

    println!("L2 CACHE:");
    println!(
        "   Baseline:  {:>15} accesses  (hit rate {:.2}%)",
        group_thousands(b.l2_accesses),
        b.l2_hit_rate
    );
    println!(
        "   Optimized: {:>15} accesses  (hit rate {:.2}%)",
        group_thousands(o.l2_accesses),
        o.l2_hit_rate
    );
    println!("   Access reduction: {:+.1}%", cmp.l2_access_reduction_pct);

    println!("BRANCH PREDICTION:");
    println!(
        "   Baseline:  {:>15} misses  (miss rate {:.2}%)",
        group_thousands(b.branch_misses),
        b.branch_miss_rate
    );
    println!(
        "   Optimized: {:>15} misses  (miss rate {:.2}%)",
        group_thousands(o.branch_misses),
        o.branch_miss_rate
    );
    println!("   Miss reduction: {:+.1}%", cmp.branch_miss_reduction_pct);
}

/// Prints a one-line-per-pair summary of the comparison report.
pub fn print_summary(pairs: &[ComparisonPair]) {
    println!("{}", "=".repeat(60));
    println!("SUMMARY ({} pairs)", pairs.len());
    println!("{}", "=".repeat(60));
    for pair in pairs {
        println!(
            "{:<20} {:>12} samples  {:>8.3}s -> {:>8.3}s  {:.2}x",
            pair.dataset,
            group_thousands(pair.sample_count),
            pair.baseline.time_elapsed,
            pair.optimized.time_elapsed,
            pair.comparison.time_speedup
        );
    }
}

/// Prints the sorted record set, one line per record.
pub fn print_records(records: &[MetricRecord]) {
    println!(
        "{:<10} {:<20} {:>12} {:>10} {:>12} {:>12} {:>12}",
        "version", "dataset", "samples", "time (s)", "l1 miss %", "l2 hit %", "branch miss %"
    );
    println!("{}", "-".repeat(BANNER_WIDTH));
    for r in records {
        println!(
            "{:<10} {:<20} {:>12} {:>10.3} {:>12.2} {:>12.2} {:>12.2}",
            r.version.to_string(),
            r.dataset,
            group_thousands(r.sample_count),
            r.time_elapsed,
            r.l1_miss_rate,
            r.l2_hit_rate,
            r.branch_miss_rate
        );
    }
    println!("{} records", records.len());
}
