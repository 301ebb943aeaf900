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

//! JSON export of metric records and comparison pairs.

use crate::error::{ReportError, ReportResult};
use crate::pairing::ComparisonPair;
use perfcmp_core::MetricRecord;
use serde::Serialize;

fn to_json<T: Serialize>(value: &T, pretty: bool) -> ReportResult<String> {
    let result = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    result.map_err(ReportError::json)
}

/// Serializes the record set as a JSON array.
///
/// # Errors
///
/// Returns [`ReportError::Json`] when serialization fails.
pub fn records_to_json(records: &[MetricRecord], pretty: bool) -> ReportResult<String> {
    to_json(&records, pretty)
}

/// Serializes baseline/optimized pairs as a JSON array.
///
/// Each element carries both full records plus the derived comparison
/// figures, so consumers never need to re-pair.
///
/// # Errors
///
/// Returns [`ReportError::Json`] when serialization fails.
pub fn pairs_to_json(pairs: &[ComparisonPair], pretty: bool) -> ReportResult<String> {
    to_json(&pairs, pretty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pairing::pair_records;
    use perfcmp_core::{compute_derived_rates, extract_counters, LogFileIdentity, Version};

    fn record(version: Version, content: &str) -> MetricRecord {
        let counters = extract_counters(content);
        let rates = compute_derived_rates(&counters);
        MetricRecord::assemble(
            LogFileIdentity {
                version,
                dataset: "adult".to_string(),
                sample_count: 1000.0,
            },
            counters,
            rates,
        )
    }

    #[test]
    fn records_serialize_with_lowercase_version() {
        let json = records_to_json(&[record(Version::Baseline, "")], false).unwrap();
        assert!(json.contains("\"version\":\"baseline\""));
        assert!(json.contains("\"dataset\":\"adult\""));
    }

    #[test]
    fn pairs_carry_comparison_figures() {
        let records = vec![
            record(Version::Baseline, "4 seconds time elapsed\n"),
            record(Version::Optimized, "2 seconds time elapsed\n"),
        ];
        let pairs = pair_records(&records);
        let json = pairs_to_json(&pairs, false).unwrap();
        assert!(json.contains("\"time_speedup\":2.0"));
        assert!(json.contains("\"baseline\""));
        assert!(json.contains("\"optimized\""));
    }

    #[test]
    fn pretty_output_is_multiline() {
        let json = records_to_json(&[record(Version::Optimized, "")], true).unwrap();
        assert!(json.contains('\n'));
    }
}
