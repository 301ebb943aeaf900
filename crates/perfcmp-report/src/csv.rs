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

//! CSV export of metric records.
//!
//! One row per record, one column per field, header row first. Column order
//! follows the `MetricRecord` declaration: identity, raw counters, derived
//! rates.

use crate::error::{ReportError, ReportResult};
use perfcmp_core::MetricRecord;

/// Serializes records to a CSV string with a header row.
///
/// # Errors
///
/// Returns [`ReportError::Csv`] when serialization fails.
pub fn records_to_csv(records: &[MetricRecord]) -> ReportResult<String> {
    let mut writer = ::csv::Writer::from_writer(Vec::new());
    for record in records {
        writer.serialize(record).map_err(ReportError::csv)?;
    }
    let bytes = writer.into_inner().map_err(ReportError::csv)?;
    String::from_utf8(bytes).map_err(ReportError::csv)
}

#[cfg(test)]
mod tests {
    use super::*;
    use perfcmp_core::{compute_derived_rates, extract_counters, LogFileIdentity, Version};

    fn sample_record() -> MetricRecord {
        let counters =
            extract_counters("500 L1-dcache-load \n50 L1-dcache-load-misses\n1,5 seconds time elapsed\n");
        let rates = compute_derived_rates(&counters);
        MetricRecord::assemble(
            LogFileIdentity {
                version: Version::Baseline,
                dataset: "optdigits".to_string(),
                sample_count: 1000.0,
            },
            counters,
            rates,
        )
    }

    #[test]
    fn header_lists_every_field() {
        let csv = records_to_csv(&[sample_record()]).unwrap();
        let header = csv.lines().next().unwrap();
        assert_eq!(
            header,
            "version,dataset,sample_count,l1_loads,l1_misses,l2_accesses,l2_hits,l2_misses,\
             branch_loads,branch_misses,time_elapsed,l1_miss_rate,l2_hit_rate,l2_miss_rate,\
             branch_miss_rate"
        );
    }

    #[test]
    fn row_carries_identity_and_values() {
        let csv = records_to_csv(&[sample_record()]).unwrap();
        let row = csv.lines().nth(1).unwrap();
        assert!(row.starts_with("baseline,optdigits,1000"));
        assert!(row.contains("1.5"));
    }

    #[test]
    fn empty_input_yields_empty_output() {
        // Without a record the serde writer never learns the headers.
        assert_eq!(records_to_csv(&[]).unwrap(), "");
    }
}
