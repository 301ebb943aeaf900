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

//! CLI integration tests over temporary log directories.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn perfcmp_cmd() -> Command {
    Command::cargo_bin("perfcmp").expect("Failed to find perfcmp binary")
}

fn write_log(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).expect("Failed to write fixture");
}

/// A directory with one complete optdigits pair and one unpaired adult run.
fn fixture_dir() -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");
    write_log(
        dir.path(),
        "baseline_optdigits_1k_perf.log",
        "500 L1-dcache-load \n50 L1-dcache-load-misses\n4,0 seconds time elapsed\n",
    );
    write_log(
        dir.path(),
        "optimized_optdigits_1k_perf.log",
        "500 L1-dcache-load \n10 L1-dcache-load-misses\n1,0 seconds time elapsed\n",
    );
    write_log(
        dir.path(),
        "baseline_adult_10k_perf.log",
        "2,0 seconds time elapsed\n",
    );
    write_log(dir.path(), "weird_name_no_version.log", "500 L1-dcache-load \n");
    dir
}

// ===== Help and Version Tests =====

#[test]
fn test_help_output() {
    perfcmp_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "baseline vs optimized performance log analysis",
        ))
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn test_version_output() {
    perfcmp_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("perfcmp"));
}

#[test]
fn test_no_subcommand_fails() {
    perfcmp_cmd().assert().failure();
}

// ===== Analyze Command Tests =====

#[test]
fn test_analyze_full_report() {
    let dir = fixture_dir();

    perfcmp_cmd()
        .arg("analyze")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "PERFORMANCE ANALYSIS - BASELINE vs OPTIMIZED",
        ))
        .stdout(predicate::str::contains("DATASET: OPTDIGITS"))
        .stdout(predicate::str::contains("4.00x"))
        // The unpaired adult run must not produce a section.
        .stdout(predicate::str::contains("DATASET: ADULT").not());
}

#[test]
fn test_analyze_summary() {
    let dir = fixture_dir();

    perfcmp_cmd()
        .arg("analyze")
        .arg(dir.path())
        .arg("--summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("SUMMARY (1 pairs)"))
        .stdout(predicate::str::contains("optdigits"));
}

#[test]
fn test_analyze_missing_directory_fails() {
    perfcmp_cmd()
        .arg("analyze")
        .arg("/no/such/results/dir")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("cannot read log directory"));
}

#[test]
fn test_analyze_empty_directory_reports_no_pairs() {
    let dir = TempDir::new().unwrap();

    perfcmp_cmd()
        .arg("analyze")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No complete baseline/optimized pairs found.",
        ));
}

// ===== Records Command Tests =====

#[test]
fn test_records_lists_sorted_records() {
    let dir = fixture_dir();

    perfcmp_cmd()
        .arg("records")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("3 records"))
        .stdout(predicate::str::contains("optdigits"))
        .stdout(predicate::str::contains("adult"))
        // Unrecognized filename is silently excluded.
        .stdout(predicate::str::contains("weird").not());
}

// ===== Export Command Tests =====

#[test]
fn test_export_csv_to_stdout() {
    let dir = fixture_dir();

    perfcmp_cmd()
        .arg("export-csv")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "version,dataset,sample_count",
        ))
        .stdout(predicate::str::contains("baseline,optdigits,1000"));
}

#[test]
fn test_export_csv_to_file() {
    let dir = fixture_dir();
    let out = dir.path().join("records.csv");

    perfcmp_cmd()
        .arg("export-csv")
        .arg(dir.path())
        .arg("-o")
        .arg(&out)
        .assert()
        .success();

    let content = fs::read_to_string(&out).unwrap();
    // Header plus three records (the weird file is excluded).
    assert_eq!(content.lines().count(), 4);
}

#[test]
fn test_export_json_records() {
    let dir = fixture_dir();

    perfcmp_cmd()
        .arg("export-json")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"version\":\"baseline\""))
        .stdout(predicate::str::contains("\"dataset\":\"optdigits\""));
}

#[test]
fn test_export_json_pairs() {
    let dir = fixture_dir();

    perfcmp_cmd()
        .arg("export-json")
        .arg(dir.path())
        .arg("--pairs")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"time_speedup\":4.0"))
        // The unpaired adult key is omitted from pair output.
        .stdout(predicate::str::contains("adult").not());
}

// ===== Filter Flag Tests =====

#[test]
fn test_custom_marker_and_extension() {
    let dir = TempDir::new().unwrap();
    write_log(
        dir.path(),
        "baseline_skin_1k_stat.out",
        "3,0 seconds time elapsed\n",
    );

    perfcmp_cmd()
        .arg("records")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("0 records"));

    perfcmp_cmd()
        .arg("records")
        .arg(dir.path())
        .arg("--marker")
        .arg("stat")
        .arg("--ext")
        .arg("out")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 records"))
        .stdout(predicate::str::contains("skin"));
}

// ===== Completion Command Tests =====

#[test]
fn test_completion_bash() {
    perfcmp_cmd()
        .arg("completion")
        .arg("bash")
        .assert()
        .success()
        .stdout(predicate::str::contains("perfcmp"));
}
