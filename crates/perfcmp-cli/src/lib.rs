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

//! PerfCmp CLI library for command-line parsing and execution.
//!
//! The `perfcmp` binary scans a directory of `perf stat` benchmark logs and
//! tabulates baseline-vs-optimized comparisons.
//!
//! # Commands
//!
//! - **analyze**: print the full comparison report (or `--summary`)
//! - **records**: list every extracted record in sorted order
//! - **export-csv**: write the sorted record set as CSV
//! - **export-json**: write records or paired comparisons as JSON
//! - **completion**: generate shell completion scripts

pub mod cli;
pub mod commands;
pub mod error;
