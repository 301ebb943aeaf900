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

//! Presentation layer for extracted metric records.
//!
//! Consumes the sorted record set produced by `perfcmp-core` and renders it
//! three ways:
//!
//! - [`pair_records`] groups records by `(dataset, sample_count)` and pairs
//!   each baseline run with its optimized counterpart, computing speedup and
//!   reduction figures per pair. Keys that have only one of the two versions
//!   are omitted, never an error.
//! - [`console`] prints banner-style comparison reports and record tables.
//! - [`csv`] / [`json`] serialize records and pairs for downstream tooling.

pub mod console;
pub mod csv;
mod error;
pub mod json;
mod pairing;

pub use error::{ReportError, ReportResult};
pub use pairing::{compare, pair_records, Comparison, ComparisonPair};
