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

//! Error types for report serialization.

use thiserror::Error;

/// Result alias for report operations.
pub type ReportResult<T> = Result<T, ReportError>;

/// An error that occurred while serializing a report.
///
/// Kept `Clone` (underlying serializer errors are captured as messages) so
/// report results can be fanned out to multiple sinks.
#[derive(Debug, Clone, Error)]
pub enum ReportError {
    /// CSV serialization failed.
    #[error("CSV serialization error: {message}")]
    Csv {
        /// The underlying error message.
        message: String,
    },

    /// JSON serialization failed.
    #[error("JSON serialization error: {message}")]
    Json {
        /// The underlying error message.
        message: String,
    },
}

impl ReportError {
    pub(crate) fn csv(err: impl std::fmt::Display) -> Self {
        Self::Csv {
            message: err.to_string(),
        }
    }

    pub(crate) fn json(err: impl std::fmt::Display) -> Self {
        Self::Json {
            message: err.to_string(),
        }
    }
}
