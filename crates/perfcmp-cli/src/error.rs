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

//! Structured error types for the PerfCmp CLI.
//!
//! All CLI operations return `Result<T, CliError>` for consistent error
//! reporting; `main` renders the error on stderr and exits nonzero.

use perfcmp_core::ExtractError;
use perfcmp_report::ReportError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for PerfCmp CLI operations.
#[derive(Debug, Clone, Error)]
pub enum CliError {
    /// Extraction failed (in practice: the log directory is unusable).
    #[error(transparent)]
    Extract(#[from] ExtractError),

    /// Report serialization failed.
    #[error(transparent)]
    Report(#[from] ReportError),

    /// Writing an output file failed.
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The file path that caused the error.
        path: PathBuf,
        /// The underlying error message.
        message: String,
    },
}

impl CliError {
    /// Builds a [`CliError::Io`] from a path and an I/O error.
    pub fn io_error(path: impl Into<PathBuf>, err: &io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: err.to_string(),
        }
    }
}
