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

//! Error types for log extraction.
//!
//! The extraction pipeline is deliberately tolerant: per-file problems
//! (unrecognized names, malformed counter text) are absorbed, not raised.
//! Only a structurally unusable input directory surfaces as an error.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result alias for extraction operations.
pub type ExtractResult<T> = Result<T, ExtractError>;

/// An error that occurred while extracting metrics from a log directory.
///
/// Implements `Clone` (the underlying I/O error is captured as a message)
/// so results can be shared across reporting paths.
#[derive(Debug, Clone, Error)]
pub enum ExtractError {
    /// The input directory is absent or unreadable.
    ///
    /// This is the only fatal condition in the pipeline; everything
    /// downstream degrades to skipped files or zero-valued counters.
    #[error("cannot read log directory '{path}': {message}")]
    DirectoryAccess {
        /// The directory that could not be scanned.
        path: PathBuf,
        /// The underlying I/O error message.
        message: String,
    },
}

impl ExtractError {
    /// Builds a [`ExtractError::DirectoryAccess`] from an I/O error.
    pub fn directory_access(path: &Path, err: &io::Error) -> Self {
        Self::DirectoryAccess {
            path: path.to_path_buf(),
            message: err.to_string(),
        }
    }
}
