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

//! CLI command definitions and argument parsing.

use crate::commands;
use crate::error::CliError;
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use perfcmp_core::ExtractOptions;

/// PerfCmp - baseline vs optimized performance log analysis
///
/// Scans a directory of `perf stat` benchmark logs named
/// `<version>_<dataset>_<samples>[k]_<suffix>.{log,txt}` and tabulates
/// baseline-vs-optimized comparisons per dataset and sample size.
#[derive(Parser)]
#[command(name = "perfcmp")]
#[command(
    author,
    version,
    about = "PerfCmp - baseline vs optimized performance log analysis",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Filename filter shared by every directory-scanning subcommand.
#[derive(Args, Debug)]
pub struct FilterArgs {
    /// Substring a filename must contain to be scanned
    #[arg(long, default_value = "perf")]
    pub marker: String,

    /// Accepted file extension (repeatable)
    #[arg(long = "ext", value_name = "EXT", default_values_t = [String::from("log"), String::from("txt")])]
    pub extensions: Vec<String>,
}

impl FilterArgs {
    /// Converts the CLI arguments to core extraction options.
    pub fn to_options(&self) -> ExtractOptions {
        ExtractOptions {
            marker: self.marker.clone(),
            extensions: self.extensions.clone(),
        }
    }
}

/// Top-level CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Print the baseline-vs-optimized comparison report
    ///
    /// Extracts every recognized log, pairs baseline and optimized runs per
    /// dataset and sample size, and prints the comparison. Keys with only
    /// one of the two versions are omitted.
    Analyze {
        /// Directory containing the log files
        #[arg(value_name = "DIR")]
        dir: String,

        /// Print one line per pair instead of the full report
        #[arg(short, long)]
        summary: bool,

        #[command(flatten)]
        filter: FilterArgs,
    },

    /// List every extracted record in sorted order
    ///
    /// One line per log file, sorted by dataset, sample count and version.
    Records {
        /// Directory containing the log files
        #[arg(value_name = "DIR")]
        dir: String,

        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Export the sorted record set as CSV
    ExportCsv {
        /// Directory containing the log files
        #[arg(value_name = "DIR")]
        dir: String,

        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,

        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Export records or paired comparisons as JSON
    ExportJson {
        /// Directory containing the log files
        #[arg(value_name = "DIR")]
        dir: String,

        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,

        /// Export baseline/optimized pairs instead of raw records
        #[arg(long)]
        pairs: bool,

        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Generate shell completion scripts
    Completion {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl Commands {
    /// Execute the command, dispatching to the matching implementation.
    ///
    /// # Errors
    ///
    /// Returns `Err` when the log directory cannot be read, serialization
    /// fails, or an output file cannot be written.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            Commands::Analyze {
                dir,
                summary,
                filter,
            } => commands::analyze(&dir, summary, &filter.to_options()),
            Commands::Records { dir, filter } => commands::records(&dir, &filter.to_options()),
            Commands::ExportCsv {
                dir,
                output,
                filter,
            } => commands::export_csv(&dir, output.as_deref(), &filter.to_options()),
            Commands::ExportJson {
                dir,
                output,
                pretty,
                pairs,
                filter,
            } => commands::export_json(&dir, output.as_deref(), pretty, pairs, &filter.to_options()),
            Commands::Completion { shell } => commands::completion(shell),
        }
    }
}
