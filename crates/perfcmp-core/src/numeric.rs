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

//! Locale-tolerant numeric parsing.

/// Parses a number written in the separator convention used by the logs:
/// `.` groups thousands, `,` marks the decimal point.
///
/// `"1.234.567"` parses to `1234567.0` and `"12,34"` to `12.34`. Plain
/// ASCII integers (`"1797"`) pass through unchanged.
///
/// The thousands dots must be stripped *before* the comma is rewritten to a
/// dot; swapping the two steps corrupts values that carry both separators.
///
/// Returns `None` when the normalized text is not a valid float. Callers in
/// the extraction pipeline treat that as absent data, not as an error.
///
/// # Examples
///
/// ```
/// use perfcmp_core::parse_locale_number;
///
/// assert_eq!(parse_locale_number("1.234.567"), Some(1_234_567.0));
/// assert_eq!(parse_locale_number("12,34"), Some(12.34));
/// assert_eq!(parse_locale_number("bogus"), None);
/// ```
pub fn parse_locale_number(text: &str) -> Option<f64> {
    let normalized = text.replace('.', "").replace(',', ".");
    normalized.parse::<f64>().ok()
}
