// -------------------------------------------------------------------------------------------------
//  Copyright (C) 2015-2025 Nautech Systems Pty Ltd. All rights reserved.
//  https://nautechsystems.io
//
//  Licensed under the GNU Lesser General Public License Version 3.0 (the "License");
//  You may not use this file except in compliance with the License.
//  You may obtain a copy of the License at https://www.gnu.org/licenses/lgpl-3.0.en.html
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.
// -------------------------------------------------------------------------------------------------

//! Nanosecond/millisecond/microsecond conversion constants, plus the ISO-8601 edge
//! helpers the core's timestamps round-trip through (§6: "round-trip with ISO-8601
//! UTC strings... at the edges only, not inside the core").

use chrono::{DateTime, SecondsFormat, Utc};

use crate::UnixNanos;

/// Number of nanoseconds in one second.
pub const NANOSECONDS_IN_SECOND: u64 = 1_000_000_000;

/// Number of nanoseconds in one millisecond.
pub const NANOSECONDS_IN_MILLISECOND: u64 = 1_000_000;

/// Number of nanoseconds in one microsecond.
pub const NANOSECONDS_IN_MICROSECOND: u64 = 1_000;

/// Formats `unix_nanos` as an RFC 3339 / ISO-8601 UTC string with nanosecond precision.
#[must_use]
pub fn unix_nanos_to_iso8601(unix_nanos: UnixNanos) -> String {
    unix_nanos.to_datetime_utc().to_rfc3339_opts(SecondsFormat::Nanos, true)
}

/// Parses an RFC 3339 / ISO-8601 UTC string into [`UnixNanos`].
///
/// # Errors
///
/// Returns an error if `value` is not a valid RFC 3339 timestamp.
pub fn iso8601_to_unix_nanos(value: &str) -> anyhow::Result<UnixNanos> {
    let parsed: DateTime<Utc> = value.parse()?;
    Ok(UnixNanos::from(parsed))
}
