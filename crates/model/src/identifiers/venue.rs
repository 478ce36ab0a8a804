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

use std::fmt::{Debug, Display, Formatter};

use nautilus_core::correctness::{check_valid_string, FAILED};
use ustr::Ustr;

use super::macros::{impl_as_ref_for_identifier, impl_from_str_for_identifier, impl_serialization_for_identifier};

/// The reserved venue identifier used for synthetic instruments (not backed by any
/// real trading venue).
pub const SYNTHETIC_VENUE: &str = "SYNTH";

/// Represents a valid trading venue, the second component of an
/// [`super::instrument_id::InstrumentId`].
#[repr(C)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Venue(Ustr);

impl Venue {
    /// Creates a new [`Venue`] instance with correctness checking.
    ///
    /// # Errors
    ///
    /// Returns an error if `value` is not a valid string.
    pub fn new_checked<T: AsRef<str>>(value: T) -> anyhow::Result<Self> {
        let value = value.as_ref();
        check_valid_string(value, "value")?;
        Ok(Self(Ustr::from(value)))
    }

    /// Creates a new [`Venue`] instance.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not a valid string.
    #[must_use]
    pub fn new<T: AsRef<str>>(value: T) -> Self {
        Self::new_checked(value).expect(FAILED)
    }

    /// Returns the reserved synthetic venue.
    #[must_use]
    pub fn synthetic() -> Self {
        Self(Ustr::from(SYNTHETIC_VENUE))
    }

    /// Returns whether this is the reserved synthetic venue.
    #[must_use]
    pub fn is_synthetic(&self) -> bool {
        self.0.as_str() == SYNTHETIC_VENUE
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Debug for Venue {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}({})", stringify!(Venue), self.0)
    }
}

impl Display for Venue {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl_from_str_for_identifier!(Venue);
impl_serialization_for_identifier!(Venue);
impl_as_ref_for_identifier!(Venue);

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn test_venue_new() {
        let venue = Venue::new("SIM");
        assert_eq!(venue.as_str(), "SIM");
        assert!(!venue.is_synthetic());
    }

    #[rstest]
    fn test_venue_synthetic() {
        let venue = Venue::synthetic();
        assert_eq!(venue.as_str(), "SYNTH");
        assert!(venue.is_synthetic());
    }

    #[rstest]
    #[case("SIM", true)]
    #[case("", false)]
    fn test_venue_new_checked(#[case] value: &str, #[case] expected_ok: bool) {
        assert_eq!(Venue::new_checked(value).is_ok(), expected_ok);
    }
}
