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

use std::{
    fmt::{Debug, Display, Formatter},
    str::FromStr,
};

use nautilus_core::correctness::check_valid_string;
use serde::{Deserialize, Serialize};

use super::{symbol::Symbol, venue::Venue};

/// Represents a valid instrument ID.
///
/// Of the form `<symbol>.<venue>`, e.g. `AUD/USD.SIM`. Parsing splits on the *last* `.`
/// so that symbols containing dots (rare, but seen in some venue conventions) still parse.
#[repr(C)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct InstrumentId {
    /// The instrument's ticker symbol.
    pub symbol: Symbol,
    /// The instrument's trading venue.
    pub venue: Venue,
}

impl InstrumentId {
    /// Creates a new [`InstrumentId`] instance.
    #[must_use]
    pub const fn new(symbol: Symbol, venue: Venue) -> Self {
        Self { symbol, venue }
    }

    /// Returns whether the instrument trades on the reserved synthetic venue.
    #[must_use]
    pub fn is_synthetic(&self) -> bool {
        self.venue.is_synthetic()
    }
}

impl Debug for InstrumentId {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}({}.{})", stringify!(InstrumentId), self.symbol, self.venue)
    }
}

impl Display for InstrumentId {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}.{}", self.symbol, self.venue)
    }
}

impl FromStr for InstrumentId {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        check_valid_string(s, "value")?;
        match s.rsplit_once('.') {
            Some((symbol_part, venue_part)) => {
                check_valid_string(symbol_part, "symbol")?;
                check_valid_string(venue_part, "venue")?;
                Ok(Self::new(Symbol::new(symbol_part), Venue::new(venue_part)))
            }
            None => anyhow::bail!("invalid instrument ID string '{s}', missing '.' separator"),
        }
    }
}

impl TryFrom<&str> for InstrumentId {
    type Error = anyhow::Error;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::from_str(s)
    }
}

impl Serialize for InstrumentId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for InstrumentId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s: &str = Deserialize::deserialize(deserializer)?;
        Self::from_str(s).map_err(serde::de::Error::custom)
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn test_instrument_id_from_str() {
        let id = InstrumentId::from_str("AUD/USD.SIM").unwrap();
        assert_eq!(id.symbol.as_str(), "AUD/USD");
        assert_eq!(id.venue.as_str(), "SIM");
    }

    #[rstest]
    fn test_instrument_id_display() {
        let id = InstrumentId::new(Symbol::new("ETHUSDT"), Venue::new("BINANCE"));
        assert_eq!(format!("{id}"), "ETHUSDT.BINANCE");
    }

    #[rstest]
    #[case("AUD/USD.SIM", true)]
    #[case("NODOT", false)]
    #[case("", false)]
    fn test_instrument_id_from_str_checked(#[case] value: &str, #[case] expected_ok: bool) {
        assert_eq!(InstrumentId::from_str(value).is_ok(), expected_ok);
    }

    #[rstest]
    fn test_instrument_id_serialization() {
        let id = InstrumentId::new(Symbol::new("AUD/USD"), Venue::new("SIM"));
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"AUD/USD.SIM\"");
        let back: InstrumentId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
