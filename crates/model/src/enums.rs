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

//! Enumerations for the value types and events that ride the message bus.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, FromRepr};

/// Implements `Serialize`/`Deserialize` for a `strum`-derived enum via its `SCREAMING_SNAKE_CASE`
/// string representation.
macro_rules! impl_serde_for_enum {
    ($ty:ident) => {
        impl Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(self.as_ref())
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s: &str = Deserialize::deserialize(deserializer)?;
                Self::from_str(s).map_err(serde::de::Error::custom)
            }
        }
    };
}

/// The venue's order management system type.
///
/// - `HEDGING`: keeps a separate position per order side (long and short simultaneously).
/// - `NETTING`: collapses all fills for an instrument to a single net position.
#[derive(
    Copy, Clone, Debug, Default, Display, Hash, PartialEq, Eq, PartialOrd, Ord, AsRefStr, FromRepr, EnumIter, EnumString,
)]
#[strum(ascii_case_insensitive)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum OmsType {
    /// No order management system type has been configured for the account (invalid for a
    /// connected execution client, see [`4.4 ExecutionClient`]).
    #[default]
    Unspecified = 0,
    /// The order management system keeps separate positions per order side.
    Hedging = 1,
    /// The order management system nets all fills for an instrument to a single position.
    Netting = 2,
}

impl_serde_for_enum!(OmsType);

/// The side of an order or fill.
#[derive(
    Copy, Clone, Debug, Default, Display, Hash, PartialEq, Eq, PartialOrd, Ord, AsRefStr, FromRepr, EnumIter, EnumString,
)]
#[strum(ascii_case_insensitive)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum OrderSide {
    /// No order side is specified (invalid for live orders).
    #[default]
    NoOrderSide = 0,
    /// The order is a buy.
    Buy = 1,
    /// The order is a sell.
    Sell = 2,
}

impl_serde_for_enum!(OrderSide);

impl OrderSide {
    /// Returns the opposite side.
    #[must_use]
    pub const fn opposite(&self) -> Self {
        match self {
            Self::Buy => Self::Sell,
            Self::Sell => Self::Buy,
            Self::NoOrderSide => Self::NoOrderSide,
        }
    }
}

/// The type of an order.
#[derive(
    Copy, Clone, Debug, Default, Display, Hash, PartialEq, Eq, PartialOrd, Ord, AsRefStr, FromRepr, EnumIter, EnumString,
)]
#[strum(ascii_case_insensitive)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum OrderType {
    #[default]
    Market = 1,
    Limit = 2,
    StopMarket = 3,
    StopLimit = 4,
    MarketToLimit = 5,
    MarketIfTouched = 6,
    LimitIfTouched = 7,
    TrailingStopMarket = 8,
    TrailingStopLimit = 9,
}

impl_serde_for_enum!(OrderType);

/// The order's current lifecycle status as reported by the venue.
#[derive(
    Copy, Clone, Debug, Default, Display, Hash, PartialEq, Eq, PartialOrd, Ord, AsRefStr, FromRepr, EnumIter, EnumString,
)]
#[strum(ascii_case_insensitive)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum OrderStatus {
    #[default]
    Initialized = 1,
    Denied = 2,
    Emulated = 3,
    Released = 4,
    Submitted = 5,
    Accepted = 6,
    Rejected = 7,
    Canceled = 8,
    Expired = 9,
    Triggered = 10,
    PendingUpdate = 11,
    PendingCancel = 12,
    PartiallyFilled = 13,
    Filled = 14,
}

impl_serde_for_enum!(OrderStatus);

/// Whether an execution was the passive (maker) or aggressive (taker) side of a trade.
#[derive(
    Copy, Clone, Debug, Default, Display, Hash, PartialEq, Eq, PartialOrd, Ord, AsRefStr, FromRepr, EnumIter, EnumString,
)]
#[strum(ascii_case_insensitive)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum LiquiditySide {
    /// The liquidity side is not reported or applicable.
    #[default]
    NoLiquiditySide = 0,
    /// The execution added liquidity (passive, resting order hit by another order).
    Maker = 1,
    /// The execution removed liquidity (aggressive, the order crossed the book).
    Taker = 2,
}

impl_serde_for_enum!(LiquiditySide);

/// The type of account (determines margin semantics).
#[derive(
    Copy, Clone, Debug, Default, Display, Hash, PartialEq, Eq, PartialOrd, Ord, AsRefStr, FromRepr, EnumIter, EnumString,
)]
#[strum(ascii_case_insensitive)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum AccountType {
    #[default]
    Cash = 1,
    Margin = 2,
    Betting = 3,
}

impl_serde_for_enum!(AccountType);

/// An order's time in force, governing how long it remains working at a venue.
#[derive(
    Copy, Clone, Debug, Default, Display, Hash, PartialEq, Eq, PartialOrd, Ord, AsRefStr, FromRepr, EnumIter, EnumString,
)]
#[strum(ascii_case_insensitive)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum TimeInForce {
    /// Good Till Cancel (GTC) — remains active until canceled.
    #[default]
    Gtc = 1,
    /// Immediate or Cancel (IOC) — executes immediately, any unfilled remainder is canceled.
    Ioc = 2,
    /// Fill or Kill (FOK) — executes in full immediately or is canceled.
    Fok = 3,
    /// Good Till Date (GTD) — remains active until the given expiration.
    Gtd = 4,
    /// Day — remains active until the close of the current trading session.
    Day = 5,
}

impl_serde_for_enum!(TimeInForce);

/// The side of a net position.
#[derive(
    Copy, Clone, Debug, Default, Display, Hash, PartialEq, Eq, PartialOrd, Ord, AsRefStr, FromRepr, EnumIter, EnumString,
)]
#[strum(ascii_case_insensitive)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum PositionSide {
    #[default]
    NoPositionSide = 0,
    Flat = 1,
    Long = 2,
    Short = 3,
}

impl_serde_for_enum!(PositionSide);

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn test_oms_type_display() {
        assert_eq!(OmsType::Hedging.to_string(), "HEDGING");
        assert_eq!(OmsType::Netting.to_string(), "NETTING");
    }

    #[rstest]
    fn test_order_side_opposite() {
        assert_eq!(OrderSide::Buy.opposite(), OrderSide::Sell);
        assert_eq!(OrderSide::Sell.opposite(), OrderSide::Buy);
    }

    #[rstest]
    fn test_order_side_from_str_case_insensitive() {
        assert_eq!(OrderSide::from_str("buy").unwrap(), OrderSide::Buy);
        assert_eq!(OrderSide::from_str("BUY").unwrap(), OrderSide::Buy);
    }

    #[rstest]
    fn test_liquidity_side_serde_roundtrip() {
        let side = LiquiditySide::Maker;
        let json = serde_json::to_string(&side).unwrap();
        assert_eq!(json, "\"MAKER\"");
        let back: LiquiditySide = serde_json::from_str(&json).unwrap();
        assert_eq!(back, side);
    }

    #[rstest]
    fn test_account_type_serde_roundtrip() {
        for variant in [AccountType::Cash, AccountType::Margin, AccountType::Betting] {
            let json = serde_json::to_string(&variant).unwrap();
            let back: AccountType = serde_json::from_str(&json).unwrap();
            assert_eq!(back, variant);
        }
    }
}
