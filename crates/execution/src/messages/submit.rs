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

use std::fmt::Display;

use nautilus_core::{UUID4, UnixNanos};
use nautilus_model::{
    enums::{OrderSide, OrderType, TimeInForce},
    identifiers::{ClientId, ClientOrderId, InstrumentId, PositionId, StrategyId, TraderId},
    types::{Price, Quantity},
};
use serde::{Deserialize, Serialize};

/// A command to submit a single order to an execution client.
///
/// This carries only the parameters needed to place the order at a venue; the
/// adapter-specific client that receives it owns the matching-engine or exchange
/// connection, not this message shape.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(tag = "type")]
pub struct SubmitOrder {
    pub trader_id: TraderId,
    pub client_id: ClientId,
    pub strategy_id: StrategyId,
    pub instrument_id: InstrumentId,
    pub client_order_id: ClientOrderId,
    pub order_side: OrderSide,
    pub order_type: OrderType,
    pub quantity: Quantity,
    pub price: Option<Price>,
    pub trigger_price: Option<Price>,
    pub time_in_force: TimeInForce,
    pub position_id: Option<PositionId>,
    pub command_id: UUID4,
    pub ts_init: UnixNanos,
}

impl SubmitOrder {
    /// Creates a new [`SubmitOrder`] instance.
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub const fn new(
        trader_id: TraderId,
        client_id: ClientId,
        strategy_id: StrategyId,
        instrument_id: InstrumentId,
        client_order_id: ClientOrderId,
        order_side: OrderSide,
        order_type: OrderType,
        quantity: Quantity,
        price: Option<Price>,
        trigger_price: Option<Price>,
        time_in_force: TimeInForce,
        position_id: Option<PositionId>,
        command_id: UUID4,
        ts_init: UnixNanos,
    ) -> Self {
        Self {
            trader_id,
            client_id,
            strategy_id,
            instrument_id,
            client_order_id,
            order_side,
            order_type,
            quantity,
            price,
            trigger_price,
            time_in_force,
            position_id,
            command_id,
            ts_init,
        }
    }
}

impl Display for SubmitOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "SubmitOrder(instrument_id={}, client_order_id={}, side={}, type={}, quantity={}, position_id={})",
            self.instrument_id,
            self.client_order_id,
            self.order_side,
            self.order_type,
            self.quantity,
            self.position_id
                .map_or("None".to_string(), |position_id| format!("{position_id}")),
        )
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use nautilus_model::identifiers::{InstrumentId, Symbol, Venue};
    use rstest::rstest;
    use rust_decimal::Decimal;

    use super::*;

    fn command() -> SubmitOrder {
        SubmitOrder::new(
            TraderId::new("TRADER-001"),
            ClientId::new("SIM"),
            StrategyId::new("S-001"),
            InstrumentId::new(Symbol::new("AUD/USD"), Venue::new("SIM")),
            ClientOrderId::new("O-1"),
            OrderSide::Buy,
            OrderType::Market,
            Quantity::new(Decimal::from(100)),
            None,
            None,
            TimeInForce::Gtc,
            None,
            UUID4::new(),
            UnixNanos::default(),
        )
    }

    #[rstest]
    fn test_display() {
        let s = command().to_string();
        assert!(s.contains("SubmitOrder("));
        assert!(s.contains("O-1"));
    }

    #[rstest]
    fn test_serde_roundtrip() {
        let cmd = command();
        let json = serde_json::to_string(&cmd).unwrap();
        let back: SubmitOrder = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cmd);
    }
}
