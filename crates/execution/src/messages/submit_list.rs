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
use nautilus_model::identifiers::{ClientId, InstrumentId, PositionId, StrategyId, TraderId};
use serde::{Deserialize, Serialize};

use super::submit::SubmitOrder;

/// A command to submit a linked list of orders (e.g. a bracket) to an execution client.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(tag = "type")]
pub struct SubmitOrderList {
    pub trader_id: TraderId,
    pub client_id: ClientId,
    pub strategy_id: StrategyId,
    pub instrument_id: InstrumentId,
    pub orders: Vec<SubmitOrder>,
    pub position_id: Option<PositionId>,
    pub command_id: UUID4,
    pub ts_init: UnixNanos,
}

impl SubmitOrderList {
    /// Creates a new [`SubmitOrderList`] instance.
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub const fn new(
        trader_id: TraderId,
        client_id: ClientId,
        strategy_id: StrategyId,
        instrument_id: InstrumentId,
        orders: Vec<SubmitOrder>,
        position_id: Option<PositionId>,
        command_id: UUID4,
        ts_init: UnixNanos,
    ) -> Self {
        Self {
            trader_id,
            client_id,
            strategy_id,
            instrument_id,
            orders,
            position_id,
            command_id,
            ts_init,
        }
    }
}

impl Display for SubmitOrderList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "SubmitOrderList(instrument_id={}, orders={}, position_id={})",
            self.instrument_id,
            self.orders.len(),
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
    use nautilus_model::{
        enums::{OrderSide, OrderType, TimeInForce},
        identifiers::{ClientOrderId, Symbol, Venue},
        types::Quantity,
    };
    use rstest::rstest;
    use rust_decimal::Decimal;

    use super::*;

    #[rstest]
    fn test_display_reports_order_count() {
        let instrument_id = InstrumentId::new(Symbol::new("AUD/USD"), Venue::new("SIM"));
        let order = SubmitOrder::new(
            TraderId::new("TRADER-001"),
            ClientId::new("SIM"),
            StrategyId::new("S-001"),
            instrument_id,
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
        );

        let list = SubmitOrderList::new(
            TraderId::new("TRADER-001"),
            ClientId::new("SIM"),
            StrategyId::new("S-001"),
            instrument_id,
            vec![order.clone(), order],
            None,
            UUID4::new(),
            UnixNanos::default(),
        );

        assert!(list.to_string().contains("orders=2"));
    }
}
