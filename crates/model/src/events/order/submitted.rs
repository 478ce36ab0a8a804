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

use nautilus_core::{UnixNanos, UUID4};
use serde::{Deserialize, Serialize};

use crate::identifiers::{AccountId, ClientOrderId, InstrumentId, StrategyId, TraderId};

/// An order was submitted by the trading system to an execution client.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSubmitted {
    pub trader_id: TraderId,
    pub strategy_id: StrategyId,
    pub instrument_id: InstrumentId,
    pub client_order_id: ClientOrderId,
    pub account_id: AccountId,
    pub event_id: UUID4,
    pub ts_event: UnixNanos,
    pub ts_init: UnixNanos,
}

impl OrderSubmitted {
    /// Creates a new [`OrderSubmitted`] instance.
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub fn new(
        trader_id: TraderId,
        strategy_id: StrategyId,
        instrument_id: InstrumentId,
        client_order_id: ClientOrderId,
        account_id: AccountId,
        event_id: UUID4,
        ts_event: UnixNanos,
        ts_init: UnixNanos,
    ) -> Self {
        Self {
            trader_id,
            strategy_id,
            instrument_id,
            client_order_id,
            account_id,
            event_id,
            ts_event,
            ts_init,
        }
    }
}

impl Display for OrderSubmitted {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "OrderSubmitted(instrument_id={}, client_order_id={}, account_id={}, ts_event={})",
            self.instrument_id, self.client_order_id, self.account_id, self.ts_event
        )
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::{events::order::stubs::order_submitted, identifiers::stubs::*};

    #[rstest]
    fn test_order_submitted_ts_invariant(order_submitted: OrderSubmitted) {
        assert!(order_submitted.ts_init >= order_submitted.ts_event);
    }

    #[rstest]
    fn test_order_submitted_display(order_submitted: OrderSubmitted) {
        let expected = format!(
            "OrderSubmitted(instrument_id={}, client_order_id={}, account_id={}, ts_event={})",
            order_submitted.instrument_id,
            order_submitted.client_order_id,
            order_submitted.account_id,
            order_submitted.ts_event
        );
        assert_eq!(format!("{order_submitted}"), expected);
    }

    #[rstest]
    fn test_order_submitted_serialization(order_submitted: OrderSubmitted) {
        let json = serde_json::to_string(&order_submitted).unwrap();
        let back: OrderSubmitted = serde_json::from_str(&json).unwrap();
        assert_eq!(back, order_submitted);
    }

    #[rstest]
    fn test_order_submitted_distinct_event_ids(client_order_id: ClientOrderId, trader_id: TraderId, strategy_id: StrategyId, instrument_id: InstrumentId, account_id: AccountId) {
        let e1 = OrderSubmitted::new(trader_id, strategy_id, instrument_id, client_order_id, account_id, UUID4::new(), UnixNanos::default(), UnixNanos::default());
        let e2 = OrderSubmitted::new(trader_id, strategy_id, instrument_id, client_order_id, account_id, UUID4::new(), UnixNanos::default(), UnixNanos::default());
        assert_ne!(e1.event_id, e2.event_id);
    }
}
