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
use ustr::Ustr;

use crate::identifiers::{AccountId, ClientOrderId, InstrumentId, StrategyId, TraderId, VenueOrderId};

/// A modify (amend) request for an order was rejected by the venue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderModifyRejected {
    pub trader_id: TraderId,
    pub strategy_id: StrategyId,
    pub instrument_id: InstrumentId,
    pub client_order_id: ClientOrderId,
    pub venue_order_id: VenueOrderId,
    pub account_id: AccountId,
    pub reason: Ustr,
    pub event_id: UUID4,
    pub ts_event: UnixNanos,
    pub ts_init: UnixNanos,
}

impl OrderModifyRejected {
    /// Creates a new [`OrderModifyRejected`] instance.
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub fn new(
        trader_id: TraderId,
        strategy_id: StrategyId,
        instrument_id: InstrumentId,
        client_order_id: ClientOrderId,
        venue_order_id: VenueOrderId,
        account_id: AccountId,
        reason: Ustr,
        event_id: UUID4,
        ts_event: UnixNanos,
        ts_init: UnixNanos,
    ) -> Self {
        Self {
            trader_id,
            strategy_id,
            instrument_id,
            client_order_id,
            venue_order_id,
            account_id,
            reason,
            event_id,
            ts_event,
            ts_init,
        }
    }
}

impl Display for OrderModifyRejected {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "OrderModifyRejected(client_order_id={}, venue_order_id={}, reason='{}')",
            self.client_order_id, self.venue_order_id, self.reason
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
    use crate::events::order::stubs::order_modify_rejected;

    #[rstest]
    fn test_order_modify_rejected_reason(order_modify_rejected: OrderModifyRejected) {
        assert_eq!(order_modify_rejected.reason.as_str(), "INVALID_PRICE");
    }

    #[rstest]
    fn test_order_modify_rejected_display(order_modify_rejected: OrderModifyRejected) {
        assert!(format!("{order_modify_rejected}").starts_with("OrderModifyRejected("));
    }

    #[rstest]
    fn test_order_modify_rejected_serialization(order_modify_rejected: OrderModifyRejected) {
        let json = serde_json::to_string(&order_modify_rejected).unwrap();
        let back: OrderModifyRejected = serde_json::from_str(&json).unwrap();
        assert_eq!(back, order_modify_rejected);
    }
}
