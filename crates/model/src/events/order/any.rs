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

use nautilus_core::{UnixNanos, UUID4};
use serde::{Deserialize, Serialize};
use ustr::Ustr;

use crate::{
    events::order::{
        accepted::OrderAccepted, cancel_rejected::OrderCancelRejected, canceled::OrderCanceled,
        expired::OrderExpired, filled::OrderFilled, modify_rejected::OrderModifyRejected,
        pending_cancel::OrderPendingCancel, pending_update::OrderPendingUpdate,
        rejected::OrderRejected, submitted::OrderSubmitted, triggered::OrderTriggered,
        updated::OrderUpdated,
    },
    identifiers::{AccountId, ClientOrderId, InstrumentId, StrategyId, TraderId, VenueOrderId},
};

/// Wraps any order lifecycle event variant, allowing them to travel through the bus uniformly.
///
/// Every variant except `Submitted` and `Rejected` carries a non-null `venue_order_id`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderEventAny {
    Submitted(OrderSubmitted),
    Accepted(OrderAccepted),
    Rejected(OrderRejected),
    PendingUpdate(OrderPendingUpdate),
    PendingCancel(OrderPendingCancel),
    ModifyRejected(OrderModifyRejected),
    CancelRejected(OrderCancelRejected),
    Updated(OrderUpdated),
    Canceled(OrderCanceled),
    Triggered(OrderTriggered),
    Expired(OrderExpired),
    Filled(OrderFilled),
}

impl OrderEventAny {
    #[must_use]
    pub fn trader_id(&self) -> TraderId {
        match self {
            Self::Submitted(e) => e.trader_id,
            Self::Accepted(e) => e.trader_id,
            Self::Rejected(e) => e.trader_id,
            Self::PendingUpdate(e) => e.trader_id,
            Self::PendingCancel(e) => e.trader_id,
            Self::ModifyRejected(e) => e.trader_id,
            Self::CancelRejected(e) => e.trader_id,
            Self::Updated(e) => e.trader_id,
            Self::Canceled(e) => e.trader_id,
            Self::Triggered(e) => e.trader_id,
            Self::Expired(e) => e.trader_id,
            Self::Filled(e) => e.trader_id,
        }
    }

    #[must_use]
    pub fn strategy_id(&self) -> StrategyId {
        match self {
            Self::Submitted(e) => e.strategy_id,
            Self::Accepted(e) => e.strategy_id,
            Self::Rejected(e) => e.strategy_id,
            Self::PendingUpdate(e) => e.strategy_id,
            Self::PendingCancel(e) => e.strategy_id,
            Self::ModifyRejected(e) => e.strategy_id,
            Self::CancelRejected(e) => e.strategy_id,
            Self::Updated(e) => e.strategy_id,
            Self::Canceled(e) => e.strategy_id,
            Self::Triggered(e) => e.strategy_id,
            Self::Expired(e) => e.strategy_id,
            Self::Filled(e) => e.strategy_id,
        }
    }

    #[must_use]
    pub fn instrument_id(&self) -> InstrumentId {
        match self {
            Self::Submitted(e) => e.instrument_id,
            Self::Accepted(e) => e.instrument_id,
            Self::Rejected(e) => e.instrument_id,
            Self::PendingUpdate(e) => e.instrument_id,
            Self::PendingCancel(e) => e.instrument_id,
            Self::ModifyRejected(e) => e.instrument_id,
            Self::CancelRejected(e) => e.instrument_id,
            Self::Updated(e) => e.instrument_id,
            Self::Canceled(e) => e.instrument_id,
            Self::Triggered(e) => e.instrument_id,
            Self::Expired(e) => e.instrument_id,
            Self::Filled(e) => e.instrument_id,
        }
    }

    #[must_use]
    pub fn client_order_id(&self) -> ClientOrderId {
        match self {
            Self::Submitted(e) => e.client_order_id,
            Self::Accepted(e) => e.client_order_id,
            Self::Rejected(e) => e.client_order_id,
            Self::PendingUpdate(e) => e.client_order_id,
            Self::PendingCancel(e) => e.client_order_id,
            Self::ModifyRejected(e) => e.client_order_id,
            Self::CancelRejected(e) => e.client_order_id,
            Self::Updated(e) => e.client_order_id,
            Self::Canceled(e) => e.client_order_id,
            Self::Triggered(e) => e.client_order_id,
            Self::Expired(e) => e.client_order_id,
            Self::Filled(e) => e.client_order_id,
        }
    }

    /// Returns the venue order id carried by the event, if any.
    ///
    /// `Submitted` and `Rejected` never carry one; every other variant does.
    #[must_use]
    pub fn venue_order_id(&self) -> Option<VenueOrderId> {
        match self {
            Self::Submitted(_) | Self::Rejected(_) => None,
            Self::Accepted(e) => Some(e.venue_order_id),
            Self::PendingUpdate(e) => Some(e.venue_order_id),
            Self::PendingCancel(e) => Some(e.venue_order_id),
            Self::ModifyRejected(e) => Some(e.venue_order_id),
            Self::CancelRejected(e) => Some(e.venue_order_id),
            Self::Updated(e) => Some(e.venue_order_id),
            Self::Canceled(e) => Some(e.venue_order_id),
            Self::Triggered(e) => Some(e.venue_order_id),
            Self::Expired(e) => Some(e.venue_order_id),
            Self::Filled(e) => Some(e.venue_order_id),
        }
    }

    #[must_use]
    pub fn account_id(&self) -> AccountId {
        match self {
            Self::Submitted(e) => e.account_id,
            Self::Accepted(e) => e.account_id,
            Self::Rejected(e) => e.account_id,
            Self::PendingUpdate(e) => e.account_id,
            Self::PendingCancel(e) => e.account_id,
            Self::ModifyRejected(e) => e.account_id,
            Self::CancelRejected(e) => e.account_id,
            Self::Updated(e) => e.account_id,
            Self::Canceled(e) => e.account_id,
            Self::Triggered(e) => e.account_id,
            Self::Expired(e) => e.account_id,
            Self::Filled(e) => e.account_id,
        }
    }

    #[must_use]
    pub fn event_id(&self) -> UUID4 {
        match self {
            Self::Submitted(e) => e.event_id,
            Self::Accepted(e) => e.event_id,
            Self::Rejected(e) => e.event_id,
            Self::PendingUpdate(e) => e.event_id,
            Self::PendingCancel(e) => e.event_id,
            Self::ModifyRejected(e) => e.event_id,
            Self::CancelRejected(e) => e.event_id,
            Self::Updated(e) => e.event_id,
            Self::Canceled(e) => e.event_id,
            Self::Triggered(e) => e.event_id,
            Self::Expired(e) => e.event_id,
            Self::Filled(e) => e.event_id,
        }
    }

    #[must_use]
    pub fn ts_event(&self) -> UnixNanos {
        match self {
            Self::Submitted(e) => e.ts_event,
            Self::Accepted(e) => e.ts_event,
            Self::Rejected(e) => e.ts_event,
            Self::PendingUpdate(e) => e.ts_event,
            Self::PendingCancel(e) => e.ts_event,
            Self::ModifyRejected(e) => e.ts_event,
            Self::CancelRejected(e) => e.ts_event,
            Self::Updated(e) => e.ts_event,
            Self::Canceled(e) => e.ts_event,
            Self::Triggered(e) => e.ts_event,
            Self::Expired(e) => e.ts_event,
            Self::Filled(e) => e.ts_event,
        }
    }

    #[must_use]
    pub fn ts_init(&self) -> UnixNanos {
        match self {
            Self::Submitted(e) => e.ts_init,
            Self::Accepted(e) => e.ts_init,
            Self::Rejected(e) => e.ts_init,
            Self::PendingUpdate(e) => e.ts_init,
            Self::PendingCancel(e) => e.ts_init,
            Self::ModifyRejected(e) => e.ts_init,
            Self::CancelRejected(e) => e.ts_init,
            Self::Updated(e) => e.ts_init,
            Self::Canceled(e) => e.ts_init,
            Self::Triggered(e) => e.ts_init,
            Self::Expired(e) => e.ts_init,
            Self::Filled(e) => e.ts_init,
        }
    }

    /// Returns the rejection/failure reason carried by the variants that have one.
    #[must_use]
    pub fn reason(&self) -> Option<Ustr> {
        match self {
            Self::Rejected(e) => Some(e.reason),
            Self::ModifyRejected(e) => Some(e.reason),
            Self::CancelRejected(e) => Some(e.reason),
            _ => None,
        }
    }
}

impl From<OrderEventAny> for OrderFilled {
    fn from(event: OrderEventAny) -> Self {
        match event {
            OrderEventAny::Filled(event) => event,
            _ => panic!("Invalid `OrderEventAny` not `OrderFilled`, was {event:?}"),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::events::order::stubs::{order_accepted, order_rejected, order_submitted};

    #[rstest]
    fn test_submitted_has_no_venue_order_id(order_submitted: OrderSubmitted) {
        let event = OrderEventAny::Submitted(order_submitted);
        assert_eq!(event.venue_order_id(), None);
    }

    #[rstest]
    fn test_rejected_has_no_venue_order_id_but_has_reason(order_rejected: OrderRejected) {
        let event = OrderEventAny::Rejected(order_rejected);
        assert_eq!(event.venue_order_id(), None);
        assert!(event.reason().is_some());
    }

    #[rstest]
    fn test_accepted_has_venue_order_id(order_accepted: OrderAccepted) {
        let event = OrderEventAny::Accepted(order_accepted);
        assert!(event.venue_order_id().is_some());
        assert_eq!(event.reason(), None);
    }

    #[rstest]
    #[should_panic]
    fn test_from_order_event_any_wrong_variant_panics(order_submitted: OrderSubmitted) {
        let event = OrderEventAny::Submitted(order_submitted);
        let _: OrderFilled = event.into();
    }
}
