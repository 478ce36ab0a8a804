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

//! Fixture constructors for order lifecycle events commonly needed across test suites.

use std::str::FromStr;

use nautilus_core::{UnixNanos, UUID4};
use rstest::fixture;
use rust_decimal::Decimal;

use super::{
    accepted::OrderAccepted, cancel_rejected::OrderCancelRejected, canceled::OrderCanceled,
    expired::OrderExpired, filled::OrderFilled, modify_rejected::OrderModifyRejected,
    pending_cancel::OrderPendingCancel, pending_update::OrderPendingUpdate,
    rejected::OrderRejected, submitted::OrderSubmitted, triggered::OrderTriggered,
    updated::OrderUpdated,
};
use crate::{
    enums::{LiquiditySide, OrderSide, OrderType},
    identifiers::{stubs::*, TradeId},
    types::{Currency, Price, Quantity},
};

#[fixture]
pub fn order_submitted(
    trader_id: crate::identifiers::TraderId,
    strategy_id: crate::identifiers::StrategyId,
    instrument_id: crate::identifiers::InstrumentId,
    client_order_id: crate::identifiers::ClientOrderId,
    account_id: crate::identifiers::AccountId,
) -> OrderSubmitted {
    OrderSubmitted::new(
        trader_id,
        strategy_id,
        instrument_id,
        client_order_id,
        account_id,
        UUID4::new(),
        UnixNanos::from(1),
        UnixNanos::from(2),
    )
}

#[fixture]
pub fn order_accepted(
    trader_id: crate::identifiers::TraderId,
    strategy_id: crate::identifiers::StrategyId,
    instrument_id: crate::identifiers::InstrumentId,
    client_order_id: crate::identifiers::ClientOrderId,
    venue_order_id: crate::identifiers::VenueOrderId,
    account_id: crate::identifiers::AccountId,
) -> OrderAccepted {
    OrderAccepted::new(
        trader_id,
        strategy_id,
        instrument_id,
        client_order_id,
        venue_order_id,
        account_id,
        UUID4::new(),
        UnixNanos::from(1),
        UnixNanos::from(2),
        false,
    )
}

#[fixture]
pub fn order_rejected(
    trader_id: crate::identifiers::TraderId,
    strategy_id: crate::identifiers::StrategyId,
    instrument_id: crate::identifiers::InstrumentId,
    client_order_id: crate::identifiers::ClientOrderId,
    account_id: crate::identifiers::AccountId,
) -> OrderRejected {
    OrderRejected::new(
        trader_id,
        strategy_id,
        instrument_id,
        client_order_id,
        account_id,
        "INSUFFICIENT_MARGIN".into(),
        UUID4::new(),
        UnixNanos::from(1),
        UnixNanos::from(2),
        false,
    )
}

#[fixture]
pub fn order_updated(
    trader_id: crate::identifiers::TraderId,
    strategy_id: crate::identifiers::StrategyId,
    instrument_id: crate::identifiers::InstrumentId,
    client_order_id: crate::identifiers::ClientOrderId,
    venue_order_id: crate::identifiers::VenueOrderId,
    account_id: crate::identifiers::AccountId,
) -> OrderUpdated {
    OrderUpdated::new(
        trader_id,
        strategy_id,
        instrument_id,
        client_order_id,
        venue_order_id,
        account_id,
        Quantity::new(Decimal::from_str("10").unwrap()),
        Some(Price::new(Decimal::from_str("1.2345").unwrap())),
        None,
        UUID4::new(),
        UnixNanos::from(1),
        UnixNanos::from(2),
    )
}

#[fixture]
pub fn order_canceled(
    trader_id: crate::identifiers::TraderId,
    strategy_id: crate::identifiers::StrategyId,
    instrument_id: crate::identifiers::InstrumentId,
    client_order_id: crate::identifiers::ClientOrderId,
    venue_order_id: crate::identifiers::VenueOrderId,
    account_id: crate::identifiers::AccountId,
) -> OrderCanceled {
    OrderCanceled::new(
        trader_id,
        strategy_id,
        instrument_id,
        client_order_id,
        venue_order_id,
        account_id,
        UUID4::new(),
        UnixNanos::from(1),
        UnixNanos::from(2),
    )
}

#[fixture]
pub fn order_pending_update(
    trader_id: crate::identifiers::TraderId,
    strategy_id: crate::identifiers::StrategyId,
    instrument_id: crate::identifiers::InstrumentId,
    client_order_id: crate::identifiers::ClientOrderId,
    venue_order_id: crate::identifiers::VenueOrderId,
    account_id: crate::identifiers::AccountId,
) -> OrderPendingUpdate {
    OrderPendingUpdate::new(
        trader_id,
        strategy_id,
        instrument_id,
        client_order_id,
        venue_order_id,
        account_id,
        UUID4::new(),
        UnixNanos::from(1),
        UnixNanos::from(2),
    )
}

#[fixture]
pub fn order_pending_cancel(
    trader_id: crate::identifiers::TraderId,
    strategy_id: crate::identifiers::StrategyId,
    instrument_id: crate::identifiers::InstrumentId,
    client_order_id: crate::identifiers::ClientOrderId,
    venue_order_id: crate::identifiers::VenueOrderId,
    account_id: crate::identifiers::AccountId,
) -> OrderPendingCancel {
    OrderPendingCancel::new(
        trader_id,
        strategy_id,
        instrument_id,
        client_order_id,
        venue_order_id,
        account_id,
        UUID4::new(),
        UnixNanos::from(1),
        UnixNanos::from(2),
    )
}

#[fixture]
pub fn order_modify_rejected(
    trader_id: crate::identifiers::TraderId,
    strategy_id: crate::identifiers::StrategyId,
    instrument_id: crate::identifiers::InstrumentId,
    client_order_id: crate::identifiers::ClientOrderId,
    venue_order_id: crate::identifiers::VenueOrderId,
    account_id: crate::identifiers::AccountId,
) -> OrderModifyRejected {
    OrderModifyRejected::new(
        trader_id,
        strategy_id,
        instrument_id,
        client_order_id,
        venue_order_id,
        account_id,
        "INVALID_PRICE".into(),
        UUID4::new(),
        UnixNanos::from(1),
        UnixNanos::from(2),
    )
}

#[fixture]
pub fn order_cancel_rejected(
    trader_id: crate::identifiers::TraderId,
    strategy_id: crate::identifiers::StrategyId,
    instrument_id: crate::identifiers::InstrumentId,
    client_order_id: crate::identifiers::ClientOrderId,
    venue_order_id: crate::identifiers::VenueOrderId,
    account_id: crate::identifiers::AccountId,
) -> OrderCancelRejected {
    OrderCancelRejected::new(
        trader_id,
        strategy_id,
        instrument_id,
        client_order_id,
        venue_order_id,
        account_id,
        "TOO_LATE_TO_CANCEL".into(),
        UUID4::new(),
        UnixNanos::from(1),
        UnixNanos::from(2),
    )
}

#[fixture]
pub fn order_expired(
    trader_id: crate::identifiers::TraderId,
    strategy_id: crate::identifiers::StrategyId,
    instrument_id: crate::identifiers::InstrumentId,
    client_order_id: crate::identifiers::ClientOrderId,
    venue_order_id: crate::identifiers::VenueOrderId,
    account_id: crate::identifiers::AccountId,
) -> OrderExpired {
    OrderExpired::new(
        trader_id,
        strategy_id,
        instrument_id,
        client_order_id,
        venue_order_id,
        account_id,
        UUID4::new(),
        UnixNanos::from(1),
        UnixNanos::from(2),
    )
}

#[fixture]
pub fn order_triggered(
    trader_id: crate::identifiers::TraderId,
    strategy_id: crate::identifiers::StrategyId,
    instrument_id: crate::identifiers::InstrumentId,
    client_order_id: crate::identifiers::ClientOrderId,
    venue_order_id: crate::identifiers::VenueOrderId,
    account_id: crate::identifiers::AccountId,
) -> OrderTriggered {
    OrderTriggered::new(
        trader_id,
        strategy_id,
        instrument_id,
        client_order_id,
        venue_order_id,
        account_id,
        UUID4::new(),
        UnixNanos::from(1),
        UnixNanos::from(2),
    )
}

#[fixture]
pub fn order_filled(
    trader_id: crate::identifiers::TraderId,
    strategy_id: crate::identifiers::StrategyId,
    instrument_id: crate::identifiers::InstrumentId,
    client_order_id: crate::identifiers::ClientOrderId,
    venue_order_id: crate::identifiers::VenueOrderId,
    account_id: crate::identifiers::AccountId,
    trade_id: TradeId,
) -> OrderFilled {
    let currency = Currency::new("USD", 2);
    OrderFilled::new(
        trader_id,
        strategy_id,
        instrument_id,
        client_order_id,
        venue_order_id,
        account_id,
        trade_id,
        None,
        OrderSide::Buy,
        OrderType::Market,
        Quantity::new(Decimal::from_str("10").unwrap()),
        Price::new(Decimal::from_str("1.2345").unwrap()),
        currency,
        None,
        LiquiditySide::Taker,
        UUID4::new(),
        UnixNanos::from(1),
        UnixNanos::from(2),
    )
}
