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
    enums::{OrderSide, OrderStatus, OrderType, TimeInForce},
    identifiers::{AccountId, ClientOrderId, InstrumentId, PositionId, VenueOrderId},
    types::{Price, Quantity},
};
use serde::{Deserialize, Serialize};

/// Represents an order status at a point in time, as reconciled against a venue.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub struct OrderStatusReport {
    /// The account ID associated with the order.
    pub account_id: AccountId,
    /// The instrument ID associated with the order.
    pub instrument_id: InstrumentId,
    /// The client order ID, if known locally.
    pub client_order_id: Option<ClientOrderId>,
    /// The venue assigned order ID.
    pub venue_order_id: VenueOrderId,
    /// The order side.
    pub order_side: OrderSide,
    /// The order type.
    pub order_type: OrderType,
    /// The order time in force.
    pub time_in_force: TimeInForce,
    /// The order status as reported by the venue.
    pub order_status: OrderStatus,
    /// The order quantity.
    pub quantity: Quantity,
    /// The order total filled quantity.
    pub filled_qty: Quantity,
    /// The unique identifier for the report.
    pub report_id: UUID4,
    /// UNIX timestamp (nanoseconds) when the order was accepted.
    pub ts_accepted: UnixNanos,
    /// UNIX timestamp (nanoseconds) when the last event occurred.
    pub ts_last: UnixNanos,
    /// UNIX timestamp (nanoseconds) when the report was initialized.
    pub ts_init: UnixNanos,
    /// The position ID associated with the order (assigned by the venue).
    pub venue_position_id: Option<PositionId>,
    /// The order price (for `LIMIT`-style orders).
    pub price: Option<Price>,
    /// The order trigger price (for `STOP`-style orders).
    pub trigger_price: Option<Price>,
    /// The order average fill price.
    pub avg_px: Option<f64>,
    /// If the order will only provide liquidity (make a market).
    pub post_only: bool,
    /// If the order carries the reduce-only execution instruction.
    pub reduce_only: bool,
    /// The reason for order cancellation, if applicable.
    pub cancel_reason: Option<String>,
}

impl OrderStatusReport {
    /// Creates a new [`OrderStatusReport`] instance with required fields.
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub fn new(
        account_id: AccountId,
        instrument_id: InstrumentId,
        client_order_id: Option<ClientOrderId>,
        venue_order_id: VenueOrderId,
        order_side: OrderSide,
        order_type: OrderType,
        time_in_force: TimeInForce,
        order_status: OrderStatus,
        quantity: Quantity,
        filled_qty: Quantity,
        ts_accepted: UnixNanos,
        ts_last: UnixNanos,
        ts_init: UnixNanos,
        report_id: Option<UUID4>,
    ) -> Self {
        Self {
            account_id,
            instrument_id,
            client_order_id,
            venue_order_id,
            order_side,
            order_type,
            time_in_force,
            order_status,
            quantity,
            filled_qty,
            report_id: report_id.unwrap_or_default(),
            ts_accepted,
            ts_last,
            ts_init,
            venue_position_id: None,
            price: None,
            trigger_price: None,
            avg_px: None,
            post_only: false,
            reduce_only: false,
            cancel_reason: None,
        }
    }

    /// Sets the venue position ID.
    #[must_use]
    pub const fn with_venue_position_id(mut self, venue_position_id: PositionId) -> Self {
        self.venue_position_id = Some(venue_position_id);
        self
    }

    /// Sets the price.
    #[must_use]
    pub const fn with_price(mut self, price: Price) -> Self {
        self.price = Some(price);
        self
    }

    /// Sets the trigger price.
    #[must_use]
    pub const fn with_trigger_price(mut self, trigger_price: Price) -> Self {
        self.trigger_price = Some(trigger_price);
        self
    }

    /// Sets the average fill price.
    #[must_use]
    pub const fn with_avg_px(mut self, avg_px: f64) -> Self {
        self.avg_px = Some(avg_px);
        self
    }

    /// Sets the `post_only` flag.
    #[must_use]
    pub const fn with_post_only(mut self, post_only: bool) -> Self {
        self.post_only = post_only;
        self
    }

    /// Sets the `reduce_only` flag.
    #[must_use]
    pub const fn with_reduce_only(mut self, reduce_only: bool) -> Self {
        self.reduce_only = reduce_only;
        self
    }

    /// Sets the cancel reason.
    #[must_use]
    pub fn with_cancel_reason(mut self, cancel_reason: String) -> Self {
        self.cancel_reason = Some(cancel_reason);
        self
    }
}

impl Display for OrderStatusReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "OrderStatusReport(\
                account_id={}, \
                instrument_id={}, \
                client_order_id={:?}, \
                venue_order_id={}, \
                order_side={}, \
                order_type={}, \
                time_in_force={}, \
                order_status={}, \
                quantity={}, \
                filled_qty={}, \
                report_id={}, \
                ts_accepted={}, \
                ts_last={}, \
                ts_init={}, \
                venue_position_id={:?}, \
                price={:?}, \
                trigger_price={:?}, \
                avg_px={:?}, \
                post_only={}, \
                reduce_only={}, \
                cancel_reason={:?}\
            )",
            self.account_id,
            self.instrument_id,
            self.client_order_id,
            self.venue_order_id,
            self.order_side,
            self.order_type,
            self.time_in_force,
            self.order_status,
            self.quantity,
            self.filled_qty,
            self.report_id,
            self.ts_accepted,
            self.ts_last,
            self.ts_init,
            self.venue_position_id,
            self.price,
            self.trigger_price,
            self.avg_px,
            self.post_only,
            self.reduce_only,
            self.cancel_reason,
        )
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use nautilus_model::identifiers::{AccountId, ClientOrderId, InstrumentId, Symbol, Venue, VenueOrderId};
    use rstest::rstest;
    use rust_decimal::Decimal;

    use super::*;

    fn report() -> OrderStatusReport {
        OrderStatusReport::new(
            AccountId::new("SIM-001"),
            InstrumentId::new(Symbol::new("AUD/USD"), Venue::new("SIM")),
            Some(ClientOrderId::new("O-1")),
            VenueOrderId::new("V-1"),
            OrderSide::Buy,
            OrderType::Limit,
            TimeInForce::Gtc,
            OrderStatus::Accepted,
            Quantity::new(Decimal::from(100)),
            Quantity::new(Decimal::ZERO),
            UnixNanos::from(1),
            UnixNanos::from(2),
            UnixNanos::from(3),
            None,
        )
    }

    #[rstest]
    fn test_with_builders_chain() {
        let report = report()
            .with_price(Price::new(Decimal::from(1)))
            .with_post_only(true)
            .with_reduce_only(true);

        assert_eq!(report.price, Some(Price::new(Decimal::from(1))));
        assert!(report.post_only);
        assert!(report.reduce_only);
    }

    #[rstest]
    fn test_display_contains_key_fields() {
        let s = report().to_string();
        assert!(s.contains("OrderStatusReport("));
        assert!(s.contains("SIM-001"));
    }

    #[rstest]
    fn test_serde_roundtrip() {
        let report = report();
        let json = serde_json::to_string(&report).unwrap();
        let back: OrderStatusReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
    }
}
