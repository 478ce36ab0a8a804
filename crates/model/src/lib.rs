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

//! Value types riding the runtime substrate's message bus: identifier newtypes, order
//! lifecycle events, account state, and the minimal price/quantity/currency types they
//! carry.

pub mod enums;
pub mod events;
pub mod identifiers;
pub mod types;

pub use enums::{
    AccountType, LiquiditySide, OmsType, OrderSide, OrderStatus, OrderType, PositionSide,
    TimeInForce,
};
pub use events::{
    account::AccountState,
    order::{
        OrderAccepted, OrderCancelRejected, OrderCanceled, OrderEventAny, OrderExpired,
        OrderFilled, OrderModifyRejected, OrderPendingCancel, OrderPendingUpdate, OrderRejected,
        OrderSubmitted, OrderTriggered, OrderUpdated,
    },
};
pub use identifiers::{
    AccountId, ClientId, ClientOrderId, ComponentId, InstrumentId, PositionId, StrategyId,
    Symbol, TradeId, TraderId, Venue, VenueOrderId,
};
pub use types::{AccountBalance, Currency, MarginBalance, Money, Price, Quantity};
