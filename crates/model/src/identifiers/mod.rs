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

//! Identifier value types: immutable, hashable, `Ustr`-backed newtypes validated on
//! construction.

pub mod account_id;
pub mod client_id;
pub mod client_order_id;
pub mod component_id;
pub mod instrument_id;
pub(crate) mod macros;
pub mod position_id;
pub mod stubs;
pub mod strategy_id;
pub mod symbol;
pub mod trade_id;
pub mod trader_id;
pub mod venue;
pub mod venue_order_id;

pub use account_id::AccountId;
pub use client_id::ClientId;
pub use client_order_id::ClientOrderId;
pub use component_id::ComponentId;
pub use instrument_id::InstrumentId;
pub use position_id::PositionId;
pub use strategy_id::{StrategyId, EXTERNAL_STRATEGY_ID};
pub use symbol::Symbol;
pub use trade_id::TradeId;
pub use trader_id::TraderId;
pub use venue::{Venue, SYNTHETIC_VENUE};
pub use venue_order_id::VenueOrderId;
