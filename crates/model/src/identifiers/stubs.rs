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

//! Fixture constructors for identifiers commonly needed across test suites.

use rstest::fixture;

use super::{
    account_id::AccountId, client_id::ClientId, client_order_id::ClientOrderId,
    component_id::ComponentId, instrument_id::InstrumentId, position_id::PositionId,
    strategy_id::StrategyId, symbol::Symbol, trade_id::TradeId, trader_id::TraderId,
    venue::Venue, venue_order_id::VenueOrderId,
};

#[fixture]
pub fn trader_id() -> TraderId {
    TraderId::new("TRADER-001")
}

#[fixture]
pub fn client_id() -> ClientId {
    ClientId::new("SIM")
}

#[fixture]
pub fn account_id() -> AccountId {
    AccountId::new("SIM-001")
}

#[fixture]
pub fn strategy_id() -> StrategyId {
    StrategyId::new("S-001")
}

#[fixture]
pub fn component_id() -> ComponentId {
    ComponentId::new("Component-001")
}

#[fixture]
pub fn instrument_id() -> InstrumentId {
    InstrumentId::new(Symbol::new("AUD/USD"), Venue::new("SIM"))
}

#[fixture]
pub fn client_order_id() -> ClientOrderId {
    ClientOrderId::new("O-19700101-000000-001-001-1")
}

#[fixture]
pub fn venue_order_id() -> VenueOrderId {
    VenueOrderId::new("001")
}

#[fixture]
pub fn position_id() -> PositionId {
    PositionId::new("P-001")
}

#[fixture]
pub fn trade_id() -> TradeId {
    TradeId::new("1")
}
