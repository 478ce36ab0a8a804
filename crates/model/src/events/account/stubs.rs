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

//! Fixture constructors for account events commonly needed across test suites.

use std::str::FromStr;

use nautilus_core::{UnixNanos, UUID4};
use rstest::fixture;
use rust_decimal::Decimal;

use super::state::AccountState;
use crate::{
    enums::AccountType,
    identifiers::stubs::account_id,
    identifiers::AccountId,
    types::{AccountBalance, Currency, MarginBalance, Money},
};

#[fixture]
pub fn account_state(account_id: AccountId) -> AccountState {
    let usd = Currency::new("USD", 2);
    let total = Money::new(Decimal::from_str("100000").unwrap(), usd);
    let locked = Money::new(Decimal::from_str("0").unwrap(), usd);
    let free = Money::new(Decimal::from_str("100000").unwrap(), usd);
    let balance = AccountBalance::new(total, locked, free);

    let initial = Money::new(Decimal::from_str("0").unwrap(), usd);
    let maintenance = Money::new(Decimal::from_str("0").unwrap(), usd);
    let margin = MarginBalance::new(initial, maintenance, None);

    AccountState::new(
        account_id,
        AccountType::Margin,
        vec![balance],
        vec![margin],
        true,
        UUID4::new(),
        UnixNanos::default(),
        UnixNanos::default(),
        Some(usd),
    )
}
