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

//! Minimal value types carried by order lifecycle events and account state: currencies,
//! money, prices, quantities and account/margin balances.
//!
//! The reference platform backs these with a custom fixed-point integer engine shared with
//! a Cython/Python FFI surface; that engine is out of this crate's scope (no FFI boundary
//! here), so these wrap [`rust_decimal::Decimal`] directly. See `DESIGN.md`.

use std::fmt::{Debug, Display, Formatter};

use nautilus_core::correctness::{check_predicate_true, check_valid_string, FAILED};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ustr::Ustr;

/// Represents a currency, identified by its ISO 4217-like code (e.g. `"USD"`, `"BTC"`).
#[repr(C)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Currency {
    /// The currency code, e.g. `"USD"`.
    pub code: Ustr,
    /// The number of decimal places conventionally used to display amounts in this currency.
    pub precision: u8,
}

impl Currency {
    /// Creates a new [`Currency`] instance with correctness checking.
    ///
    /// # Errors
    ///
    /// Returns an error if `code` is not a valid string, or `precision` exceeds 18.
    pub fn new_checked<T: AsRef<str>>(code: T, precision: u8) -> anyhow::Result<Self> {
        let code = code.as_ref();
        check_valid_string(code, "code")?;
        check_predicate_true(precision <= 18, "precision exceeded maximum of 18")?;
        Ok(Self { code: Ustr::from(code), precision })
    }

    /// Creates a new [`Currency`] instance.
    ///
    /// # Panics
    ///
    /// Panics if `code` is not a valid string, or `precision` exceeds 18.
    #[must_use]
    pub fn new<T: AsRef<str>>(code: T, precision: u8) -> Self {
        Self::new_checked(code, precision).expect(FAILED)
    }

    #[must_use]
    pub fn code(&self) -> &str {
        self.code.as_str()
    }
}

impl Debug for Currency {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}({}, {})", stringify!(Currency), self.code, self.precision)
    }
}

impl Display for Currency {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}", self.code)
    }
}

/// Represents an amount of money denominated in a single currency.
#[repr(C)]
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    /// The amount.
    pub amount: Decimal,
    /// The denominating currency.
    pub currency: Currency,
}

impl Money {
    /// Creates a new [`Money`] instance.
    #[must_use]
    pub const fn new(amount: Decimal, currency: Currency) -> Self {
        Self { amount, currency }
    }

    #[must_use]
    pub fn as_decimal(&self) -> Decimal {
        self.amount
    }
}

impl Debug for Money {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}({} {})", stringify!(Money), self.amount, self.currency.code)
    }
}

impl Display for Money {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{} {}", self.amount, self.currency.code)
    }
}

/// Represents a price for a single unit of an instrument.
#[repr(C)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Price {
    /// The price value.
    pub value: Decimal,
}

impl Price {
    /// Creates a new [`Price`] instance.
    #[must_use]
    pub const fn new(value: Decimal) -> Self {
        Self { value }
    }

    #[must_use]
    pub fn as_decimal(&self) -> Decimal {
        self.value
    }
}

impl Debug for Price {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}({})", stringify!(Price), self.value)
    }
}

impl Display for Price {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Represents a non-negative order/fill quantity.
#[repr(C)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Quantity {
    /// The quantity value.
    pub value: Decimal,
}

impl Quantity {
    /// Creates a new [`Quantity`] instance with correctness checking.
    ///
    /// # Errors
    ///
    /// Returns an error if `value` is negative.
    pub fn new_checked(value: Decimal) -> anyhow::Result<Self> {
        check_predicate_true(value >= Decimal::ZERO, "quantity value was negative")?;
        Ok(Self { value })
    }

    /// Creates a new [`Quantity`] instance.
    ///
    /// # Panics
    ///
    /// Panics if `value` is negative.
    #[must_use]
    pub fn new(value: Decimal) -> Self {
        Self::new_checked(value).expect(FAILED)
    }

    #[must_use]
    pub fn as_decimal(&self) -> Decimal {
        self.value
    }
}

impl Debug for Quantity {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}({})", stringify!(Quantity), self.value)
    }
}

impl Display for Quantity {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Represents a single balance for an account, denominated in one currency.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct AccountBalance {
    /// The total balance.
    pub total: Money,
    /// The balance locked (unavailable for use, e.g. held by open orders).
    pub locked: Money,
    /// The balance free for use (`total - locked`).
    pub free: Money,
}

impl AccountBalance {
    /// Creates a new [`AccountBalance`] instance with correctness checking.
    ///
    /// # Errors
    ///
    /// Returns an error if `total`, `locked` and `free` are not all denominated in the
    /// same currency, or if `free != total - locked`.
    pub fn new_checked(total: Money, locked: Money, free: Money) -> anyhow::Result<Self> {
        check_predicate_true(total.currency == locked.currency, "currency mismatch between total and locked")?;
        check_predicate_true(total.currency == free.currency, "currency mismatch between total and free")?;
        check_predicate_true(free.amount == total.amount - locked.amount, "free did not equal total - locked")?;
        Ok(Self { total, locked, free })
    }

    /// Creates a new [`AccountBalance`] instance.
    ///
    /// # Panics
    ///
    /// Panics if the balances are inconsistent; see [`Self::new_checked`].
    #[must_use]
    pub fn new(total: Money, locked: Money, free: Money) -> Self {
        Self::new_checked(total, locked, free).expect(FAILED)
    }
}

impl Display for AccountBalance {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "AccountBalance(total={}, locked={}, free={})",
            self.total, self.locked, self.free
        )
    }
}

/// Represents a margin balance for an account, optionally scoped to one instrument.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct MarginBalance {
    /// The margin required to initiate a position.
    pub initial: Money,
    /// The margin required to maintain an open position.
    pub maintenance: Money,
    /// The instrument this margin applies to, if scoped (`None` applies across the account).
    pub instrument_id: Option<crate::identifiers::InstrumentId>,
}

impl MarginBalance {
    /// Creates a new [`MarginBalance`] instance with correctness checking.
    ///
    /// # Errors
    ///
    /// Returns an error if `initial` and `maintenance` are not denominated in the same
    /// currency.
    pub fn new_checked(
        initial: Money,
        maintenance: Money,
        instrument_id: Option<crate::identifiers::InstrumentId>,
    ) -> anyhow::Result<Self> {
        check_predicate_true(
            initial.currency == maintenance.currency,
            "currency mismatch between initial and maintenance margin",
        )?;
        Ok(Self { initial, maintenance, instrument_id })
    }

    /// Creates a new [`MarginBalance`] instance.
    ///
    /// # Panics
    ///
    /// Panics if `initial` and `maintenance` are not denominated in the same currency.
    #[must_use]
    pub fn new(
        initial: Money,
        maintenance: Money,
        instrument_id: Option<crate::identifiers::InstrumentId>,
    ) -> Self {
        Self::new_checked(initial, maintenance, instrument_id).expect(FAILED)
    }
}

impl Display for MarginBalance {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "MarginBalance(initial={}, maintenance={})", self.initial, self.maintenance)
    }
}
