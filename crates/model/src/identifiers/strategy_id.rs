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

use std::fmt::{Debug, Display, Formatter};

use nautilus_core::correctness::{check_string_contains, check_valid_string, FAILED};
use ustr::Ustr;

use super::macros::{impl_as_ref_for_identifier, impl_from_str_for_identifier, impl_serialization_for_identifier};

/// The sentinel strategy ID for orders/events not owned by any user strategy.
pub const EXTERNAL_STRATEGY_ID: &str = "EXTERNAL";

/// Represents a valid strategy ID.
///
/// Must be of the form `<name>-<tag>`, e.g. `EMACross-001`, with the single exception of
/// the reserved value `"EXTERNAL"` used to tag orders/events generated outside of any
/// strategy (e.g. manually, or by an external system).
#[repr(C)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StrategyId(Ustr);

impl StrategyId {
    /// Creates a new [`StrategyId`] instance with correctness checking.
    ///
    /// # Errors
    ///
    /// Returns an error if `value` is not a valid string, and not equal to `"EXTERNAL"`,
    /// does not contain a `-` separator.
    pub fn new_checked<T: AsRef<str>>(value: T) -> anyhow::Result<Self> {
        let value = value.as_ref();
        check_valid_string(value, "value")?;
        if value != EXTERNAL_STRATEGY_ID {
            check_string_contains(value, "-", "value")?;
        }
        Ok(Self(Ustr::from(value)))
    }

    /// Creates a new [`StrategyId`] instance.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not a valid string.
    #[must_use]
    pub fn new<T: AsRef<str>>(value: T) -> Self {
        Self::new_checked(value).expect(FAILED)
    }

    /// Returns the reserved external strategy ID.
    #[must_use]
    pub fn external() -> Self {
        Self(Ustr::from(EXTERNAL_STRATEGY_ID))
    }

    /// Returns whether this is the reserved external strategy ID.
    #[must_use]
    pub fn is_external(&self) -> bool {
        self.0.as_str() == EXTERNAL_STRATEGY_ID
    }

    /// Returns the strategy's tag, the portion of the identifier following the last `-`.
    #[must_use]
    pub fn get_tag(&self) -> &str {
        self.0.rsplit('-').next().unwrap_or(self.0.as_str())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Debug for StrategyId {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}({})", stringify!(StrategyId), self.0)
    }
}

impl Display for StrategyId {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl_from_str_for_identifier!(StrategyId);
impl_serialization_for_identifier!(StrategyId);
impl_as_ref_for_identifier!(StrategyId);
