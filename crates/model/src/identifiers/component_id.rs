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

use nautilus_core::correctness::{check_valid_string, FAILED};
use ustr::Ustr;

use super::macros::{impl_as_ref_for_identifier, impl_from_str_for_identifier, impl_serialization_for_identifier};

/// Represents a valid component ID, the unique name a lifecycle-managed runtime
/// component (client, engine, strategy) registers itself under.
#[repr(C)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ComponentId(Ustr);

impl ComponentId {
    /// Creates a new [`ComponentId`] instance with correctness checking.
    ///
    /// # Errors
    ///
    /// Returns an error if `value` is not a valid string.
    pub fn new_checked<T: AsRef<str>>(value: T) -> anyhow::Result<Self> {
        let value = value.as_ref();
        check_valid_string(value, "value")?;
        Ok(Self(Ustr::from(value)))
    }

    /// Creates a new [`ComponentId`] instance.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not a valid string.
    #[must_use]
    pub fn new<T: AsRef<str>>(value: T) -> Self {
        Self::new_checked(value).expect(FAILED)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Debug for ComponentId {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}({})", stringify!(ComponentId), self.0)
    }
}

impl Display for ComponentId {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl_from_str_for_identifier!(ComponentId);
impl_serialization_for_identifier!(ComponentId);
impl_as_ref_for_identifier!(ComponentId);
