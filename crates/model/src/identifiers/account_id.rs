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

/// Represents a valid account ID.
///
/// Must be of the form `<issuer>-<id>`, e.g. `SIM-001`. The `issuer` component must equal
/// the `ClientId` of the execution client that owns the account.
#[repr(C)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AccountId(Ustr);

impl AccountId {
    /// Creates a new [`AccountId`] instance with correctness checking.
    ///
    /// # Errors
    ///
    /// Returns an error if `value` is not a valid string, or does not contain a `-` separator.
    pub fn new_checked<T: AsRef<str>>(value: T) -> anyhow::Result<Self> {
        let value = value.as_ref();
        check_valid_string(value, "value")?;
        check_string_contains(value, "-", "value")?;
        Ok(Self(Ustr::from(value)))
    }

    /// Creates a new [`AccountId`] instance.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not a valid string.
    #[must_use]
    pub fn new<T: AsRef<str>>(value: T) -> Self {
        Self::new_checked(value).expect(FAILED)
    }

    /// Returns the issuer component, the portion of the identifier preceding the first `-`.
    #[must_use]
    pub fn issuer(&self) -> &str {
        self.0.split('-').next().unwrap_or(self.0.as_str())
    }

    /// Returns the account number component, the portion of the identifier following the
    /// first `-`.
    #[must_use]
    pub fn account_number(&self) -> &str {
        self.0.splitn(2, '-').nth(1).unwrap_or("")
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Debug for AccountId {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}({})", stringify!(AccountId), self.0)
    }
}

impl Display for AccountId {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl_from_str_for_identifier!(AccountId);
impl_serialization_for_identifier!(AccountId);
impl_as_ref_for_identifier!(AccountId);

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn test_account_id_new() {
        let id = AccountId::new("SIM-001");
        assert_eq!(id.as_str(), "SIM-001");
        assert_eq!(id.issuer(), "SIM");
        assert_eq!(id.account_number(), "001");
    }

    #[rstest]
    #[case("SIM-001", true)]
    #[case("SIM", false)]
    #[case("", false)]
    fn test_account_id_new_checked(#[case] value: &str, #[case] expected_ok: bool) {
        assert_eq!(AccountId::new_checked(value).is_ok(), expected_ok);
    }

    #[rstest]
    fn test_account_id_issuer_matches_client_id() {
        let account_id = AccountId::new("SIM-001");
        assert_eq!(account_id.issuer(), "SIM");
    }
}
