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

/// Implements `Serialize`/`Deserialize` for a `Ustr`-backed identifier by round-tripping
/// through its string representation.
macro_rules! impl_serialization_for_identifier {
    ($ty:ty) => {
        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s: &str = serde::Deserialize::deserialize(deserializer)?;
                Ok(Self::new(s))
            }
        }

        impl serde::Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }
    };
}

/// Implements `FromStr`/`TryFrom<&str>` for a `Ustr`-backed identifier.
macro_rules! impl_from_str_for_identifier {
    ($ty:ty) => {
        impl std::str::FromStr for $ty {
            type Err = anyhow::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new_checked(s)
            }
        }

        impl TryFrom<&str> for $ty {
            type Error = anyhow::Error;

            fn try_from(s: &str) -> Result<Self, Self::Error> {
                Self::new_checked(s)
            }
        }
    };
}

/// Implements `AsRef<str>` for a `Ustr`-backed identifier.
macro_rules! impl_as_ref_for_identifier {
    ($ty:ty) => {
        impl AsRef<str> for $ty {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }
    };
}

pub(crate) use impl_as_ref_for_identifier;
pub(crate) use impl_from_str_for_identifier;
pub(crate) use impl_serialization_for_identifier;
