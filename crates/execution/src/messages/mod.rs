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

//! The typed command surface an execution client acts on.
//!
//! These are message shapes only: how a concrete, venue-specific client fulfills a
//! [`SubmitOrder`] or a [`CancelOrder`] is that adapter's concern, not this crate's.

pub mod cancel;
pub mod cancel_all;
pub mod modify;
pub mod query;
pub mod submit;
pub mod submit_list;

pub use cancel::CancelOrder;
pub use cancel_all::CancelAllOrders;
pub use modify::ModifyOrder;
pub use query::QueryOrder;
pub use submit::SubmitOrder;
pub use submit_list::SubmitOrderList;
