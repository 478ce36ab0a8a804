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

//! The execution-client event-generation contract for [NautilusTrader](http://nautilustrader.io).
//!
//! An `ExecutionClient` is a [`nautilus_common::Component`] specialization that never
//! mutates order state itself: it only synthesizes order lifecycle events and
//! reconciliation reports from venue acknowledgements, and dispatches them over the
//! message bus for an execution engine to consume. This crate provides:
//!
//! - **Execution clients**: the [`client::ExecutionClient`] trait and its
//!   [`client::base::BaseExecutionClient`] implementation.
//! - **Reports**: `OrderStatusReport`, `FillReport`, `PositionStatusReport` and
//!   `ExecutionMassStatus`, used to reconcile local state against a venue.
//! - **Commands**: the typed command surface (`SubmitOrder`, `SubmitOrderList`,
//!   `ModifyOrder`, `CancelOrder`, `CancelAllOrders`, `QueryOrder`) an adapter-specific
//!   execution client receives and acts on; this crate defines the message shapes only,
//!   not venue-specific handling.

#![deny(unsafe_code)]
#![deny(nonstandard_style)]
#![deny(missing_debug_implementations)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]

pub mod client;
pub mod messages;
pub mod reports;
