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

//! The core runtime substrate: clock/timers, the in-process message bus, the component
//! lifecycle state machine, logging initialization, and a minimal execution-side cache.

pub mod cache;
pub mod clock;
pub mod component;
pub mod enums;
pub mod logging;
pub mod msgbus;
pub mod timer;

pub use clock::{Clock, LiveClock, TestClock};
pub use component::{Component, ComponentRegistry};
pub use enums::{ComponentState, ComponentTrigger};
pub use timer::{TimeEvent, TimeEventHandler};
