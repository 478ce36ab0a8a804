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

//! Time events and timers shared by `TestClock` and `LiveClock`.

use std::{cmp::Ordering, fmt::Display, num::NonZeroU64};

use nautilus_core::{
    UUID4, UnixNanos,
    correctness::{FAILED, check_valid_string},
};
use tokio::{sync::mpsc::UnboundedSender, task::JoinHandle, time::Instant};
use ustr::Ustr;

/// Creates a valid nanoseconds interval that is guaranteed to be positive.
///
/// # Panics
///
/// Panics if `interval_ns` is zero.
#[must_use]
pub fn create_valid_interval(interval_ns: u64) -> NonZeroU64 {
    NonZeroU64::new(std::cmp::max(interval_ns, 1)).expect("`interval_ns` must be positive")
}

/// A named, timestamped occurrence produced by a timer or alert.
///
/// `name` is the timer/alert name; it doubles as the routing key a `Clock`
/// uses to resolve which callback ID should receive the event.
#[repr(C)]
#[derive(Clone, Copy, Debug, Eq)]
pub struct TimeEvent {
    /// The timer/alert name that produced this event.
    pub name: Ustr,
    /// The unique identifier for the event.
    pub event_id: UUID4,
    /// UNIX timestamp (nanoseconds) when the event occurred.
    pub ts_event: UnixNanos,
    /// UNIX timestamp (nanoseconds) when the event was initialized.
    pub ts_init: UnixNanos,
}

impl TimeEvent {
    /// Creates a new [`TimeEvent`] instance.
    #[must_use]
    pub const fn new(name: Ustr, event_id: UUID4, ts_event: UnixNanos, ts_init: UnixNanos) -> Self {
        Self {
            name,
            event_id,
            ts_event,
            ts_init,
        }
    }
}

impl PartialEq for TimeEvent {
    fn eq(&self, other: &Self) -> bool {
        self.event_id == other.event_id
    }
}

impl Display for TimeEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "TimeEvent(name={}, event_id={}, ts_event={}, ts_init={})",
            self.name, self.event_id, self.ts_event, self.ts_init
        )
    }
}

/// Pairs a fired [`TimeEvent`] with the opaque handler ID that should receive it.
///
/// The handler is resolved against the message bus's handler registry by the
/// dispatch loop; `Clock` implementations never hold or invoke a callable directly.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeEventHandler {
    /// The time event.
    pub event: TimeEvent,
    /// The opaque handler ID to dispatch this event to.
    pub callback_id: Ustr,
}

impl TimeEventHandler {
    #[must_use]
    pub const fn new(event: TimeEvent, callback_id: Ustr) -> Self {
        Self { event, callback_id }
    }
}

/// A one-shot or recurring timer driven by explicit `advance_time` calls, for use with
/// [`crate::clock::TestClock`].
#[derive(Clone, Copy, Debug)]
pub struct TestTimer {
    /// The name of the timer.
    pub name: Ustr,
    /// The interval between timer events in nanoseconds.
    pub interval_ns: NonZeroU64,
    /// The start time of the timer in UNIX nanoseconds.
    pub start_time_ns: UnixNanos,
    /// The optional stop time of the timer in UNIX nanoseconds; `None` means open-ended.
    pub stop_time_ns: Option<UnixNanos>,
    /// The opaque handler ID invoked on each firing of this timer.
    pub callback_id: Ustr,
    next_time_ns: UnixNanos,
    is_expired: bool,
}

impl TestTimer {
    /// Creates a new [`TestTimer`] instance.
    ///
    /// # Panics
    ///
    /// Panics if `name` is not a valid string.
    #[must_use]
    pub fn new(
        name: Ustr,
        interval_ns: NonZeroU64,
        start_time_ns: UnixNanos,
        stop_time_ns: Option<UnixNanos>,
        callback_id: Ustr,
    ) -> Self {
        check_valid_string(name, stringify!(name)).expect(FAILED);

        Self {
            name,
            interval_ns,
            start_time_ns,
            stop_time_ns,
            callback_id,
            next_time_ns: start_time_ns + interval_ns.get(),
            is_expired: false,
        }
    }

    /// Returns whether this timer has expired (an alert already fired, or a recurring timer
    /// reached its `stop_time_ns`).
    #[must_use]
    pub const fn is_expired(&self) -> bool {
        self.is_expired
    }

    /// Returns the next scheduled firing time, regardless of expiry.
    #[must_use]
    pub const fn next_time_ns(&self) -> UnixNanos {
        self.next_time_ns
    }

    /// Pops the next [`TimeEvent`] for this timer, advancing its internal next firing time.
    #[must_use]
    pub fn pop_event(&self, event_id: UUID4, ts_init: UnixNanos) -> TimeEvent {
        TimeEvent::new(self.name, event_id, self.next_time_ns, ts_init)
    }

    /// Marks this timer for removal on its owning clock's next retention pass.
    pub const fn cancel(&mut self) {
        self.is_expired = true;
    }

    /// Advances the timer to `to_time_ns`, returning every [`TimeEvent`] due in
    /// `(previous next_time_ns, to_time_ns]`, in ascending `ts_event` order.
    ///
    /// A recurring timer may yield many events in one call. Marks the timer expired once
    /// its `stop_time_ns` is reached or passed.
    pub fn advance(&mut self, to_time_ns: UnixNanos) -> impl Iterator<Item = TimeEvent> + '_ {
        let advances = if self.is_expired || to_time_ns < self.next_time_ns {
            0
        } else {
            (to_time_ns - self.next_time_ns).as_u64() / self.interval_ns.get() + 1
        };

        TestTimerIter {
            timer: self,
            advances,
        }
    }
}

struct TestTimerIter<'a> {
    timer: &'a mut TestTimer,
    advances: u64,
}

impl Iterator for TestTimerIter<'_> {
    type Item = TimeEvent;

    fn next(&mut self) -> Option<Self::Item> {
        if self.advances == 0 || self.timer.is_expired {
            return None;
        }

        if let Some(stop_time_ns) = self.timer.stop_time_ns
            && self.timer.next_time_ns > stop_time_ns
        {
            self.timer.is_expired = true;
            self.advances = 0;
            return None;
        }

        let event = self
            .timer
            .pop_event(UUID4::new(), self.timer.next_time_ns);

        if let Some(stop_time_ns) = self.timer.stop_time_ns
            && self.timer.next_time_ns >= stop_time_ns
        {
            self.timer.is_expired = true;
        } else {
            self.timer.next_time_ns = self.timer.next_time_ns + self.timer.interval_ns.get();
        }

        self.advances -= 1;
        Some(event)
    }
}

/// A wall-clock-driven recurring timer, for use with [`crate::clock::LiveClock`].
///
/// Spawns a background `tokio` task that sleeps until each firing is due and sends a
/// [`TimeEventHandler`] through `event_tx` for the dispatch loop to consume (§5: "one
/// background timer thread fires due alerts/timers into a bounded queue consumed by the
/// main dispatch loop").
#[derive(Debug)]
pub struct LiveTimer {
    /// The name of the timer.
    pub name: Ustr,
    /// The interval between timer events in nanoseconds.
    pub interval_ns: NonZeroU64,
    /// The opaque handler ID invoked on each firing of this timer.
    pub callback_id: Ustr,
    stop_time_ns: Option<UnixNanos>,
    task_handle: Option<JoinHandle<()>>,
}

impl LiveTimer {
    /// Creates a new [`LiveTimer`] instance, not yet started.
    #[must_use]
    pub fn new(
        name: Ustr,
        interval_ns: NonZeroU64,
        stop_time_ns: Option<UnixNanos>,
        callback_id: Ustr,
    ) -> Self {
        check_valid_string(name, stringify!(name)).expect(FAILED);

        Self {
            name,
            interval_ns,
            callback_id,
            stop_time_ns,
            task_handle: None,
        }
    }

    /// Starts firing events at every `interval_ns`, beginning at `start_time_ns`, sending each
    /// through `event_tx`. Firing stops once `stop_time_ns` (if any) is reached.
    pub fn start(
        &mut self,
        start_time_ns: UnixNanos,
        event_tx: UnboundedSender<TimeEventHandler>,
    ) {
        let name = self.name;
        let interval_ns = self.interval_ns;
        let stop_time_ns = self.stop_time_ns;
        let callback_id = self.callback_id;

        let now_ns = UnixNanos::from(chrono::Utc::now().timestamp_nanos_opt().unwrap_or(0) as u64);
        let start_delay = start_time_ns.as_u64().saturating_sub(now_ns.as_u64());
        let period = tokio::time::Duration::from_nanos(interval_ns.get());

        let handle = tokio::spawn(async move {
            tokio::time::sleep(tokio::time::Duration::from_nanos(start_delay)).await;
            let mut interval = tokio::time::interval_at(Instant::now(), period);
            let mut next_time_ns = start_time_ns + interval_ns.get();

            loop {
                interval.tick().await;

                let now_ns =
                    UnixNanos::from(chrono::Utc::now().timestamp_nanos_opt().unwrap_or(0) as u64);
                let event = TimeEvent::new(name, UUID4::new(), next_time_ns, now_ns);
                if event_tx
                    .send(TimeEventHandler::new(event, callback_id))
                    .is_err()
                {
                    break; // Dispatch loop gone, stop firing
                }

                if let Some(stop_time_ns) = stop_time_ns
                    && next_time_ns >= stop_time_ns
                {
                    break;
                }
                next_time_ns = next_time_ns + interval_ns.get();
            }
        });

        self.task_handle = Some(handle);
    }

    /// Cancels the timer; idempotent (cancelling an already-cancelled timer is a no-op).
    pub fn cancel(&mut self) {
        if let Some(handle) = self.task_handle.take() {
            handle.abort();
        }
    }
}
