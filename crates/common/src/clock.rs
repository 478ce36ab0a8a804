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

//! Deterministic and wall-clock `Clock` implementations.

use std::{collections::HashMap, fmt::Debug, ops::Deref};

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use nautilus_core::{
    AtomicTime, UnixNanos,
    correctness::{check_positive_u64, check_predicate_true, check_valid_string},
    time::get_atomic_clock_realtime,
};
use tokio::sync::mpsc::UnboundedSender;
use ustr::Ustr;

use crate::timer::{LiveTimer, TestTimer, TimeEvent, TimeEventHandler, create_valid_interval};

/// Represents a type of clock.
///
/// # Notes
///
/// An active timer is one which has not expired (`timer.is_expired() == false`).
///
/// Handlers are never held as callables: every `callback_id` is an opaque token resolved
/// against the message bus's handler registry by whatever drives dispatch (see
/// [`crate::msgbus::handler`]).
pub trait Clock: Debug {
    /// Returns the current UNIX timestamp in nanoseconds (ns).
    fn timestamp_ns(&self) -> UnixNanos;

    /// Returns the current UNIX timestamp in microseconds (μs).
    fn timestamp_us(&self) -> u64;

    /// Returns the current UNIX timestamp in milliseconds (ms).
    fn timestamp_ms(&self) -> u64;

    /// Returns the current UNIX timestamp in floating-point seconds.
    fn timestamp(&self) -> f64;

    /// Returns the names of active timers in the clock.
    fn timer_names(&self) -> Vec<&str>;

    /// Returns the count of active timers in the clock.
    fn timer_count(&self) -> usize;

    /// Registers a default handler for the clock. If a timer does not have an event-specific
    /// handler, this callback ID is used.
    fn register_default_handler(&mut self, callback_id: Ustr);

    /// Sets a one-shot alert to fire at `alert_time_ns`.
    ///
    /// Any existing timer/alert registered under the same `name` is cancelled before the new
    /// alert is scheduled (§4.1: "registering a timer/alert with an existing name ⇒ error" is
    /// relaxed to replace-with-warning here, matching the reference's own `set_time_alert_ns`
    /// behavior, which logs and replaces rather than erroring).
    ///
    /// `alert_time_ns` in the past fires at the next dispatch opportunity (live) or the next
    /// `advance_time` boundary (test) — see the concrete implementations.
    ///
    /// # Errors
    ///
    /// Returns an error if `name` is invalid or no callback (explicit or default) is available.
    fn set_time_alert_ns(
        &mut self,
        name: &str,
        alert_time_ns: UnixNanos,
        callback_id: Option<Ustr>,
    ) -> anyhow::Result<()>;

    /// Sets a one-shot alert to fire at `alert_time`.
    fn set_time_alert(
        &mut self,
        name: &str,
        alert_time: DateTime<Utc>,
        callback_id: Option<Ustr>,
    ) -> anyhow::Result<()> {
        self.set_time_alert_ns(name, alert_time.into(), callback_id)
    }

    /// Sets a recurring timer firing every `interval_ns` between `start_time_ns` and
    /// `stop_time_ns`. `stop_time_ns == None` (or `Some(0)`) means open-ended.
    ///
    /// # Errors
    ///
    /// Returns an error if `name` is invalid, `interval_ns` is not positive, or no callback
    /// (explicit or default) is available.
    fn set_timer_ns(
        &mut self,
        name: &str,
        interval_ns: u64,
        start_time_ns: Option<UnixNanos>,
        stop_time_ns: Option<UnixNanos>,
        callback_id: Option<Ustr>,
    ) -> anyhow::Result<()>;

    /// Sets a recurring timer using `DateTime<Utc>` start/stop times.
    fn set_timer(
        &mut self,
        name: &str,
        interval_ns: std::time::Duration,
        start_time: Option<DateTime<Utc>>,
        stop_time: Option<DateTime<Utc>>,
        callback_id: Option<Ustr>,
    ) -> anyhow::Result<()> {
        self.set_timer_ns(
            name,
            interval_ns.as_nanos() as u64,
            start_time.map(UnixNanos::from),
            stop_time.map(UnixNanos::from),
            callback_id,
        )
    }

    /// Returns the next scheduled firing time for timer `name`, or `None` if it doesn't exist.
    fn next_time_ns(&self, name: &str) -> Option<UnixNanos>;

    /// Cancels the timer with `name`. Idempotent: cancelling a non-existent or
    /// already-cancelled timer is a silent no-op.
    fn cancel_timer(&mut self, name: &str);

    /// Cancels all timers.
    fn cancel_timers(&mut self);
}

/// A deterministic clock advanced explicitly via [`TestClock::advance_time`], for backtests.
#[derive(Debug)]
pub struct TestClock {
    time: AtomicTime,
    /// Timers ordered by registration (insertion order), not by name — this is the tie-break
    /// `advance_time` relies on for same-`ts_event` firings (§8 property 3).
    timers: IndexMap<Ustr, TestTimer>,
    default_callback: Option<Ustr>,
    callbacks: HashMap<Ustr, Ustr>,
}

impl Default for TestClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for TestClock {
    type Target = AtomicTime;

    fn deref(&self) -> &Self::Target {
        &self.time
    }
}

impl TestClock {
    /// Creates a new [`TestClock`] instance, starting at UNIX epoch zero.
    #[must_use]
    pub fn new() -> Self {
        Self {
            time: AtomicTime::new(false, UnixNanos::default()),
            timers: IndexMap::new(),
            default_callback: None,
            callbacks: HashMap::new(),
        }
    }

    /// Returns a reference to the internal timers, in registration order.
    #[must_use]
    pub const fn get_timers(&self) -> &IndexMap<Ustr, TestTimer> {
        &self.timers
    }

    /// Jumps the clock to `to_time_ns` without firing any timers.
    ///
    /// # Panics
    ///
    /// Panics if `to_time_ns` is less than the current time.
    pub fn set_time(&mut self, to_time_ns: UnixNanos) {
        assert!(
            to_time_ns >= self.time.get_time_ns(),
            "`to_time_ns` {to_time_ns} was < current time {}",
            self.time.get_time_ns()
        );
        self.time.set_time(to_time_ns);
    }

    /// Advances the clock to `to_time_ns`, returning every [`TimeEvent`] due in
    /// `(current, to_time_ns]` in strict ascending `ts_event` order, ties broken by
    /// registration order (§4.1, §8 property 3).
    ///
    /// If `set_time` is `true`, the current time becomes `to_time_ns` afterwards.
    ///
    /// # Panics
    ///
    /// Panics if `to_time_ns` is less than the current time.
    pub fn advance_time(&mut self, to_time_ns: UnixNanos, set_time: bool) -> Vec<TimeEvent> {
        let from_time_ns = self.time.get_time_ns();

        assert!(
            to_time_ns >= from_time_ns,
            "`to_time_ns` {to_time_ns} was < `from_time_ns` {from_time_ns}"
        );

        if set_time {
            self.time.set_time(to_time_ns);
        }

        let mut events: Vec<TimeEvent> = Vec::new();
        self.timers.retain(|_, timer| {
            for event in timer.advance(to_time_ns) {
                events.push(event);
            }
            !timer.is_expired()
        });

        // Stable sort preserves registration order (iteration order above) for ties.
        events.sort_by(|a, b| a.ts_event.cmp(&b.ts_event));
        events
    }

    /// Resolves the handler (event-specific or default) each of `events` should route to.
    ///
    /// # Panics
    ///
    /// Panics if an event has neither a specific nor a default callback registered.
    #[must_use]
    pub fn match_handlers(&self, events: Vec<TimeEvent>) -> Vec<TimeEventHandler> {
        events
            .into_iter()
            .map(|event| {
                let callback_id = self
                    .callbacks
                    .get(&event.name)
                    .copied()
                    .or(self.default_callback)
                    .unwrap_or_else(|| panic!("Event '{}' should have associated handler", event.name));
                TimeEventHandler::new(event, callback_id)
            })
            .collect()
    }
}

impl Clock for TestClock {
    fn timestamp_ns(&self) -> UnixNanos {
        self.time.get_time_ns()
    }

    fn timestamp_us(&self) -> u64 {
        self.time.get_time_us()
    }

    fn timestamp_ms(&self) -> u64 {
        self.time.get_time_ms()
    }

    fn timestamp(&self) -> f64 {
        self.time.get_time()
    }

    fn timer_names(&self) -> Vec<&str> {
        self.timers
            .iter()
            .filter(|(_, timer)| !timer.is_expired())
            .map(|(name, _)| name.as_str())
            .collect()
    }

    fn timer_count(&self) -> usize {
        self.timers.iter().filter(|(_, t)| !t.is_expired()).count()
    }

    fn register_default_handler(&mut self, callback_id: Ustr) {
        self.default_callback = Some(callback_id);
    }

    fn set_time_alert_ns(
        &mut self,
        name: &str,
        mut alert_time_ns: UnixNanos,
        callback_id: Option<Ustr>,
    ) -> anyhow::Result<()> {
        check_valid_string(name, stringify!(name))?;
        let name = Ustr::from(name);

        if self.timers.contains_key(&name) {
            self.cancel_timer(name.as_str());
            log::warn!("Timer '{name}' replaced");
        }

        check_predicate_true(
            callback_id.is_some() || self.callbacks.contains_key(&name) || self.default_callback.is_some(),
            "No callback provided",
        )?;

        if let Some(callback_id) = callback_id {
            self.callbacks.insert(name, callback_id);
        }

        let ts_now = self.time.get_time_ns();
        if alert_time_ns < ts_now {
            alert_time_ns = ts_now;
            log::warn!("Timer '{name}' alert time was in the past, adjusted for immediate firing");
        }

        let interval_ns = create_valid_interval(std::cmp::max((alert_time_ns - ts_now).as_u64(), 1));
        let resolved = self
            .callbacks
            .get(&name)
            .copied()
            .or(self.default_callback)
            .expect("checked above");
        let timer = TestTimer::new(name, interval_ns, ts_now, Some(alert_time_ns), resolved);
        self.timers.insert(name, timer);

        Ok(())
    }

    fn set_timer_ns(
        &mut self,
        name: &str,
        interval_ns: u64,
        start_time_ns: Option<UnixNanos>,
        stop_time_ns: Option<UnixNanos>,
        callback_id: Option<Ustr>,
    ) -> anyhow::Result<()> {
        check_valid_string(name, stringify!(name))?;
        check_positive_u64(interval_ns, stringify!(interval_ns))?;
        check_predicate_true(
            callback_id.is_some() || self.callbacks.contains_key(&Ustr::from(name)) || self.default_callback.is_some(),
            "No callback provided",
        )?;

        let name = Ustr::from(name);

        if self.timers.contains_key(&name) {
            self.cancel_timer(name.as_str());
            log::warn!("Timer '{name}' replaced");
        }

        if let Some(callback_id) = callback_id {
            self.callbacks.insert(name, callback_id);
        }

        let start_time_ns = match start_time_ns {
            Some(t) if t.as_u64() != 0 => t,
            _ => self.time.get_time_ns(),
        };
        // A zero stop time means open-ended (§3: "if stop_time_ns == 0 the timer is open-ended").
        let stop_time_ns = stop_time_ns.filter(|t| t.as_u64() != 0);

        if let Some(stop_time) = stop_time_ns {
            anyhow::ensure!(
                stop_time > start_time_ns,
                "Timer '{name}' stop time {stop_time} must be after start time {start_time_ns}"
            );
        }

        let interval_ns = create_valid_interval(interval_ns);
        let resolved = self
            .callbacks
            .get(&name)
            .copied()
            .or(self.default_callback)
            .expect("checked above");
        let timer = TestTimer::new(name, interval_ns, start_time_ns, stop_time_ns, resolved);
        self.timers.insert(name, timer);

        Ok(())
    }

    fn next_time_ns(&self, name: &str) -> Option<UnixNanos> {
        self.timers
            .get(&Ustr::from(name))
            .map(TestTimer::next_time_ns)
    }

    fn cancel_timer(&mut self, name: &str) {
        if let Some(mut timer) = self.timers.shift_remove(&Ustr::from(name)) {
            timer.cancel();
        }
    }

    fn cancel_timers(&mut self) {
        for timer in self.timers.values_mut() {
            timer.cancel();
        }
        self.timers.clear();
    }
}

/// A real-time clock bound to wall time.
///
/// Timestamps are guaranteed unique and monotonically increasing (backed by
/// [`AtomicTime`]'s realtime CAS loop). Timers fire asynchronously on background `tokio`
/// tasks and are delivered through `event_tx` to whatever dispatch loop owns the bus (§5).
#[derive(Debug)]
pub struct LiveClock {
    time: &'static AtomicTime,
    timers: HashMap<Ustr, LiveTimer>,
    default_callback: Option<Ustr>,
    callbacks: HashMap<Ustr, Ustr>,
    event_tx: Option<UnboundedSender<TimeEventHandler>>,
}

impl Default for LiveClock {
    fn default() -> Self {
        Self::new(None)
    }
}

impl LiveClock {
    /// Creates a new [`LiveClock`] instance. `event_tx` is the channel fired timers deliver
    /// into; pass `None` if this clock will only be queried for time, never timers.
    #[must_use]
    pub fn new(event_tx: Option<UnboundedSender<TimeEventHandler>>) -> Self {
        Self {
            time: get_atomic_clock_realtime(),
            timers: HashMap::new(),
            default_callback: None,
            callbacks: HashMap::new(),
            event_tx,
        }
    }

    /// Returns a reference to the internal timers.
    #[must_use]
    pub const fn get_timers(&self) -> &HashMap<Ustr, LiveTimer> {
        &self.timers
    }
}

impl Clock for LiveClock {
    fn timestamp_ns(&self) -> UnixNanos {
        self.time.get_time_ns()
    }

    fn timestamp_us(&self) -> u64 {
        self.time.get_time_us()
    }

    fn timestamp_ms(&self) -> u64 {
        self.time.get_time_ms()
    }

    fn timestamp(&self) -> f64 {
        self.time.get_time()
    }

    fn timer_names(&self) -> Vec<&str> {
        self.timers.keys().map(Ustr::as_str).collect()
    }

    fn timer_count(&self) -> usize {
        self.timers.len()
    }

    fn register_default_handler(&mut self, callback_id: Ustr) {
        self.default_callback = Some(callback_id);
    }

    fn set_time_alert_ns(
        &mut self,
        name: &str,
        mut alert_time_ns: UnixNanos,
        callback_id: Option<Ustr>,
    ) -> anyhow::Result<()> {
        check_valid_string(name, stringify!(name))?;
        let name = Ustr::from(name);

        let resolved = callback_id
            .or_else(|| self.callbacks.get(&name).copied())
            .or(self.default_callback);
        check_predicate_true(resolved.is_some(), "No callback provided")?;
        let resolved = resolved.expect("checked above");
        self.callbacks.insert(name, resolved);

        self.cancel_timer(name.as_str());

        let ts_now = self.time.get_time_ns();
        if alert_time_ns < ts_now {
            alert_time_ns = ts_now; // Fire at next dispatch opportunity
        }

        let interval_ns = create_valid_interval(std::cmp::max((alert_time_ns - ts_now).as_u64(), 1));
        let mut timer = LiveTimer::new(name, interval_ns, Some(alert_time_ns), resolved);
        if let Some(tx) = self.event_tx.clone() {
            timer.start(ts_now, tx);
        }
        self.timers.insert(name, timer);

        Ok(())
    }

    fn set_timer_ns(
        &mut self,
        name: &str,
        interval_ns: u64,
        start_time_ns: Option<UnixNanos>,
        stop_time_ns: Option<UnixNanos>,
        callback_id: Option<Ustr>,
    ) -> anyhow::Result<()> {
        check_valid_string(name, stringify!(name))?;
        check_positive_u64(interval_ns, stringify!(interval_ns))?;
        let name = Ustr::from(name);

        let resolved = callback_id
            .or_else(|| self.callbacks.get(&name).copied())
            .or(self.default_callback);
        check_predicate_true(resolved.is_some(), "No callback provided")?;
        let resolved = resolved.expect("checked above");
        self.callbacks.insert(name, resolved);

        self.cancel_timer(name.as_str());

        let start_time_ns = match start_time_ns {
            Some(t) if t.as_u64() != 0 => t,
            _ => self.time.get_time_ns(),
        };
        let stop_time_ns = stop_time_ns.filter(|t| t.as_u64() != 0);

        if let Some(stop_time) = stop_time_ns {
            anyhow::ensure!(
                stop_time > start_time_ns,
                "Timer '{name}' stop time {stop_time} must be after start time {start_time_ns}"
            );
        }

        let interval_ns = create_valid_interval(interval_ns);
        let mut timer = LiveTimer::new(name, interval_ns, stop_time_ns, resolved);
        if let Some(tx) = self.event_tx.clone() {
            timer.start(start_time_ns, tx);
        }
        self.timers.insert(name, timer);

        Ok(())
    }

    fn next_time_ns(&self, _name: &str) -> Option<UnixNanos> {
        // Live timers don't track their next firing locally; it lives on the spawned task.
        None
    }

    fn cancel_timer(&mut self, name: &str) {
        // Idempotent: removing an absent or already-cancelled timer is a silent no-op.
        if let Some(mut timer) = self.timers.remove(&Ustr::from(name)) {
            timer.cancel();
        }
    }

    fn cancel_timers(&mut self) {
        for timer in self.timers.values_mut() {
            timer.cancel();
        }
        self.timers.clear();
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn test_timestamp_starts_at_epoch() {
        let clock = TestClock::new();
        assert_eq!(clock.timestamp_ns(), UnixNanos::default());
    }

    #[rstest]
    fn test_set_timer_without_callback_errors() {
        let mut clock = TestClock::new();
        let result = clock.set_timer_ns("T", 100, None, None, None);
        assert!(result.is_err());
    }

    #[rstest]
    fn test_set_timer_ns_zero_interval_errors() {
        let mut clock = TestClock::new();
        let result = clock.set_timer_ns("T", 0, None, None, Some(Ustr::from("h")));
        assert!(result.is_err());
    }

    #[rstest]
    fn test_scenario_s3_deterministic_clock() {
        let mut clock = TestClock::new();
        clock.register_default_handler(Ustr::from("default-handler"));

        clock
            .set_timer_ns(
                "recurring",
                250_000_000,
                Some(UnixNanos::from(0)),
                Some(UnixNanos::from(0)),
                None,
            )
            .unwrap();
        clock
            .set_time_alert_ns("alert", UnixNanos::from(1_000_000_000), None)
            .unwrap();

        let events = clock.advance_time(UnixNanos::from(1_000_000_000), true);

        assert_eq!(events.len(), 5);
        let ts: Vec<u64> = events.iter().map(|e| e.ts_event.as_u64()).collect();
        assert_eq!(ts, vec![250_000_000, 500_000_000, 750_000_000, 1_000_000_000, 1_000_000_000]);
        assert_eq!(clock.timestamp_ns(), UnixNanos::from(1_000_000_000));
    }

    #[rstest]
    fn test_cancel_timer_is_idempotent() {
        let mut clock = TestClock::new();
        clock
            .set_timer_ns("T", 100, None, None, Some(Ustr::from("h")))
            .unwrap();
        clock.cancel_timer("T");
        clock.cancel_timer("T"); // second cancel is a silent no-op
        assert_eq!(clock.timer_count(), 0);
    }

    #[rstest]
    fn test_advance_time_panics_if_going_backwards() {
        let mut clock = TestClock::new();
        clock.set_time(UnixNanos::from(1_000));
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let mut clock = clock;
            clock.advance_time(UnixNanos::from(500), true);
        }));
        assert!(result.is_err());
    }
}
