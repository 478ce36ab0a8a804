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

//! A common in-memory `MessageBus` for loosely coupled point-to-point and pub/sub
//! message passing, plus correlation-ID-tracked request/response.
//!
//! Pub/Sub wildcard patterns for hierarchical topics are possible:
//!  - `*` asterisk matches zero or more characters.
//!  - `?` question mark matches exactly one character.
//!
//! `comp*` matches `comp`, `complete` and `computer`. `c?mp` matches `camp` and `comp`
//! but not `cmp` or `champ` — the question mark stands for exactly one character.

pub mod handler;

use std::{
    any::Any,
    cell::RefCell,
    collections::HashMap,
    fmt::Debug,
    hash::{Hash, Hasher},
    rc::Rc,
};

use handler::ShareableMessageHandler;
use indexmap::IndexMap;
use nautilus_core::UUID4;
use nautilus_model::identifiers::TraderId;
use ustr::Ustr;

/// A subscription to a topic pattern, carrying the priority and registration-order
/// sequence number that together determine delivery order (§4.2, §8 property 2).
#[derive(Clone)]
pub struct Subscription {
    /// The shareable message handler for the subscription.
    pub handler: ShareableMessageHandler,
    /// Cached copy of the handler ID, for cheap equality/hash checks.
    pub handler_id: Ustr,
    /// The topic pattern for the subscription.
    pub pattern: Ustr,
    /// Higher-priority subscriptions are delivered first.
    pub priority: u8,
    /// Registration order; breaks ties between subscriptions of equal priority.
    pub sequence: u64,
}

impl Subscription {
    fn new(pattern: Ustr, handler: ShareableMessageHandler, priority: u8, sequence: u64) -> Self {
        let handler_id = handler.id();
        Self {
            handler_id,
            pattern,
            handler,
            priority,
            sequence,
        }
    }
}

impl Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Subscription {{ pattern: {}, handler: {}, priority: {}, sequence: {} }}",
            self.pattern, self.handler_id, self.priority, self.sequence
        )
    }
}

impl PartialEq for Subscription {
    fn eq(&self, other: &Self) -> bool {
        self.pattern == other.pattern && self.handler_id == other.handler_id
    }
}

impl Eq for Subscription {}

impl Hash for Subscription {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.pattern.hash(state);
        self.handler_id.hash(state);
    }
}

impl PartialOrd for Subscription {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Subscription {
    /// Descending priority, then ascending subscription sequence (§4.2, §9 open question:
    /// resolved in favor of registration order for ties across distinct patterns).
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| self.sequence.cmp(&other.sequence))
    }
}

/// Matches `topic` against `pattern`, where `pattern` may use `?` (exactly one
/// character) and `*` (zero or more characters). No other metacharacters are
/// supported. Matching is case-sensitive and byte-oriented (§4.2).
///
/// Iterative backtracking over byte slices: no allocation proportional to the square of
/// the input length, and no bound on `topic`/`pattern` length.
#[must_use]
pub fn is_matching(topic: &[u8], pattern: &[u8]) -> bool {
    let mut stack = vec![(0usize, 0usize)];

    while let Some((mut i, mut j)) = stack.pop() {
        loop {
            if i == topic.len() && j == pattern.len() {
                return true;
            }

            if j == pattern.len() {
                break;
            }

            if pattern[j] == b'*' {
                stack.push((i, j + 1));

                if i < topic.len() {
                    i += 1;
                    continue;
                }
                break;
            } else if i < topic.len() && (pattern[j] == b'?' || topic[i] == pattern[j]) {
                i += 1;
                j += 1;
                continue;
            }

            break;
        }
    }

    false
}

/// An in-process broker combining point-to-point endpoints, pub/sub topic
/// subscriptions with wildcard matching, and correlation-ID request/response (§4.2).
///
/// Single-process only: handlers are `Rc`-wrapped and the bus itself is meant to live
/// behind a single dispatch thread (§5), so no `Send`/`Sync` is implemented.
#[derive(Debug)]
pub struct MessageBus {
    /// The trader this bus instance belongs to.
    pub trader_id: TraderId,
    /// A unique identifier for this bus instance.
    pub instance_id: UUID4,
    /// A human-readable name for this bus instance.
    pub name: String,
    endpoints: IndexMap<Ustr, ShareableMessageHandler>,
    subscriptions: IndexMap<(Ustr, Ustr), Subscription>,
    patterns_cache: RefCell<HashMap<Ustr, Vec<Subscription>>>,
    /// Registry of every handler ever seen by `register`/`subscribe`/`register_handler`,
    /// keyed by handler ID — lets `request`/`response` resolve a handler from an opaque
    /// ID alone (§9: "re-architect as opaque handler IDs + a registry owned alongside
    /// the bus").
    handlers: IndexMap<Ustr, ShareableMessageHandler>,
    pending: IndexMap<UUID4, Ustr>,
    next_sequence: u64,
    sent_count: u64,
    req_count: u64,
    res_count: u64,
    pub_count: u64,
}

impl MessageBus {
    /// Creates a new [`MessageBus`] instance.
    #[must_use]
    pub fn new(trader_id: TraderId, instance_id: UUID4, name: Option<String>) -> Self {
        Self {
            trader_id,
            instance_id,
            name: name.unwrap_or_else(|| stringify!(MessageBus).to_owned()),
            endpoints: IndexMap::new(),
            subscriptions: IndexMap::new(),
            patterns_cache: RefCell::new(HashMap::new()),
            handlers: IndexMap::new(),
            pending: IndexMap::new(),
            next_sequence: 0,
            sent_count: 0,
            req_count: 0,
            res_count: 0,
            pub_count: 0,
        }
    }

    /// Returns the registered endpoint addresses.
    #[must_use]
    pub fn endpoints(&self) -> Vec<&str> {
        self.endpoints.keys().map(Ustr::as_str).collect()
    }

    /// Returns whether an endpoint with this name is registered.
    #[must_use]
    pub fn is_registered(&self, endpoint: &str) -> bool {
        self.endpoints.contains_key(&Ustr::from(endpoint))
    }

    /// Returns the handler registered for `endpoint`, if any.
    #[must_use]
    pub fn get_endpoint(&self, endpoint: &str) -> Option<&ShareableMessageHandler> {
        self.endpoints.get(&Ustr::from(endpoint))
    }

    /// Total number of point-to-point sends attempted (delivered or not).
    #[must_use]
    pub const fn sent_count(&self) -> u64 {
        self.sent_count
    }

    /// Total number of `request` calls.
    #[must_use]
    pub const fn req_count(&self) -> u64 {
        self.req_count
    }

    /// Total number of `response` calls that found a pending entry.
    #[must_use]
    pub const fn res_count(&self) -> u64 {
        self.res_count
    }

    /// Total number of `publish` calls.
    #[must_use]
    pub const fn pub_count(&self) -> u64 {
        self.pub_count
    }

    /// Registers `handler` in the bus-level handler registry without binding it to an
    /// endpoint or topic. Required before a `handler_id` passed to [`Self::request`] can
    /// be resolved.
    pub fn register_handler(&mut self, handler: ShareableMessageHandler) {
        self.handlers.insert(handler.id(), handler);
    }

    /// Registers `handler` as the single handler for `endpoint`.
    ///
    /// # Errors
    ///
    /// Returns an error if `endpoint` is already registered to a *different* handler.
    /// Registering the same handler again, or an endpoint after a `deregister`, succeeds.
    pub fn register(&mut self, endpoint: &str, handler: ShareableMessageHandler) -> anyhow::Result<()> {
        let key = Ustr::from(endpoint);
        if let Some(existing) = self.endpoints.get(&key)
            && existing.id() != handler.id()
        {
            anyhow::bail!("Endpoint '{endpoint}' already registered with a different handler");
        }

        self.handlers.insert(handler.id(), handler.clone());
        self.endpoints.insert(key, handler);
        Ok(())
    }

    /// Deregisters the handler for `endpoint`, if any.
    pub fn deregister(&mut self, endpoint: &str) {
        self.endpoints.shift_remove(&Ustr::from(endpoint));
    }

    /// Sends `message` to `endpoint`'s handler. Always increments the `sent` counter; an
    /// unknown endpoint is a silent no-op (§4.2, §7 "Lookup miss").
    pub fn send(&mut self, endpoint: &str, message: &dyn Any) {
        self.sent_count += 1;
        if let Some(handler) = self.endpoints.get(&Ustr::from(endpoint)) {
            handler.0.handle(message);
        }
    }

    /// Subscribes `handler` to `pattern` with the given `priority`. Re-subscribing the
    /// same `(pattern, handler_id)` pair is idempotent.
    ///
    /// # Errors
    ///
    /// Returns an error if `pattern` is empty.
    pub fn subscribe(
        &mut self,
        pattern: &str,
        handler: ShareableMessageHandler,
        priority: u8,
    ) -> anyhow::Result<()> {
        anyhow::ensure!(!pattern.is_empty(), "Subscription pattern must not be empty");

        let pattern = Ustr::from(pattern);
        let key = (pattern, handler.id());

        if self.subscriptions.contains_key(&key) {
            return Ok(());
        }

        let sequence = self.next_sequence;
        self.next_sequence += 1;

        self.handlers.insert(handler.id(), handler.clone());
        let sub = Subscription::new(pattern, handler, priority, sequence);
        self.subscriptions.insert(key, sub);
        self.patterns_cache.borrow_mut().clear();

        Ok(())
    }

    /// Unsubscribes `handler_id` from `pattern`. Unsubscribing a pair that was never
    /// subscribed (or already removed) is a silent no-op (§4.2, §7 "Lookup miss").
    pub fn unsubscribe(&mut self, pattern: &str, handler_id: Ustr) {
        let key = (Ustr::from(pattern), handler_id);
        if self.subscriptions.shift_remove(&key).is_some() {
            self.patterns_cache.borrow_mut().clear();
        }
    }

    /// Returns whether `handler_id` is subscribed to `pattern`.
    #[must_use]
    pub fn is_subscribed(&self, pattern: &str, handler_id: Ustr) -> bool {
        self.subscriptions.contains_key(&(Ustr::from(pattern), handler_id))
    }

    /// Returns every currently-subscribed pattern.
    #[must_use]
    pub fn patterns(&self) -> Vec<&str> {
        self.subscriptions.keys().map(|(p, _)| p.as_str()).collect()
    }

    /// Returns the handlers that would receive a publish to `topic`, ordered by
    /// `(descending priority, ascending subscription sequence)`, each handler appearing
    /// at most once even if more than one of its patterns matches (§4.2, §8 property 2).
    ///
    /// Memoized in `patterns_cache`; any `subscribe`/`unsubscribe` invalidates the whole
    /// cache (§4.2: "safe, since cache is rebuilt lazily").
    #[must_use]
    pub fn matching_subscriptions(&self, topic: &str) -> Vec<Subscription> {
        let topic = Ustr::from(topic);

        if let Some(cached) = self.patterns_cache.borrow().get(&topic) {
            return cached.clone();
        }

        let mut best: HashMap<Ustr, Subscription> = HashMap::new();
        for sub in self.subscriptions.values() {
            if is_matching(topic.as_bytes(), sub.pattern.as_bytes()) {
                best.entry(sub.handler_id)
                    .and_modify(|existing| {
                        if sub < existing {
                            *existing = sub.clone();
                        }
                    })
                    .or_insert_with(|| sub.clone());
            }
        }

        let mut resolved: Vec<Subscription> = best.into_values().collect();
        resolved.sort();

        self.patterns_cache.borrow_mut().insert(topic, resolved.clone());
        resolved
    }

    /// Publishes `message` to every handler subscribed to a pattern matching `topic`, in
    /// delivery order. Always increments the `pub` counter.
    pub fn publish(&mut self, topic: &str, message: &dyn Any) {
        self.pub_count += 1;
        for sub in self.matching_subscriptions(topic) {
            sub.handler.0.handle(message);
        }
    }

    /// Records `pending[request_id] = handler_id`, increments `req`, then sends `message`
    /// to `endpoint`.
    pub fn request(&mut self, endpoint: &str, request_id: UUID4, handler_id: Ustr, message: &dyn Any) {
        self.pending.insert(request_id, handler_id);
        self.req_count += 1;
        self.send(endpoint, message);
    }

    /// Delivers `message` to the handler pending under `correlation_id`, then removes the
    /// entry and increments `res`. Unknown `correlation_id` is a silent no-op (§4.2, §7
    /// "Lookup miss"); this makes a second `response` for the same ID a no-op too (§8
    /// round-trip law).
    pub fn response(&mut self, correlation_id: UUID4, message: &dyn Any) {
        if let Some(handler_id) = self.pending.shift_remove(&correlation_id) {
            self.res_count += 1;
            if let Some(handler) = self.handlers.get(&handler_id) {
                handler.0.handle(message);
            }
        }
    }
}

/// Process-local default `MessageBus`, for components that don't hold their own handle.
thread_local! {
    static DEFAULT_BUS: RefCell<Option<Rc<RefCell<MessageBus>>>> = const { RefCell::new(None) };
}

/// Installs `bus` as this thread's default message bus.
pub fn set_message_bus(bus: Rc<RefCell<MessageBus>>) {
    DEFAULT_BUS.with(|cell| *cell.borrow_mut() = Some(bus));
}

/// Returns this thread's default message bus, creating one for `TRADER-001` if none was
/// installed yet.
#[must_use]
pub fn get_message_bus() -> Rc<RefCell<MessageBus>> {
    DEFAULT_BUS.with(|cell| {
        let mut slot = cell.borrow_mut();
        if slot.is_none() {
            let bus = MessageBus::new(TraderId::new("TRADER-001"), UUID4::new(), None);
            *slot = Some(Rc::new(RefCell::new(bus)));
        }
        slot.as_ref().expect("just initialized").clone()
    })
}

/// Sends `message` to `endpoint` on the thread's default bus.
pub fn send(endpoint: &str, message: &dyn Any) {
    get_message_bus().borrow_mut().send(endpoint, message);
}

/// Publishes `message` to `topic` on the thread's default bus.
pub fn publish(topic: &str, message: &dyn Any) {
    get_message_bus().borrow_mut().publish(topic, message);
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use rstest::rstest;

    use super::*;
    use crate::msgbus::handler::TypedMessageHandler;

    fn recording_handler(id: &str, sink: Rc<RefCell<Vec<String>>>) -> ShareableMessageHandler {
        let tag = id.to_string();
        let handler = TypedMessageHandler::new(
            Some(id),
            move |msg: &String| sink.borrow_mut().push(format!("{tag}:{msg}")),
        );
        ShareableMessageHandler(Rc::new(handler))
    }

    fn bus() -> MessageBus {
        MessageBus::new(TraderId::new("TRADER-001"), UUID4::new(), None)
    }

    #[rstest]
    #[case("*", "*", true)]
    #[case("a", "*", true)]
    #[case("a", "a", true)]
    #[case("a", "b", false)]
    #[case("comp", "comp*", true)]
    #[case("complete", "comp*", true)]
    #[case("computer", "comp*", true)]
    #[case("camp", "c?mp", true)]
    #[case("comp", "c?mp", true)]
    #[case("cmp", "c?mp", false)]
    #[case("champ", "c?mp", false)]
    #[case("cp", "c*p", true)]
    #[case("comp", "c*p", true)]
    #[case("clamp", "c*p", true)]
    #[case("data.quotes.BTCUSDT", "data.*.BTCUSDT", true)]
    #[case("data.quotes.BTCUSDT", "data.quotes.*", true)]
    fn test_is_matching(#[case] topic: &str, #[case] pattern: &str, #[case] expected: bool) {
        assert_eq!(is_matching(topic.as_bytes(), pattern.as_bytes()), expected);
    }

    /// A topic/pattern of 256+ bytes must not panic (previously indexed a fixed 256x256
    /// stack-allocated table).
    #[rstest]
    fn test_is_matching_long_input_does_not_panic() {
        let topic = "a".repeat(300);
        let pattern = format!("{}*", "a".repeat(300));
        assert!(is_matching(topic.as_bytes(), pattern.as_bytes()));

        let mismatched_pattern = "b".repeat(300);
        assert!(!is_matching(topic.as_bytes(), mismatched_pattern.as_bytes()));
    }

    /// Scenario S1: two overlapping-pattern subscribers both fire exactly once.
    #[rstest]
    fn test_scenario_s1_pub_sub_wildcard() {
        let mut bus = bus();
        let sink = Rc::new(RefCell::new(Vec::new()));

        bus.subscribe("data.*.BTCUSDT", recording_handler("A", sink.clone()), 0)
            .unwrap();
        bus.subscribe("data.quotes.*", recording_handler("B", sink.clone()), 0)
            .unwrap();

        bus.publish("data.quotes.BTCUSDT", &"tick".to_string());

        let mut received = sink.borrow().clone();
        received.sort();
        assert_eq!(received, vec!["A:tick".to_string(), "B:tick".to_string()]);
        assert_eq!(bus.pub_count(), 1);
    }

    /// Scenario S2: higher-priority handler fires first.
    #[rstest]
    fn test_scenario_s2_priority_ordering() {
        let mut bus = bus();
        let sink = Rc::new(RefCell::new(Vec::new()));

        bus.subscribe("events.order.X", recording_handler("low", sink.clone()), 5)
            .unwrap();
        bus.subscribe("events.order.X", recording_handler("high", sink.clone()), 9)
            .unwrap();

        bus.publish("events.order.X", &"evt".to_string());

        assert_eq!(*sink.borrow(), vec!["high:evt".to_string(), "low:evt".to_string()]);
    }

    #[rstest]
    fn test_same_priority_breaks_tie_by_registration_order() {
        let mut bus = bus();
        let sink = Rc::new(RefCell::new(Vec::new()));

        bus.subscribe("t", recording_handler("first", sink.clone()), 0)
            .unwrap();
        bus.subscribe("t", recording_handler("second", sink.clone()), 0)
            .unwrap();

        bus.publish("t", &"x".to_string());

        assert_eq!(*sink.borrow(), vec!["first:x".to_string(), "second:x".to_string()]);
    }

    #[rstest]
    fn test_handler_invoked_once_despite_multiple_matching_patterns() {
        let mut bus = bus();
        let sink = Rc::new(RefCell::new(Vec::new()));
        let handler = recording_handler("both", sink.clone());

        bus.subscribe("data.*", handler.clone(), 0).unwrap();
        bus.subscribe("data.quotes.*", handler, 0).unwrap();

        bus.publish("data.quotes.BTCUSDT", &"x".to_string());

        assert_eq!(*sink.borrow(), vec!["both:x".to_string()]);
    }

    #[rstest]
    fn test_subscribe_empty_pattern_errors() {
        let mut bus = bus();
        let sink = Rc::new(RefCell::new(Vec::new()));
        let result = bus.subscribe("", recording_handler("h", sink), 0);
        assert!(result.is_err());
    }

    #[rstest]
    fn test_unsubscribe_unknown_is_silent_no_op() {
        let mut bus = bus();
        bus.unsubscribe("nope", Ustr::from("nobody"));
    }

    /// Round-trip law: subscribe; unsubscribe; subscribe again restores the same state.
    #[rstest]
    fn test_subscribe_unsubscribe_subscribe_round_trip() {
        let mut bus = bus();
        let sink = Rc::new(RefCell::new(Vec::new()));
        let handler = recording_handler("h", sink);
        let handler_id = handler.id();

        bus.subscribe("topic", handler.clone(), 0).unwrap();
        bus.unsubscribe("topic", handler_id);
        bus.subscribe("topic", handler, 0).unwrap();

        assert!(bus.is_subscribed("topic", handler_id));
        assert_eq!(bus.patterns(), vec!["topic"]);
    }

    /// Testable property 5: registering a duplicate endpoint with a distinct handler
    /// raises; deregister then re-register succeeds.
    #[rstest]
    fn test_register_duplicate_endpoint_errors_then_recovers() {
        let mut bus = bus();
        let sink = Rc::new(RefCell::new(Vec::new()));

        bus.register("svc", recording_handler("h1", sink.clone())).unwrap();
        let result = bus.register("svc", recording_handler("h2", sink.clone()));
        assert!(result.is_err());

        bus.deregister("svc");
        bus.register("svc", recording_handler("h2", sink)).unwrap();
        assert!(bus.is_registered("svc"));
    }

    #[rstest]
    fn test_send_to_unknown_endpoint_is_silent_but_counts() {
        let mut bus = bus();
        bus.send("nowhere", &"msg".to_string());
        assert_eq!(bus.sent_count(), 1);
    }

    /// Scenario S4: request/response round trip via correlation ID; a second response for
    /// the same ID is a no-op.
    #[rstest]
    fn test_scenario_s4_request_response() {
        let mut bus = bus();
        let sink = Rc::new(RefCell::new(Vec::new()));
        let handler = recording_handler("H", sink.clone());
        bus.register_handler(handler.clone());
        bus.register("Svc.lookup", recording_handler("endpoint-handler", sink.clone()))
            .unwrap();

        let request_id = UUID4::new();
        bus.request("Svc.lookup", request_id, handler.id(), &"lookup".to_string());
        assert_eq!(bus.req_count(), 1);

        bus.response(request_id, &"result".to_string());
        assert_eq!(bus.res_count(), 1);
        assert!(sink.borrow().contains(&"H:result".to_string()));

        // Second response for the same correlation ID is a silent no-op.
        bus.response(request_id, &"result-again".to_string());
        assert_eq!(bus.res_count(), 1);
    }
}
