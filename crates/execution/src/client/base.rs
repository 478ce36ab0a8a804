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

//! Base execution client functionality: the common event-generation logic shared by
//! every venue-specific [`crate::client::ExecutionClient`] implementation.

use std::{any::Any, cell::RefCell, fmt::Debug, rc::Rc};

use nautilus_common::{
    cache::Cache,
    clock::Clock,
    component::Component,
    enums::{ComponentState, ComponentTrigger},
    msgbus,
};
use nautilus_core::{UUID4, UnixNanos};
use nautilus_model::{
    enums::{AccountType, LiquiditySide, OmsType, OrderSide, OrderType},
    events::{
        AccountState, OrderAccepted, OrderCancelRejected, OrderCanceled, OrderEventAny,
        OrderExpired, OrderFilled, OrderModifyRejected, OrderPendingCancel, OrderPendingUpdate,
        OrderRejected, OrderSubmitted, OrderTriggered, OrderUpdated,
    },
    identifiers::{
        AccountId, ClientId, ClientOrderId, ComponentId, InstrumentId, PositionId, StrategyId,
        TradeId, TraderId, Venue, VenueOrderId,
    },
    types::{AccountBalance, Currency, MarginBalance, Money, Price, Quantity},
};

use crate::{
    client::ExecutionClient,
    reports::{
        fill::FillReport, mass_status::ExecutionMassStatus, order::OrderStatusReport,
        position::PositionStatusReport,
    },
};

/// Publishes account-state and order lifecycle events a venue-specific execution
/// client synthesizes from its own acknowledgements, and routes reconciliation
/// reports to the execution engine.
///
/// `BaseExecutionClient` never mutates order state itself — it only builds the
/// typed event or report and hands it to the message bus for an execution engine to
/// consume. As a [`Component`], it carries its own lifecycle state and publishes
/// `events.system.component.<id>.<state>` on every successful transition.
pub struct BaseExecutionClient {
    pub trader_id: TraderId,
    pub client_id: ClientId,
    pub venue: Venue,
    pub oms_type: OmsType,
    pub account_id: AccountId,
    pub account_type: AccountType,
    pub base_currency: Option<Currency>,
    pub is_connected: bool,
    component_id: ComponentId,
    state: ComponentState,
    clock: Rc<RefCell<dyn Clock>>,
    cache: Rc<RefCell<Cache>>,
}

impl Debug for BaseExecutionClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct(stringify!(BaseExecutionClient))
            .field("client_id", &self.client_id)
            .field("venue", &self.venue)
            .field("account_id", &self.account_id)
            .field("state", &self.state)
            .finish()
    }
}

impl BaseExecutionClient {
    /// Creates a new [`BaseExecutionClient`] instance.
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub fn new(
        trader_id: TraderId,
        client_id: ClientId,
        venue: Venue,
        oms_type: OmsType,
        account_id: AccountId,
        account_type: AccountType,
        base_currency: Option<Currency>,
        clock: Rc<RefCell<dyn Clock>>,
        cache: Rc<RefCell<Cache>>,
    ) -> Self {
        Self {
            trader_id,
            component_id: ComponentId::new(client_id.as_str()),
            client_id,
            venue,
            oms_type,
            account_id,
            account_type,
            base_currency,
            is_connected: false,
            state: ComponentState::PreInitialized,
            clock,
            cache,
        }
    }

    pub const fn set_connected(&mut self, is_connected: bool) {
        self.is_connected = is_connected;
    }

    /// Sets the account ID for this client.
    ///
    /// # Errors
    ///
    /// Returns an error if `account_id`'s issuer does not match this client's `client_id`.
    pub fn set_account_id(&mut self, account_id: AccountId) -> anyhow::Result<()> {
        if account_id.issuer() != self.client_id.as_str() {
            anyhow::bail!(
                "Account ID issuer '{}' does not match client ID '{}'",
                account_id.issuer(),
                self.client_id,
            );
        }
        self.account_id = account_id;
        Ok(())
    }

    /// Generates and publishes an `AccountState` event.
    pub fn generate_account_state(
        &self,
        balances: Vec<AccountBalance>,
        margins: Vec<MarginBalance>,
        reported: bool,
        ts_event: UnixNanos,
    ) {
        let account_state = AccountState::new(
            self.account_id,
            self.account_type,
            balances,
            margins,
            reported,
            UUID4::new(),
            ts_event,
            self.clock.borrow().timestamp_ns(),
            self.base_currency,
        );
        self.send_account_state(account_state);
    }

    pub fn generate_order_submitted(
        &self,
        strategy_id: StrategyId,
        instrument_id: InstrumentId,
        client_order_id: ClientOrderId,
        ts_event: UnixNanos,
    ) {
        let event = OrderSubmitted::new(
            self.trader_id,
            strategy_id,
            instrument_id,
            client_order_id,
            self.account_id,
            UUID4::new(),
            ts_event,
            self.clock.borrow().timestamp_ns(),
        );
        self.send_order_event(OrderEventAny::Submitted(event));
    }

    pub fn generate_order_rejected(
        &self,
        strategy_id: StrategyId,
        instrument_id: InstrumentId,
        client_order_id: ClientOrderId,
        reason: &str,
        ts_event: UnixNanos,
    ) {
        let event = OrderRejected::new(
            self.trader_id,
            strategy_id,
            instrument_id,
            client_order_id,
            self.account_id,
            reason.into(),
            UUID4::new(),
            ts_event,
            self.clock.borrow().timestamp_ns(),
            false,
        );
        self.send_order_event(OrderEventAny::Rejected(event));
    }

    pub fn generate_order_accepted(
        &self,
        strategy_id: StrategyId,
        instrument_id: InstrumentId,
        client_order_id: ClientOrderId,
        venue_order_id: VenueOrderId,
        ts_event: UnixNanos,
    ) {
        let event = OrderAccepted::new(
            self.trader_id,
            strategy_id,
            instrument_id,
            client_order_id,
            venue_order_id,
            self.account_id,
            UUID4::new(),
            ts_event,
            self.clock.borrow().timestamp_ns(),
            false,
        );
        self.send_order_event(OrderEventAny::Accepted(event));
    }

    pub fn generate_order_pending_update(
        &self,
        strategy_id: StrategyId,
        instrument_id: InstrumentId,
        client_order_id: ClientOrderId,
        venue_order_id: VenueOrderId,
        ts_event: UnixNanos,
    ) {
        let event = OrderPendingUpdate::new(
            self.trader_id,
            strategy_id,
            instrument_id,
            client_order_id,
            venue_order_id,
            self.account_id,
            UUID4::new(),
            ts_event,
            self.clock.borrow().timestamp_ns(),
        );
        self.send_order_event(OrderEventAny::PendingUpdate(event));
    }

    pub fn generate_order_pending_cancel(
        &self,
        strategy_id: StrategyId,
        instrument_id: InstrumentId,
        client_order_id: ClientOrderId,
        venue_order_id: VenueOrderId,
        ts_event: UnixNanos,
    ) {
        let event = OrderPendingCancel::new(
            self.trader_id,
            strategy_id,
            instrument_id,
            client_order_id,
            venue_order_id,
            self.account_id,
            UUID4::new(),
            ts_event,
            self.clock.borrow().timestamp_ns(),
        );
        self.send_order_event(OrderEventAny::PendingCancel(event));
    }

    pub fn generate_order_modify_rejected(
        &self,
        strategy_id: StrategyId,
        instrument_id: InstrumentId,
        client_order_id: ClientOrderId,
        venue_order_id: VenueOrderId,
        reason: &str,
        ts_event: UnixNanos,
    ) {
        let event = OrderModifyRejected::new(
            self.trader_id,
            strategy_id,
            instrument_id,
            client_order_id,
            venue_order_id,
            self.account_id,
            reason.into(),
            UUID4::new(),
            ts_event,
            self.clock.borrow().timestamp_ns(),
        );
        self.send_order_event(OrderEventAny::ModifyRejected(event));
    }

    pub fn generate_order_cancel_rejected(
        &self,
        strategy_id: StrategyId,
        instrument_id: InstrumentId,
        client_order_id: ClientOrderId,
        venue_order_id: VenueOrderId,
        reason: &str,
        ts_event: UnixNanos,
    ) {
        let event = OrderCancelRejected::new(
            self.trader_id,
            strategy_id,
            instrument_id,
            client_order_id,
            venue_order_id,
            self.account_id,
            reason.into(),
            UUID4::new(),
            ts_event,
            self.clock.borrow().timestamp_ns(),
        );
        self.send_order_event(OrderEventAny::CancelRejected(event));
    }

    /// Generates and publishes an `OrderUpdated` event.
    ///
    /// # Errors
    ///
    /// Returns an error if `venue_order_id` does not match a venue order ID already
    /// recorded in the cache for `client_order_id` (a reconciliation mismatch).
    #[allow(clippy::too_many_arguments)]
    pub fn generate_order_updated(
        &self,
        strategy_id: StrategyId,
        instrument_id: InstrumentId,
        client_order_id: ClientOrderId,
        venue_order_id: VenueOrderId,
        quantity: Quantity,
        price: Option<Price>,
        trigger_price: Option<Price>,
        ts_event: UnixNanos,
    ) -> anyhow::Result<()> {
        if let Some(existing) = self.cache.borrow().venue_order_id(&client_order_id)
            && *existing != venue_order_id
        {
            anyhow::bail!(
                "Existing venue order ID {existing} for client order ID {client_order_id} \
                 does not match the given {venue_order_id}"
            );
        }

        let event = OrderUpdated::new(
            self.trader_id,
            strategy_id,
            instrument_id,
            client_order_id,
            venue_order_id,
            self.account_id,
            quantity,
            price,
            trigger_price,
            UUID4::new(),
            ts_event,
            self.clock.borrow().timestamp_ns(),
        );

        self.send_order_event(OrderEventAny::Updated(event));
        Ok(())
    }

    pub fn generate_order_canceled(
        &self,
        strategy_id: StrategyId,
        instrument_id: InstrumentId,
        client_order_id: ClientOrderId,
        venue_order_id: VenueOrderId,
        ts_event: UnixNanos,
    ) {
        let event = OrderCanceled::new(
            self.trader_id,
            strategy_id,
            instrument_id,
            client_order_id,
            venue_order_id,
            self.account_id,
            UUID4::new(),
            ts_event,
            self.clock.borrow().timestamp_ns(),
        );

        self.send_order_event(OrderEventAny::Canceled(event));
    }

    pub fn generate_order_triggered(
        &self,
        strategy_id: StrategyId,
        instrument_id: InstrumentId,
        client_order_id: ClientOrderId,
        venue_order_id: VenueOrderId,
        ts_event: UnixNanos,
    ) {
        let event = OrderTriggered::new(
            self.trader_id,
            strategy_id,
            instrument_id,
            client_order_id,
            venue_order_id,
            self.account_id,
            UUID4::new(),
            ts_event,
            self.clock.borrow().timestamp_ns(),
        );

        self.send_order_event(OrderEventAny::Triggered(event));
    }

    pub fn generate_order_expired(
        &self,
        strategy_id: StrategyId,
        instrument_id: InstrumentId,
        client_order_id: ClientOrderId,
        venue_order_id: VenueOrderId,
        ts_event: UnixNanos,
    ) {
        let event = OrderExpired::new(
            self.trader_id,
            strategy_id,
            instrument_id,
            client_order_id,
            venue_order_id,
            self.account_id,
            UUID4::new(),
            ts_event,
            self.clock.borrow().timestamp_ns(),
        );

        self.send_order_event(OrderEventAny::Expired(event));
    }

    #[allow(clippy::too_many_arguments)]
    pub fn generate_order_filled(
        &self,
        strategy_id: StrategyId,
        instrument_id: InstrumentId,
        client_order_id: ClientOrderId,
        venue_order_id: VenueOrderId,
        venue_position_id: Option<PositionId>,
        trade_id: TradeId,
        order_side: OrderSide,
        order_type: OrderType,
        last_qty: Quantity,
        last_px: Price,
        quote_currency: Currency,
        commission: Option<Money>,
        liquidity_side: LiquiditySide,
        ts_event: UnixNanos,
    ) {
        let event = OrderFilled::new(
            self.trader_id,
            strategy_id,
            instrument_id,
            client_order_id,
            venue_order_id,
            self.account_id,
            trade_id,
            venue_position_id,
            order_side,
            order_type,
            last_qty,
            last_px,
            quote_currency,
            commission,
            liquidity_side,
            UUID4::new(),
            ts_event,
            self.clock.borrow().timestamp_ns(),
        );

        self.send_order_event(OrderEventAny::Filled(event));
    }

    /// Generates and routes an order status report to the execution engine for
    /// reconciliation.
    pub fn generate_order_status_report(&self, report: OrderStatusReport) {
        self.send_order_status_report(report);
    }

    /// Generates and routes a fill report to the execution engine for reconciliation.
    pub fn generate_fill_report(&self, report: FillReport) {
        self.send_fill_report(report);
    }

    /// Generates and routes a position status report to the execution engine for
    /// reconciliation.
    pub fn generate_position_status_report(&self, report: PositionStatusReport) {
        self.send_position_report(report);
    }

    /// Generates and routes a consolidated mass status report to the execution engine
    /// for reconciliation.
    pub fn generate_mass_status(&self, report: ExecutionMassStatus) {
        self.send_mass_status_report(report);
    }

    fn send_account_state(&self, account_state: AccountState) {
        msgbus::send("Portfolio.update_account", &account_state as &dyn Any);
    }

    fn send_order_event(&self, event: OrderEventAny) {
        msgbus::send("ExecEngine.process", &event as &dyn Any);
    }

    fn send_mass_status_report(&self, report: ExecutionMassStatus) {
        msgbus::send("ExecEngine.reconcile_mass_status", &report as &dyn Any);
    }

    fn send_order_status_report(&self, report: OrderStatusReport) {
        msgbus::send("ExecEngine.reconcile_report", &report as &dyn Any);
    }

    fn send_fill_report(&self, report: FillReport) {
        msgbus::send("ExecEngine.reconcile_report", &report as &dyn Any);
    }

    fn send_position_report(&self, report: PositionStatusReport) {
        msgbus::send("ExecEngine.reconcile_report", &report as &dyn Any);
    }
}

impl Component for BaseExecutionClient {
    fn component_id(&self) -> ComponentId {
        self.component_id
    }

    fn state(&self) -> ComponentState {
        self.state
    }

    fn transition_state(&mut self, trigger: ComponentTrigger) -> anyhow::Result<()> {
        self.state = self.state.transition(trigger)?;
        msgbus::publish(
            &format!("events.system.component.{}.{}", self.component_id, self.state),
            &self.state as &dyn Any,
        );
        Ok(())
    }
}

impl ExecutionClient for BaseExecutionClient {
    fn client_id(&self) -> ClientId {
        self.client_id
    }

    fn account_id(&self) -> AccountId {
        self.account_id
    }

    fn venue(&self) -> Venue {
        self.venue
    }

    fn oms_type(&self) -> OmsType {
        self.oms_type
    }

    fn is_connected(&self) -> bool {
        self.is_connected
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use nautilus_common::clock::TestClock;
    use nautilus_model::identifiers::{Symbol, TradeId};
    use rstest::{fixture, rstest};
    use rust_decimal::Decimal;

    use super::*;

    #[fixture]
    fn client() -> BaseExecutionClient {
        BaseExecutionClient::new(
            TraderId::new("TRADER-001"),
            ClientId::new("SIM"),
            Venue::new("SIM"),
            OmsType::Netting,
            AccountId::new("SIM-001"),
            AccountType::Margin,
            Some(Currency::new("USD", 2)),
            Rc::new(RefCell::new(TestClock::new())),
            Rc::new(RefCell::new(Cache::new())),
        )
    }

    #[rstest]
    fn test_set_account_id_rejects_mismatched_issuer(mut client: BaseExecutionClient) {
        let result = client.set_account_id(AccountId::new("OTHER-001"));
        assert!(result.is_err());
        assert_eq!(client.account_id, AccountId::new("SIM-001"));
    }

    #[rstest]
    fn test_set_account_id_accepts_matching_issuer(mut client: BaseExecutionClient) {
        client.set_account_id(AccountId::new("SIM-002")).unwrap();
        assert_eq!(client.account_id, AccountId::new("SIM-002"));
    }

    #[rstest]
    fn test_new_client_starts_pre_initialized(client: BaseExecutionClient) {
        assert_eq!(client.state(), ComponentState::PreInitialized);
        assert_eq!(client.component_id(), ComponentId::new("SIM"));
    }

    #[rstest]
    fn test_component_lifecycle_drives_state(mut client: BaseExecutionClient) {
        client.initialize().unwrap();
        assert_eq!(client.state(), ComponentState::Ready);
        client.start().unwrap();
        assert_eq!(client.state(), ComponentState::Running);
        client.stop().unwrap();
        assert_eq!(client.state(), ComponentState::Stopped);
    }

    #[rstest]
    fn test_component_transition_publishes_topic(mut client: BaseExecutionClient) {
        use nautilus_common::msgbus::handler::{ShareableMessageHandler, TypedMessageHandler};

        let bus = Rc::new(RefCell::new(msgbus::MessageBus::new(
            TraderId::new("TRADER-001"),
            UUID4::new(),
            None,
        )));
        msgbus::set_message_bus(bus);

        let received: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = received.clone();
        let handler = ShareableMessageHandler(Rc::new(TypedMessageHandler::new(
            Some("Observer"),
            move |state: &ComponentState| sink.borrow_mut().push(state.to_string()),
        )));
        msgbus::get_message_bus()
            .borrow_mut()
            .subscribe("events.system.component.*", handler, 0)
            .unwrap();

        client.initialize().unwrap();

        assert_eq!(*received.borrow(), vec!["READY".to_string()]);
    }

    #[rstest]
    fn test_generate_order_updated_mismatch_errors(client: BaseExecutionClient) {
        let client_order_id = ClientOrderId::new("O-1");
        client
            .cache
            .borrow_mut()
            .add_venue_order_id(&client_order_id, &VenueOrderId::new("V-1"), false)
            .unwrap();

        let result = client.generate_order_updated(
            StrategyId::new("S-001"),
            InstrumentId::new(Symbol::new("AUD/USD"), Venue::new("SIM")),
            client_order_id,
            VenueOrderId::new("V-2"),
            Quantity::new(Decimal::from(100)),
            None,
            None,
            UnixNanos::default(),
        );

        assert!(result.is_err());
    }

    #[rstest]
    fn test_generate_order_updated_matching_venue_order_id_succeeds(client: BaseExecutionClient) {
        let client_order_id = ClientOrderId::new("O-1");
        client
            .cache
            .borrow_mut()
            .add_venue_order_id(&client_order_id, &VenueOrderId::new("V-1"), false)
            .unwrap();

        let result = client.generate_order_updated(
            StrategyId::new("S-001"),
            InstrumentId::new(Symbol::new("AUD/USD"), Venue::new("SIM")),
            client_order_id,
            VenueOrderId::new("V-1"),
            Quantity::new(Decimal::from(100)),
            None,
            None,
            UnixNanos::default(),
        );

        assert!(result.is_ok());
    }

    #[rstest]
    fn test_generate_order_updated_unknown_client_order_id_succeeds(client: BaseExecutionClient) {
        let result = client.generate_order_updated(
            StrategyId::new("S-001"),
            InstrumentId::new(Symbol::new("AUD/USD"), Venue::new("SIM")),
            ClientOrderId::new("O-unknown"),
            VenueOrderId::new("V-1"),
            Quantity::new(Decimal::from(100)),
            None,
            None,
            UnixNanos::default(),
        );

        assert!(result.is_ok());
    }

    /// Scenario S5: a fill event reaches `ExecEngine.process` with matching ids and
    /// `ts_init >= ts_event`.
    #[rstest]
    fn test_scenario_s5_execution_client_fill_reaches_exec_engine(client: BaseExecutionClient) {
        use nautilus_common::msgbus::handler::{ShareableMessageHandler, TypedMessageHandler};

        let bus = Rc::new(RefCell::new(msgbus::MessageBus::new(
            TraderId::new("TRADER-001"),
            UUID4::new(),
            None,
        )));
        msgbus::set_message_bus(bus);

        let received: Rc<RefCell<Option<OrderEventAny>>> = Rc::new(RefCell::new(None));
        let sink = received.clone();
        let handler = ShareableMessageHandler(Rc::new(TypedMessageHandler::new(
            Some("ExecEngine"),
            move |event: &OrderEventAny| *sink.borrow_mut() = Some(*event),
        )));
        msgbus::get_message_bus()
            .borrow_mut()
            .register("ExecEngine.process", handler)
            .unwrap();

        let trade_id = TradeId::new("T-1");
        client.generate_order_filled(
            StrategyId::new("S-001"),
            InstrumentId::new(Symbol::new("AUD/USD"), Venue::new("SIM")),
            ClientOrderId::new("O-1"),
            VenueOrderId::new("V-1"),
            Some(PositionId::new("P-1")),
            trade_id,
            OrderSide::Buy,
            OrderType::Market,
            Quantity::new(Decimal::from(100)),
            Price::new(Decimal::from(1)),
            Currency::new("USD", 2),
            None,
            LiquiditySide::Taker,
            UnixNanos::from(5),
        );

        let event = received.borrow_mut().take().expect("handler should have fired");
        let OrderEventAny::Filled(filled) = event else {
            panic!("expected a Filled event");
        };
        assert_eq!(filled.client_order_id, ClientOrderId::new("O-1"));
        assert_eq!(filled.account_id, client.account_id);
        assert_eq!(filled.trade_id, trade_id);
        assert!(filled.ts_init >= filled.ts_event);
    }

    #[rstest]
    fn test_generate_order_filled_does_not_panic(client: BaseExecutionClient) {
        client.generate_order_filled(
            StrategyId::new("S-001"),
            InstrumentId::new(Symbol::new("AUD/USD"), Venue::new("SIM")),
            ClientOrderId::new("O-1"),
            VenueOrderId::new("V-1"),
            Some(PositionId::new("P-1")),
            TradeId::new("T-1"),
            OrderSide::Buy,
            OrderType::Market,
            Quantity::new(Decimal::from(100)),
            Price::new(Decimal::from(1)),
            Currency::new("USD", 2),
            None,
            LiquiditySide::Taker,
            UnixNanos::default(),
        );
    }
}
