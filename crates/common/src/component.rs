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

//! The lifecycle state machine shared by every runtime component, and a registry that
//! lets the rest of the system reach a registered component by ID without owning it.

use std::{cell::RefCell, rc::Rc};

use indexmap::IndexMap;
use nautilus_model::identifiers::ComponentId;

use crate::enums::{ComponentState, ComponentTrigger};

impl ComponentState {
    /// Applies `trigger` to the current state, returning the resulting state.
    ///
    /// Only the transitions below are legal; any other `(state, trigger)` pair leaves the
    /// state unchanged (the caller receives an error and does not apply the result).
    ///
    /// # Errors
    ///
    /// Returns an error if `trigger` is not valid for the current state.
    pub fn transition(&self, trigger: ComponentTrigger) -> anyhow::Result<Self> {
        use ComponentState::{
            Degraded, Degrading, Disposed, Disposing, Faulted, Faulting, PreInitialized, Ready,
            Resetting, Resuming, Running, Starting, Stopped, Stopping,
        };
        use ComponentTrigger::{
            DegradeCompleted, Dispose, DisposeCompleted, FaultCompleted, Initialize, Reset,
            ResetCompleted, Resume, ResumeCompleted, Start, StartCompleted, Stop, StopCompleted,
            Degrade, Fault,
        };

        let next = match (*self, trigger) {
            (PreInitialized, Initialize) => Ready,
            (Ready, Start) => Starting,
            (Starting, StartCompleted) => Running,
            (Running, Stop) => Stopping,
            (Stopping, StopCompleted) => Stopped,
            (Stopped, Resume) => Resuming,
            (Resuming, ResumeCompleted) => Running,
            (Stopped | Degraded, Reset) => Resetting,
            (Resetting, ResetCompleted) => Ready,
            (Running, Degrade) => Degrading,
            (Degrading, DegradeCompleted) => Degraded,
            (Disposing, DisposeCompleted) => Disposed,
            (Faulting, FaultCompleted) => Faulted,
            (state, Dispose) if state != Disposed && state != Faulted => Disposing,
            (state, Fault) if state != Disposed && state != Faulted => Faulting,
            (state, trigger) => anyhow::bail!("Invalid state trigger {state} -> {trigger}"),
        };

        Ok(next)
    }
}

/// A reusable lifecycle base implemented by every runtime component (client, engine,
/// strategy). Owns a `ComponentState` and drives it through the table in
/// [`ComponentState::transition`], publishing a topic on each successful transition.
pub trait Component: std::fmt::Debug {
    /// Returns this component's unique identifier.
    fn component_id(&self) -> ComponentId;

    /// Returns the current lifecycle state.
    fn state(&self) -> ComponentState;

    /// Applies `trigger`, then publishes `events.system.component.<id>.<new_state>`.
    ///
    /// # Errors
    ///
    /// Returns an error if `trigger` is illegal for the current state; the state is left
    /// unchanged in that case.
    fn transition_state(&mut self, trigger: ComponentTrigger) -> anyhow::Result<()>;

    #[must_use]
    fn is_ready(&self) -> bool {
        self.state() == ComponentState::Ready
    }

    #[must_use]
    fn is_running(&self) -> bool {
        self.state() == ComponentState::Running
    }

    #[must_use]
    fn is_stopped(&self) -> bool {
        self.state() == ComponentState::Stopped
    }

    #[must_use]
    fn is_degraded(&self) -> bool {
        self.state() == ComponentState::Degraded
    }

    #[must_use]
    fn is_faulted(&self) -> bool {
        self.state() == ComponentState::Faulted
    }

    #[must_use]
    fn is_disposed(&self) -> bool {
        self.state() == ComponentState::Disposed
    }

    /// Hook run while transitioning `Ready -> Starting -> Running`. Default: no-op.
    fn on_start(&mut self) -> anyhow::Result<()> {
        log::warn!("{}: on_start not implemented, using default", self.component_id());
        Ok(())
    }

    /// Hook run while transitioning `Running -> Stopping -> Stopped`. Default: no-op.
    fn on_stop(&mut self) -> anyhow::Result<()> {
        log::warn!("{}: on_stop not implemented, using default", self.component_id());
        Ok(())
    }

    /// Hook run while transitioning `Stopped -> Resuming -> Running`. Default: no-op.
    fn on_resume(&mut self) -> anyhow::Result<()> {
        log::warn!("{}: on_resume not implemented, using default", self.component_id());
        Ok(())
    }

    /// Hook run while transitioning `Stopped/Degraded -> Resetting -> Ready`. Default: no-op.
    fn on_reset(&mut self) -> anyhow::Result<()> {
        log::warn!("{}: on_reset not implemented, using default", self.component_id());
        Ok(())
    }

    /// Hook run while transitioning `-> Disposing -> Disposed`. Default: no-op.
    fn on_dispose(&mut self) -> anyhow::Result<()> {
        Ok(())
    }

    /// Hook run while transitioning `Running -> Degrading -> Degraded`. Default: no-op.
    fn on_degrade(&mut self) -> anyhow::Result<()> {
        Ok(())
    }

    /// Hook run while transitioning `-> Faulting -> Faulted`. Default: no-op.
    fn on_fault(&mut self) -> anyhow::Result<()> {
        Ok(())
    }

    /// Runs `Initialize`, taking the component from `PreInitialized` to `Ready`.
    ///
    /// # Errors
    ///
    /// Returns an error if the component is not currently `PreInitialized`.
    fn initialize(&mut self) -> anyhow::Result<()> {
        self.transition_state(ComponentTrigger::Initialize)
    }

    /// Starts the component: `Ready -> Starting -> [on_start] -> Running`.
    ///
    /// # Errors
    ///
    /// Returns an error if the component is not currently `Ready`, or if `on_start` fails
    /// (the component is left in `Starting` in that case).
    fn start(&mut self) -> anyhow::Result<()> {
        self.transition_state(ComponentTrigger::Start)?;
        self.on_start()?;
        self.transition_state(ComponentTrigger::StartCompleted)
    }

    /// Stops the component: `Running -> Stopping -> [on_stop] -> Stopped`.
    ///
    /// # Errors
    ///
    /// Returns an error if the component is not currently `Running`, or if `on_stop` fails.
    fn stop(&mut self) -> anyhow::Result<()> {
        self.transition_state(ComponentTrigger::Stop)?;
        self.on_stop()?;
        self.transition_state(ComponentTrigger::StopCompleted)
    }

    /// Resumes the component: `Stopped -> Resuming -> [on_resume] -> Running`.
    ///
    /// # Errors
    ///
    /// Returns an error if the component is not currently `Stopped`, or if `on_resume` fails.
    fn resume(&mut self) -> anyhow::Result<()> {
        self.transition_state(ComponentTrigger::Resume)?;
        self.on_resume()?;
        self.transition_state(ComponentTrigger::ResumeCompleted)
    }

    /// Resets the component: `Stopped/Degraded -> Resetting -> [on_reset] -> Ready`.
    ///
    /// # Errors
    ///
    /// Returns an error if the component is not currently `Stopped` or `Degraded`, or if
    /// `on_reset` fails.
    fn reset(&mut self) -> anyhow::Result<()> {
        self.transition_state(ComponentTrigger::Reset)?;
        self.on_reset()?;
        self.transition_state(ComponentTrigger::ResetCompleted)
    }

    /// Disposes the component: `<non-terminal> -> Disposing -> [on_dispose] -> Disposed`.
    ///
    /// # Errors
    ///
    /// Returns an error if the component is already `Disposed` or `Faulted`, or if
    /// `on_dispose` fails.
    fn dispose(&mut self) -> anyhow::Result<()> {
        self.transition_state(ComponentTrigger::Dispose)?;
        self.on_dispose()?;
        self.transition_state(ComponentTrigger::DisposeCompleted)
    }

    /// Degrades the component: `Running -> Degrading -> [on_degrade] -> Degraded`.
    ///
    /// # Errors
    ///
    /// Returns an error if the component is not currently `Running`, or if `on_degrade` fails.
    fn degrade(&mut self) -> anyhow::Result<()> {
        self.transition_state(ComponentTrigger::Degrade)?;
        self.on_degrade()?;
        self.transition_state(ComponentTrigger::DegradeCompleted)
    }

    /// Faults the component: `<any> -> Faulting -> [on_fault] -> Faulted`.
    ///
    /// # Errors
    ///
    /// Returns an error if the component is already `Disposed` or `Faulted`, or if
    /// `on_fault` fails.
    fn fault(&mut self) -> anyhow::Result<()> {
        self.transition_state(ComponentTrigger::Fault)?;
        self.on_fault()?;
        self.transition_state(ComponentTrigger::FaultCompleted)
    }
}

thread_local! {
    /// Process-local registry of components, reachable by ID without the caller owning them.
    ///
    /// `Rc<RefCell<dyn Component>>` gives every holder a non-owning handle to the same
    /// component: the bus/dispatch loop can look a component up by ID and call lifecycle
    /// methods on it without participating in an ownership cycle (§9: "component holds a
    /// non-owning bus handle; bus holds handler IDs, not components").
    static COMPONENT_REGISTRY: RefCell<IndexMap<ComponentId, Rc<RefCell<dyn Component>>>> =
        RefCell::new(IndexMap::new());
}

/// Registers `component` under its own `component_id`, making it reachable via
/// [`get_component`]. Replaces any previously registered component under the same ID.
pub fn register_component(component: Rc<RefCell<dyn Component>>) {
    let component_id = component.borrow().component_id();
    COMPONENT_REGISTRY.with(|registry| {
        registry.borrow_mut().insert(component_id, component);
    });
}

/// Removes the component registered under `component_id`, if any.
pub fn deregister_component(component_id: &ComponentId) {
    COMPONENT_REGISTRY.with(|registry| {
        registry.borrow_mut().shift_remove(component_id);
    });
}

/// Returns the component registered under `component_id`, if any.
#[must_use]
pub fn get_component(component_id: &ComponentId) -> Option<Rc<RefCell<dyn Component>>> {
    COMPONENT_REGISTRY.with(|registry| registry.borrow().get(component_id).cloned())
}

/// A thin, cloneable handle into the thread-local component registry.
///
/// Exists mainly so a crate that wants a concrete type to hold (rather than calling the
/// free functions above directly) has one; it owns nothing, it only looks things up.
#[derive(Debug, Default, Clone, Copy)]
pub struct ComponentRegistry;

impl ComponentRegistry {
    /// Registers `component`, replacing any previous registration under the same ID.
    pub fn register(&self, component: Rc<RefCell<dyn Component>>) {
        register_component(component);
    }

    /// Deregisters the component under `component_id`, if any.
    pub fn deregister(&self, component_id: &ComponentId) {
        deregister_component(component_id);
    }

    /// Returns the component registered under `component_id`, if any.
    #[must_use]
    pub fn get(&self, component_id: &ComponentId) -> Option<Rc<RefCell<dyn Component>>> {
        get_component(component_id)
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[derive(Debug)]
    struct Stub {
        id: ComponentId,
        state: ComponentState,
    }

    impl Component for Stub {
        fn component_id(&self) -> ComponentId {
            self.id
        }

        fn state(&self) -> ComponentState {
            self.state
        }

        fn transition_state(&mut self, trigger: ComponentTrigger) -> anyhow::Result<()> {
            self.state = self.state.transition(trigger)?;
            Ok(())
        }
    }

    fn stub() -> Stub {
        Stub {
            id: ComponentId::new("Stub-001"),
            state: ComponentState::PreInitialized,
        }
    }

    #[rstest]
    fn test_full_happy_path_lifecycle() {
        let mut c = stub();
        c.initialize().unwrap();
        assert_eq!(c.state(), ComponentState::Ready);
        c.start().unwrap();
        assert_eq!(c.state(), ComponentState::Running);
        c.stop().unwrap();
        assert_eq!(c.state(), ComponentState::Stopped);
        c.resume().unwrap();
        assert_eq!(c.state(), ComponentState::Running);
        c.stop().unwrap();
        c.reset().unwrap();
        assert_eq!(c.state(), ComponentState::Ready);
        c.dispose().unwrap();
        assert_eq!(c.state(), ComponentState::Disposed);
    }

    #[rstest]
    fn test_degrade_then_reset_from_degraded() {
        let mut c = stub();
        c.initialize().unwrap();
        c.start().unwrap();
        c.degrade().unwrap();
        assert_eq!(c.state(), ComponentState::Degraded);
        c.reset().unwrap();
        assert_eq!(c.state(), ComponentState::Ready);
    }

    #[rstest]
    fn test_fault_from_any_non_terminal_state() {
        let mut c = stub();
        c.initialize().unwrap();
        c.start().unwrap();
        c.fault().unwrap();
        assert_eq!(c.state(), ComponentState::Faulted);
    }

    /// Reproduces scenario S6: an illegal trigger leaves state unchanged and raises, and
    /// the component can still be driven onward afterward.
    #[rstest]
    fn test_scenario_s6_illegal_trigger_then_recovery() {
        let mut c = stub();
        c.initialize().unwrap();
        c.start().unwrap();
        c.stop().unwrap();
        assert_eq!(c.state(), ComponentState::Stopped);

        let result = c.transition_state(ComponentTrigger::Start);
        assert!(result.is_err());
        assert_eq!(c.state(), ComponentState::Stopped);

        c.transition_state(ComponentTrigger::Reset).unwrap();
        assert_eq!(c.state(), ComponentState::Resetting);
        c.transition_state(ComponentTrigger::ResetCompleted).unwrap();
        assert_eq!(c.state(), ComponentState::Ready);
        c.transition_state(ComponentTrigger::Start).unwrap();
        assert_eq!(c.state(), ComponentState::Starting);
    }

    #[rstest]
    fn test_registry_register_and_get() {
        let component: Rc<RefCell<dyn Component>> = Rc::new(RefCell::new(stub()));
        let id = component.borrow().component_id();

        register_component(component);
        let looked_up = get_component(&id).unwrap();
        assert_eq!(looked_up.borrow().component_id(), id);

        deregister_component(&id);
        assert!(get_component(&id).is_none());
    }
}
