//! The gumball machine: the context whose behavior depends on its state.
//!
//! [`GumballMachine`] owns the inventory, the five pre-built states and the
//! active state's discriminant. Every action is delegated to the active
//! state, which calls back into the machine through a [`MachineHandle`].

mod builder;
mod error;

pub use builder::GumballMachineBuilder;
pub use error::BuildError;

use crate::checkpoint::Checkpoint;
use crate::core::{Action, State, StateHistory, StateKind, StateTransition};
use crate::notice::{Notice, NoticeSink};
use crate::spinner::Spinner;
use crate::states::{HasPayment, NoPayment, OneItemWin, SoldOut, StateSet, TwoItemWin};
use chrono::Utc;
use std::fmt;

/// Mutable part of the machine, reachable from states through the handle.
struct Context {
    inventory: u32,
    current: StateKind,
    spinner: Box<dyn Spinner>,
    sink: Box<dyn NoticeSink>,
    history: StateHistory,
    trigger: Option<Action>,
}

/// Borrowed view of a machine handed to a state while it runs an action.
///
/// The handle lets a state read the inventory, release items, draw from
/// the spinner, report notices and request transitions. It lives only for
/// the duration of one action.
pub struct MachineHandle<'a> {
    states: &'a StateSet,
    ctx: &'a mut Context,
}

impl<'a> MachineHandle<'a> {
    /// Items left in the machine.
    pub fn count(&self) -> u32 {
        self.ctx.inventory
    }

    /// The active state.
    pub fn state(&self) -> StateKind {
        self.ctx.current
    }

    /// Make `next` the active state.
    pub fn set_state(&mut self, next: StateKind) {
        let from = self.ctx.current;
        tracing::debug!(
            from = from.name(),
            to = next.name(),
            trigger = self.ctx.trigger.map(|a| a.name()),
            inventory = self.ctx.inventory,
            "state transition"
        );
        self.ctx.history.push(StateTransition {
            from,
            to: next,
            trigger: self.ctx.trigger,
            inventory: self.ctx.inventory,
            timestamp: Utc::now(),
        });
        self.ctx.current = next;
    }

    /// Release one item from the slot.
    ///
    /// The release notice is reported even when the machine is empty; the
    /// inventory never drops below zero.
    pub fn release_one_item(&mut self) {
        self.notify(Notice::ItemReleased);
        if self.ctx.inventory > 0 {
            self.ctx.inventory -= 1;
        }
    }

    /// Draw a value in `[0, sides)` from the machine's spinner.
    pub fn spin(&mut self, sides: u8) -> u8 {
        self.ctx.spinner.spin(sides)
    }

    pub fn notify(&mut self, notice: Notice) {
        self.ctx.sink.notify(notice);
    }

    /// Deliver `insert_payment` to the active state.
    pub fn insert_payment(&mut self) {
        self.dispatch(Action::InsertPayment);
    }

    /// Deliver `eject_payment` to the active state.
    pub fn eject_payment(&mut self) {
        self.dispatch(Action::EjectPayment);
    }

    /// Deliver `turn_crank` to the active state.
    pub fn turn_crank(&mut self) {
        self.dispatch(Action::TurnCrank);
    }

    /// Deliver `dispense` to the active state.
    pub fn dispense(&mut self) {
        self.dispatch(Action::Dispense);
    }

    fn dispatch(&mut self, action: Action) {
        let states = self.states;
        let state = states.get(self.ctx.current);
        // Nested dispatches restore the outer trigger when they return.
        let outer = self.ctx.trigger.replace(action);
        match action {
            Action::InsertPayment => state.insert_payment(self),
            Action::EjectPayment => state.eject_payment(self),
            Action::TurnCrank => state.turn_crank(self),
            Action::Dispense => state.dispense(self),
        }
        self.ctx.trigger = outer;
    }
}

/// A gumball machine.
///
/// # Example
///
/// ```rust
/// use gumball::core::StateKind;
/// use gumball::machine::GumballMachine;
/// use gumball::spinner::ScriptedSpinner;
///
/// let mut machine = GumballMachine::builder()
///     .inventory(2)
///     .spinner(ScriptedSpinner::never_wins())
///     .build()
///     .unwrap();
///
/// machine.insert_payment();
/// machine.turn_crank();
///
/// assert_eq!(machine.count(), 1);
/// assert_eq!(machine.state(), StateKind::NoPayment);
/// ```
pub struct GumballMachine {
    states: StateSet,
    ctx: Context,
}

impl GumballMachine {
    /// Machine holding `count` items, with an entropy-seeded spinner and
    /// notices reported through `tracing`.
    ///
    /// An empty machine starts sold out.
    pub fn new(count: u32) -> Self {
        GumballMachineBuilder::new().inventory(count).assemble()
    }

    pub fn builder() -> GumballMachineBuilder {
        GumballMachineBuilder::new()
    }

    fn from_parts(
        states: StateSet,
        inventory: u32,
        current: StateKind,
        history: StateHistory,
        spinner: Box<dyn Spinner>,
        sink: Box<dyn NoticeSink>,
    ) -> Self {
        Self {
            states,
            ctx: Context {
                inventory,
                current,
                spinner,
                sink,
                history,
                trigger: None,
            },
        }
    }

    fn handle(&mut self) -> MachineHandle<'_> {
        MachineHandle {
            states: &self.states,
            ctx: &mut self.ctx,
        }
    }

    pub fn insert_payment(&mut self) {
        self.handle().insert_payment();
    }

    pub fn eject_payment(&mut self) {
        self.handle().eject_payment();
    }

    /// Turn the crank, then dispense.
    ///
    /// `dispense` goes to the state that is active *after* the turn, so a
    /// winning turn releases its items within this same call.
    pub fn turn_crank(&mut self) {
        let mut machine = self.handle();
        machine.turn_crank();
        machine.dispense();
    }

    /// Release one item, reporting the release even when the machine is empty.
    pub fn release_one_item(&mut self) {
        self.handle().release_one_item();
    }

    /// Make `kind` the active state without any validation.
    pub fn set_state(&mut self, kind: StateKind) {
        self.handle().set_state(kind);
    }

    /// Items left in the machine.
    pub fn count(&self) -> u32 {
        self.ctx.inventory
    }

    /// Discriminant of the active state.
    pub fn state(&self) -> StateKind {
        self.ctx.current
    }

    /// The active state instance.
    pub fn current_state(&self) -> &dyn State {
        self.states.get(self.ctx.current)
    }

    pub fn is_sold_out(&self) -> bool {
        self.ctx.current.is_final()
    }

    pub fn no_payment_state(&self) -> &NoPayment {
        &self.states.no_payment
    }

    pub fn has_payment_state(&self) -> &HasPayment {
        &self.states.has_payment
    }

    pub fn one_item_win_state(&self) -> &OneItemWin {
        &self.states.one_item_win
    }

    pub fn two_item_win_state(&self) -> &TwoItemWin {
        &self.states.two_item_win
    }

    pub fn sold_out_state(&self) -> &SoldOut {
        &self.states.sold_out
    }

    /// Sides of the crank's draw; a zero draw is a winning draw.
    pub fn win_odds(&self) -> u8 {
        self.states.has_payment.odds()
    }

    /// Every transition since the machine was built (or resumed).
    pub fn history(&self) -> &StateHistory {
        &self.ctx.history
    }

    /// Capture a serializable snapshot of this machine.
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint::capture(self)
    }

    #[cfg(test)]
    pub(crate) fn dispatch(&mut self, action: Action) {
        self.handle().dispatch(action);
    }

    #[cfg(test)]
    pub(crate) fn set_count_for_test(&mut self, count: u32) {
        self.ctx.inventory = count;
    }
}

impl fmt::Debug for GumballMachine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GumballMachine")
            .field("inventory", &self.ctx.inventory)
            .field("state", &self.ctx.current)
            .field("win_odds", &self.win_odds())
            .field("transitions", &self.ctx.history.transitions().len())
            .finish()
    }
}

impl fmt::Display for GumballMachine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Gumball machine: {} item{} left ({})",
            self.ctx.inventory,
            if self.ctx.inventory == 1 { "" } else { "s" },
            self.ctx.current
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notice::RecordingSink;
    use crate::spinner::ScriptedSpinner;

    fn machine(count: u32, spinner: ScriptedSpinner) -> (GumballMachine, RecordingSink) {
        let sink = RecordingSink::new();
        let machine = GumballMachine::builder()
            .inventory(count)
            .spinner(spinner)
            .sink(sink.clone())
            .build()
            .unwrap();
        (machine, sink)
    }

    #[test]
    fn initial_state_follows_inventory() {
        assert_eq!(GumballMachine::new(5).state(), StateKind::NoPayment);
        assert_eq!(GumballMachine::new(1).state(), StateKind::NoPayment);
        assert_eq!(GumballMachine::new(0).state(), StateKind::SoldOut);
        assert!(GumballMachine::new(0).is_sold_out());
    }

    #[test]
    fn turn_crank_dispenses_against_post_turn_state() {
        let (mut machine, sink) = machine(2, ScriptedSpinner::never_wins());
        machine.insert_payment();
        machine.turn_crank();

        assert_eq!(machine.count(), 1);
        assert_eq!(machine.state(), StateKind::NoPayment);
        assert_eq!(
            sink.notices(),
            vec![
                Notice::PaymentAccepted,
                Notice::SingleWin,
                Notice::ItemReleased
            ]
        );
        let triggers: Vec<_> = machine
            .history()
            .transitions()
            .iter()
            .map(|t| (t.to, t.trigger))
            .collect();
        assert_eq!(
            triggers,
            vec![
                (StateKind::HasPayment, Some(Action::InsertPayment)),
                (StateKind::OneItemWin, Some(Action::TurnCrank)),
                (StateKind::NoPayment, Some(Action::Dispense)),
            ]
        );
    }

    #[test]
    fn release_one_item_reports_even_when_empty() {
        let (mut machine, sink) = machine(1, ScriptedSpinner::never_wins());
        machine.release_one_item();
        machine.release_one_item();

        assert_eq!(machine.count(), 0);
        assert_eq!(sink.count(Notice::ItemReleased), 2);
    }

    #[test]
    fn set_state_is_recorded_without_trigger() {
        let (mut machine, _sink) = machine(3, ScriptedSpinner::never_wins());
        machine.set_state(StateKind::HasPayment);

        assert_eq!(machine.state(), StateKind::HasPayment);
        assert_eq!(machine.current_state().kind(), StateKind::HasPayment);
        let last = machine.history().last().unwrap();
        assert_eq!(last.from, StateKind::NoPayment);
        assert_eq!(last.trigger, None);
    }

    #[test]
    fn nested_eject_records_its_own_trigger() {
        let (mut machine, _sink) = machine(2, ScriptedSpinner::never_wins());
        machine.set_count_for_test(0);
        machine.insert_payment();

        let triggers: Vec<_> = machine
            .history()
            .transitions()
            .iter()
            .map(|t| t.trigger)
            .collect();
        assert_eq!(
            triggers,
            vec![
                Some(Action::InsertPayment),
                Some(Action::EjectPayment),
                Some(Action::InsertPayment),
            ]
        );
        assert_eq!(machine.state(), StateKind::SoldOut);
    }

    #[test]
    fn accessors_expose_each_state_instance() {
        let (machine, _sink) = machine(3, ScriptedSpinner::never_wins());
        assert_eq!(machine.no_payment_state().kind(), StateKind::NoPayment);
        assert_eq!(machine.has_payment_state().kind(), StateKind::HasPayment);
        assert_eq!(machine.one_item_win_state().kind(), StateKind::OneItemWin);
        assert_eq!(machine.two_item_win_state().kind(), StateKind::TwoItemWin);
        assert_eq!(machine.sold_out_state().kind(), StateKind::SoldOut);
    }

    #[test]
    fn display_summarizes_machine() {
        let (mut machine, _sink) = machine(2, ScriptedSpinner::never_wins());
        assert_eq!(
            machine.to_string(),
            "Gumball machine: 2 items left (NoPayment)"
        );
        machine.insert_payment();
        machine.turn_crank();
        assert_eq!(
            machine.to_string(),
            "Gumball machine: 1 item left (NoPayment)"
        );
    }

    #[test]
    fn machine_is_send() {
        fn assert_send<T: Send>() {}
        assert_send::<GumballMachine>();
    }
}
