//! The `State` trait implemented by every gumball machine state.
//!
//! A state is one phase of the machine's lifecycle. All states answer the
//! same four actions; what an action does (and which state comes next) is
//! decided by the state that is active when the action arrives.

use crate::machine::MachineHandle;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Discriminant naming one of the five machine states.
///
/// The machine holds exactly one active `StateKind` at any time and uses it
/// to select the matching pre-built state instance.
///
/// # Example
///
/// ```rust
/// use gumball::core::StateKind;
///
/// assert_eq!(StateKind::HasPayment.name(), "HasPayment");
/// assert!(StateKind::SoldOut.is_final());
/// assert!(!StateKind::NoPayment.is_final());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum StateKind {
    /// Waiting for a payment.
    NoPayment,
    /// Payment inserted, crank not turned yet.
    HasPayment,
    /// Crank turned, one item about to be released.
    OneItemWin,
    /// Crank turned on a winning draw, two items about to be released.
    TwoItemWin,
    /// Inventory exhausted. Terminal.
    SoldOut,
}

impl StateKind {
    /// All kinds, in lifecycle order.
    pub const ALL: [StateKind; 5] = [
        StateKind::NoPayment,
        StateKind::HasPayment,
        StateKind::OneItemWin,
        StateKind::TwoItemWin,
        StateKind::SoldOut,
    ];

    /// Name of the state for display and logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::NoPayment => "NoPayment",
            Self::HasPayment => "HasPayment",
            Self::OneItemWin => "OneItemWin",
            Self::TwoItemWin => "TwoItemWin",
            Self::SoldOut => "SoldOut",
        }
    }

    /// Check if this is the terminal state.
    ///
    /// No sequence of actions leads out of a final state.
    pub fn is_final(&self) -> bool {
        matches!(self, Self::SoldOut)
    }

    /// Check if the machine is committed to releasing items.
    pub fn is_dispensing(&self) -> bool {
        matches!(self, Self::OneItemWin | Self::TwoItemWin)
    }
}

impl fmt::Display for StateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An externally triggered action, recorded as the trigger of a transition.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Action {
    /// Customer puts a payment in the slot.
    InsertPayment,
    /// Customer asks for the payment back.
    EjectPayment,
    /// Customer turns the crank.
    TurnCrank,
    /// Machine releases whatever the crank committed to.
    Dispense,
}

impl Action {
    /// Name of the action, matching the machine method it arrives through.
    pub fn name(&self) -> &'static str {
        match self {
            Self::InsertPayment => "insert_payment",
            Self::EjectPayment => "eject_payment",
            Self::TurnCrank => "turn_crank",
            Self::Dispense => "dispense",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Behavior of one machine state.
///
/// Actions never fail. An action that makes no sense in the current state
/// is a no-op that reports a notice through the handle. Transitions are
/// requested with [`MachineHandle::set_state`].
///
/// The handle passed to each action borrows the machine for the duration of
/// the call; states never own or share the machine.
pub trait State: Send + Sync {
    /// The discriminant this state is selected by.
    fn kind(&self) -> StateKind;

    fn insert_payment(&self, machine: &mut MachineHandle<'_>);

    fn eject_payment(&self, machine: &mut MachineHandle<'_>);

    fn turn_crank(&self, machine: &mut MachineHandle<'_>);

    /// Release committed items, if any. Called right after every crank turn.
    fn dispense(&self, machine: &mut MachineHandle<'_>);

    /// Get the state's name for display/logging.
    fn name(&self) -> &'static str {
        self.kind().name()
    }

    /// Check if this is a final (terminal) state.
    fn is_final(&self) -> bool {
        self.kind().is_final()
    }
}

impl fmt::Debug for dyn State + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("State").field(&self.kind()).finish()
    }
}
