use crate::core::{Action, State, StateKind};
use crate::machine::MachineHandle;
use crate::notice::Notice;

/// Inventory exhausted. Every action is reported and ignored.
#[derive(Clone, Copy, Debug, Default)]
pub struct SoldOut;

impl State for SoldOut {
    fn kind(&self) -> StateKind {
        StateKind::SoldOut
    }

    fn insert_payment(&self, machine: &mut MachineHandle<'_>) {
        machine.notify(Notice::SoldOut(Action::InsertPayment));
    }

    fn eject_payment(&self, machine: &mut MachineHandle<'_>) {
        machine.notify(Notice::SoldOut(Action::EjectPayment));
    }

    fn turn_crank(&self, machine: &mut MachineHandle<'_>) {
        machine.notify(Notice::SoldOut(Action::TurnCrank));
    }

    fn dispense(&self, machine: &mut MachineHandle<'_>) {
        machine.notify(Notice::SoldOut(Action::Dispense));
    }
}
