use crate::core::{Action, State, StateKind};
use crate::machine::MachineHandle;
use crate::notice::Notice;

/// Crank turned; one item is released on dispense.
#[derive(Clone, Copy, Debug, Default)]
pub struct OneItemWin;

/// Crank turned on a winning draw; two items are released on dispense.
#[derive(Clone, Copy, Debug, Default)]
pub struct TwoItemWin;

fn release(machine: &mut MachineHandle<'_>, items: u32) {
    for _ in 0..items {
        machine.release_one_item();
    }
    if machine.count() > 0 {
        machine.set_state(StateKind::NoPayment);
    } else {
        machine.set_state(StateKind::SoldOut);
    }
}

macro_rules! committed_actions {
    () => {
        fn insert_payment(&self, machine: &mut MachineHandle<'_>) {
            machine.notify(Notice::AlreadyCommitted(Action::InsertPayment));
        }

        fn eject_payment(&self, machine: &mut MachineHandle<'_>) {
            machine.notify(Notice::CannotEjectNow);
        }

        fn turn_crank(&self, machine: &mut MachineHandle<'_>) {
            machine.notify(Notice::AlreadyCommitted(Action::TurnCrank));
        }
    };
}

impl State for OneItemWin {
    fn kind(&self) -> StateKind {
        StateKind::OneItemWin
    }

    committed_actions!();

    fn dispense(&self, machine: &mut MachineHandle<'_>) {
        release(machine, 1);
    }
}

impl State for TwoItemWin {
    fn kind(&self) -> StateKind {
        StateKind::TwoItemWin
    }

    committed_actions!();

    fn dispense(&self, machine: &mut MachineHandle<'_>) {
        release(machine, 2);
    }
}
