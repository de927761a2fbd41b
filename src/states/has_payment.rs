use crate::core::{Guard, State, StateKind};
use crate::machine::MachineHandle;
use crate::notice::Notice;

/// Default number of sides on the crank's draw. One draw in ten wins.
pub const DEFAULT_WIN_ODDS: u8 = 10;

/// Payment inserted, waiting for the crank.
///
/// Turning the crank draws a value in `[0, odds)`. A zero draw wins two
/// items when the double-win guard passes; every other outcome falls back
/// to a single item when the single-win guard passes.
#[derive(Debug)]
pub struct HasPayment {
    odds: u8,
    double_win: Guard,
    single_win: Guard,
}

impl HasPayment {
    /// Callers validate `odds` first: the builder and checkpoint resume both
    /// reject zero. A zero that slips through is treated as one.
    pub(crate) fn new(odds: u8) -> Self {
        Self {
            odds: odds.max(1),
            double_win: Guard::at_least("double win", 2),
            single_win: Guard::at_least("single win", 1),
        }
    }

    pub fn odds(&self) -> u8 {
        self.odds
    }
}

impl Default for HasPayment {
    fn default() -> Self {
        Self::new(DEFAULT_WIN_ODDS)
    }
}

impl State for HasPayment {
    fn kind(&self) -> StateKind {
        StateKind::HasPayment
    }

    fn insert_payment(&self, machine: &mut MachineHandle<'_>) {
        machine.notify(Notice::PaymentAlreadyInserted);
    }

    fn eject_payment(&self, machine: &mut MachineHandle<'_>) {
        machine.notify(Notice::PaymentReturned);
        machine.set_state(StateKind::NoPayment);
    }

    fn turn_crank(&self, machine: &mut MachineHandle<'_>) {
        let draw = machine.spin(self.odds);
        let count = machine.count();
        tracing::debug!(draw, odds = self.odds, count, "crank turned");

        if draw == 0 && self.double_win.check(count) {
            machine.notify(Notice::DoubleWin);
            machine.set_state(StateKind::TwoItemWin);
        } else if self.single_win.check(count) {
            machine.notify(Notice::SingleWin);
            machine.set_state(StateKind::OneItemWin);
        } else {
            tracing::warn!(
                guard = self.single_win.label(),
                "payment taken with an empty inventory"
            );
            machine.notify(Notice::NothingToDispense);
            machine.notify(Notice::PaymentReturned);
            machine.set_state(StateKind::SoldOut);
        }
    }

    fn dispense(&self, machine: &mut MachineHandle<'_>) {
        machine.notify(Notice::TurnCrankFirst);
    }
}
