//! The five machine states.
//!
//! Each state is built once, when the machine is built, and lives as long
//! as the machine. Transitions only change which one is active.

mod has_payment;
mod no_payment;
mod sold_out;
mod win;

pub use has_payment::{HasPayment, DEFAULT_WIN_ODDS};
pub use no_payment::NoPayment;
pub use sold_out::SoldOut;
pub use win::{OneItemWin, TwoItemWin};

use crate::core::{State, StateKind};

/// The pre-built instance of every state.
#[derive(Debug, Default)]
pub struct StateSet {
    pub no_payment: NoPayment,
    pub has_payment: HasPayment,
    pub one_item_win: OneItemWin,
    pub two_item_win: TwoItemWin,
    pub sold_out: SoldOut,
}

impl StateSet {
    /// States for a machine whose crank draws from `[0, win_odds)`.
    pub(crate) fn with_win_odds(win_odds: u8) -> Self {
        Self {
            has_payment: HasPayment::new(win_odds),
            ..Self::default()
        }
    }

    /// The instance selected by `kind`.
    pub fn get(&self, kind: StateKind) -> &dyn State {
        match kind {
            StateKind::NoPayment => &self.no_payment,
            StateKind::HasPayment => &self.has_payment,
            StateKind::OneItemWin => &self.one_item_win,
            StateKind::TwoItemWin => &self.two_item_win,
            StateKind::SoldOut => &self.sold_out,
        }
    }
}
