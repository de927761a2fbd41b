//! Status notices reported by the machine.
//!
//! Every action produces zero or more notices describing what happened.
//! Notices are delivered to a [`NoticeSink`]; the default sink turns them
//! into `tracing` events.

use crate::core::Action;
use std::fmt;
use std::sync::{Arc, Mutex};

/// Something the machine tells its customer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Notice {
    /// Payment taken; the crank can be turned.
    PaymentAccepted,
    /// A second payment arrived while one is already held.
    PaymentAlreadyInserted,
    /// The held payment went back to the customer.
    PaymentReturned,
    /// Eject asked for with no payment held.
    NoPaymentToEject,
    /// Crank turned with no payment held.
    CrankWithoutPayment,
    /// Dispense attempted before any payment.
    PayFirst,
    /// Dispense attempted with a payment but before the crank turned.
    TurnCrankFirst,
    /// Crank turned on a regular draw.
    SingleWin,
    /// Crank turned on a winning draw with enough items for two.
    DoubleWin,
    /// The machine already committed to a release; the action is ignored.
    AlreadyCommitted(Action),
    /// Eject asked for after the crank turned.
    CannotEjectNow,
    /// One item left the slot, reported even if the machine was empty.
    ItemReleased,
    /// Payment arrived while the machine is empty.
    NoItemsLeft,
    /// Crank turned with a payment but nothing left to release.
    NothingToDispense,
    /// The machine is empty and ignored the action.
    SoldOut(Action),
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PaymentAccepted => f.write_str("You inserted a payment"),
            Self::PaymentAlreadyInserted => f.write_str("You already inserted a payment"),
            Self::PaymentReturned => f.write_str("Payment returned"),
            Self::NoPaymentToEject => f.write_str("You have not inserted a payment"),
            Self::CrankWithoutPayment => f.write_str("You turned, but there is no payment"),
            Self::PayFirst => f.write_str("You need to pay first"),
            Self::TurnCrankFirst => f.write_str("You need to turn the crank first"),
            Self::SingleWin => f.write_str("You won an item!"),
            Self::DoubleWin => f.write_str("Yay, you got a winner! Double item!"),
            Self::AlreadyCommitted(Action::TurnCrank) => {
                f.write_str("You already turned the crank, an item is on its way")
            }
            Self::AlreadyCommitted(_) => {
                f.write_str("You already paid, and an item is on its way")
            }
            Self::CannotEjectNow => {
                f.write_str("You already turned the crank, cannot eject payment now")
            }
            Self::ItemReleased => f.write_str("An item comes rolling out of the slot..."),
            Self::NoItemsLeft => f.write_str("There is no item left in the machine!"),
            Self::NothingToDispense => f.write_str("Nothing left to dispense"),
            Self::SoldOut(Action::InsertPayment) => f.write_str("All sold out, cannot accept payment"),
            Self::SoldOut(Action::EjectPayment) => {
                f.write_str("All sold out, no payment accepted or ejected")
            }
            Self::SoldOut(Action::TurnCrank) => f.write_str("All sold out, cannot turn crank"),
            Self::SoldOut(Action::Dispense) => f.write_str("All sold out"),
        }
    }
}

/// Destination for machine notices.
pub trait NoticeSink: Send {
    fn notify(&mut self, notice: Notice);
}

/// Sink emitting every notice as a `tracing` info event.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl NoticeSink for TracingSink {
    fn notify(&mut self, notice: Notice) {
        tracing::info!(?notice, "{notice}");
    }
}

/// Sink collecting notices into a shared buffer.
///
/// Clones share the same buffer, so a test can keep one clone while the
/// machine owns another.
///
/// # Example
///
/// ```rust
/// use gumball::notice::{Notice, NoticeSink, RecordingSink};
///
/// let recorder = RecordingSink::new();
/// let mut sink = recorder.clone();
/// sink.notify(Notice::PayFirst);
///
/// assert_eq!(recorder.notices(), vec![Notice::PayFirst]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    notices: Arc<Mutex<Vec<Notice>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every notice recorded so far.
    pub fn notices(&self) -> Vec<Notice> {
        self.buffer().clone()
    }

    /// Remove and return every notice recorded so far.
    pub fn take(&self) -> Vec<Notice> {
        std::mem::take(&mut *self.buffer())
    }

    /// Count recorded notices equal to `notice`.
    pub fn count(&self, notice: Notice) -> usize {
        self.buffer().iter().filter(|n| **n == notice).count()
    }

    fn buffer(&self) -> std::sync::MutexGuard<'_, Vec<Notice>> {
        // A poisoned buffer still holds valid notices.
        self.notices.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl NoticeSink for RecordingSink {
    fn notify(&mut self, notice: Notice) {
        self.buffer().push(notice);
    }
}
