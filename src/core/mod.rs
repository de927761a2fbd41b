//! Core state machine types.
//!
//! This module contains the vocabulary shared by the machine and its states:
//! - The `State` trait and the `StateKind` discriminant
//! - Inventory guards controlling the win branches
//! - Transition history tracking

mod guard;
mod history;
mod state;

pub use guard::Guard;
pub use history::{StateHistory, StateTransition};
pub use state::{Action, State, StateKind};
