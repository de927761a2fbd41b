//! Gumball: a gumball machine built on the State pattern
//!
//! The machine holds an inventory and exactly one active state. Every
//! customer action is delegated to that state, and the state decides what
//! happens next: it may release items, report a notice, or ask the machine
//! to switch to another state.
//!
//! # Core Concepts
//!
//! - **Machine**: the context owning inventory, the pre-built states and the
//!   active state ([`machine::GumballMachine`])
//! - **State**: one phase of the machine's lifecycle ([`core::State`])
//! - **Spinner**: the injectable randomness behind the crank
//! - **Notices**: typed status messages delivered to a sink
//! - **History**: every transition, with the action that triggered it
//!
//! Invalid actions never fail. Turning the crank without paying, or paying
//! twice, is reported through a notice and otherwise ignored.
//!
//! # Example
//!
//! ```rust
//! use gumball::core::StateKind;
//! use gumball::machine::GumballMachine;
//! use gumball::notice::{Notice, RecordingSink};
//! use gumball::spinner::ScriptedSpinner;
//!
//! let notices = RecordingSink::new();
//! let mut machine = GumballMachine::builder()
//!     .inventory(1)
//!     .spinner(ScriptedSpinner::always_wins())
//!     .sink(notices.clone())
//!     .build()
//!     .unwrap();
//!
//! machine.insert_payment();
//! machine.turn_crank();
//!
//! // A winning draw with one item left still releases only one.
//! assert_eq!(machine.count(), 0);
//! assert_eq!(machine.state(), StateKind::SoldOut);
//! assert_eq!(notices.count(Notice::ItemReleased), 1);
//! ```

pub mod checkpoint;
pub mod config;
pub mod core;
pub mod machine;
pub mod notice;
pub mod spinner;
pub mod states;

// Re-export commonly used types
pub use checkpoint::{Checkpoint, CheckpointError};
pub use config::{ConfigError, MachineConfig};
pub use crate::core::{Action, State, StateHistory, StateKind, StateTransition};
pub use machine::{BuildError, GumballMachine, GumballMachineBuilder};
pub use notice::{Notice, NoticeSink, RecordingSink, TracingSink};
pub use spinner::{RandomSpinner, ScriptedSpinner, Spinner};
