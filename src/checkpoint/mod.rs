//! Checkpoint and resume for gumball machines.
//!
//! A checkpoint captures everything needed to rebuild a machine except its
//! spinner and notice sink, which are supplied again on resume.

use crate::core::{StateHistory, StateKind};
use crate::machine::GumballMachine;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod error;

pub use error::CheckpointError;

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Serializable snapshot of a gumball machine.
///
/// # Example
///
/// ```rust
/// use gumball::checkpoint::Checkpoint;
/// use gumball::machine::{GumballMachine, GumballMachineBuilder};
///
/// let mut machine = GumballMachine::builder().inventory(3).seed(1).build().unwrap();
/// machine.insert_payment();
///
/// let json = machine.checkpoint().to_json().unwrap();
/// let resumed = GumballMachineBuilder::new()
///     .resume(Checkpoint::from_json(&json).unwrap())
///     .unwrap();
///
/// assert_eq!(resumed.state(), machine.state());
/// assert_eq!(resumed.count(), 3);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Checkpoint {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: Uuid,

    /// When checkpoint was created
    pub timestamp: DateTime<Utc>,

    /// Items left in the machine
    pub inventory: u32,

    /// Active state of the machine
    pub current_state: StateKind,

    /// Sides of the crank's draw
    pub win_odds: u8,

    /// Complete transition history
    pub history: StateHistory,
}

impl Checkpoint {
    /// Snapshot `machine` as it is now.
    pub fn capture(machine: &GumballMachine) -> Self {
        let checkpoint = Self {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            inventory: machine.count(),
            current_state: machine.state(),
            win_odds: machine.win_odds(),
            history: machine.history().clone(),
        };
        tracing::debug!(
            id = %checkpoint.id,
            inventory = checkpoint.inventory,
            state = checkpoint.current_state.name(),
            "checkpoint captured"
        );
        checkpoint
    }

    pub fn to_json(&self) -> Result<String, CheckpointError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_binary(&self) -> Result<Vec<u8>, CheckpointError> {
        Ok(bincode::serialize(self)?)
    }

    pub fn from_binary(bytes: &[u8]) -> Result<Self, CheckpointError> {
        Ok(bincode::deserialize(bytes)?)
    }

    /// Check that this checkpoint describes a machine that can be resumed.
    pub fn validate(&self) -> Result<(), CheckpointError> {
        if self.version != CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: self.version,
                supported: CHECKPOINT_VERSION,
            });
        }
        if self.win_odds == 0 {
            return Err(CheckpointError::InvalidWinOdds);
        }
        if self.current_state.is_final() != (self.inventory == 0) {
            return Err(CheckpointError::InconsistentState {
                state: self.current_state,
                inventory: self.inventory,
            });
        }
        if let Some(last) = self.history.last() {
            if last.to != self.current_state {
                return Err(CheckpointError::HistoryMismatch {
                    recorded: last.to,
                    current: self.current_state,
                });
            }
        }
        Ok(())
    }
}
