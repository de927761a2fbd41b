//! Checkpoint error types.

use crate::core::StateKind;
use thiserror::Error;

/// Errors that can occur while saving or resuming a checkpoint
#[derive(Debug, Error)]
pub enum CheckpointError {
    /// JSON encoding or decoding failed
    #[error("JSON checkpoint error: {0}")]
    Json(#[from] serde_json::Error),

    /// Binary encoding or decoding failed
    #[error("Binary checkpoint error: {0}")]
    Binary(#[from] bincode::Error),

    #[error("Unsupported checkpoint version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// Sold out with items left, or any other state with none
    #[error("State {state} is inconsistent with an inventory of {inventory}")]
    InconsistentState { state: StateKind, inventory: u32 },

    #[error("History ends in {recorded} but the checkpoint is in {current}")]
    HistoryMismatch {
        recorded: StateKind,
        current: StateKind,
    },

    #[error("Win odds must be at least 1")]
    InvalidWinOdds,
}
