//! Build errors for the machine builder.

use thiserror::Error;

/// Errors that can occur when building a gumball machine.
#[derive(Debug, Error, PartialEq)]
pub enum BuildError {
    #[error("Inventory not specified. Call .inventory(count) before .build()")]
    MissingInventory,

    #[error("Win odds must be at least 1, got {0}")]
    InvalidWinOdds(u8),
}
