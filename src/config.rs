//! Machine configuration.
//!
//! A machine can be described by a small JSON document:
//!
//! ```json
//! { "inventory": 10, "win_odds": 10, "seed": 42 }
//! ```
//!
//! Only `inventory` is required.

use crate::states::DEFAULT_WIN_ODDS;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading or validating a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document is not valid JSON, or a field has the wrong type
    /// (for example a non-integer inventory).
    #[error("Invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Inventory {0} does not fit in a u32")]
    InventoryOutOfRange(i64),

    #[error("Win odds must be at least 1, got {0}")]
    InvalidWinOdds(u8),
}

fn default_win_odds() -> u8 {
    DEFAULT_WIN_ODDS
}

/// Settings for building a machine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MachineConfig {
    /// Items loaded at construction. Values below one build a sold-out machine.
    pub inventory: i64,

    /// Sides of the crank's draw; a zero draw wins a second item.
    #[serde(default = "default_win_odds")]
    pub win_odds: u8,

    /// Seed for reproducible draws. Entropy-seeded when absent.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl MachineConfig {
    /// Configuration with default odds and an entropy-seeded spinner.
    pub fn new(inventory: i64) -> Self {
        Self {
            inventory,
            win_odds: DEFAULT_WIN_ODDS,
            seed: None,
        }
    }

    /// Parse and validate a JSON configuration.
    ///
    /// # Example
    ///
    /// ```rust
    /// use gumball::config::MachineConfig;
    ///
    /// let config = MachineConfig::from_json(r#"{ "inventory": 3 }"#).unwrap();
    /// assert_eq!(config.inventory, 3);
    /// assert_eq!(config.win_odds, 10);
    ///
    /// assert!(MachineConfig::from_json(r#"{ "inventory": 2.5 }"#).is_err());
    /// ```
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.win_odds == 0 {
            return Err(ConfigError::InvalidWinOdds(self.win_odds));
        }
        if self.inventory > i64::from(u32::MAX) {
            return Err(ConfigError::InventoryOutOfRange(self.inventory));
        }
        Ok(())
    }

    /// Inventory to build with. Negative values are clamped to zero.
    pub fn initial_inventory(&self) -> Result<u32, ConfigError> {
        if self.inventory < 0 {
            tracing::warn!(
                inventory = self.inventory,
                "negative inventory configured, machine starts sold out"
            );
            return Ok(0);
        }
        u32::try_from(self.inventory).map_err(|_| ConfigError::InventoryOutOfRange(self.inventory))
    }
}
