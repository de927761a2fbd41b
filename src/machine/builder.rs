//! Builder for constructing gumball machines.

use crate::checkpoint::{Checkpoint, CheckpointError};
use crate::config::{ConfigError, MachineConfig};
use crate::core::StateKind;
use crate::machine::error::BuildError;
use crate::machine::GumballMachine;
use crate::notice::{NoticeSink, TracingSink};
use crate::spinner::{RandomSpinner, Spinner};
use crate::states::{StateSet, DEFAULT_WIN_ODDS};

/// Builder for constructing gumball machines with a fluent API.
///
/// # Example
///
/// ```rust
/// use gumball::core::StateKind;
/// use gumball::machine::GumballMachineBuilder;
///
/// let machine = GumballMachineBuilder::new()
///     .inventory(10)
///     .win_odds(5)
///     .seed(42)
///     .build()
///     .unwrap();
///
/// assert_eq!(machine.state(), StateKind::NoPayment);
/// assert_eq!(machine.win_odds(), 5);
/// ```
pub struct GumballMachineBuilder {
    inventory: Option<u32>,
    win_odds: u8,
    seed: Option<u64>,
    spinner: Option<Box<dyn Spinner>>,
    sink: Option<Box<dyn NoticeSink>>,
}

impl GumballMachineBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            inventory: None,
            win_odds: DEFAULT_WIN_ODDS,
            seed: None,
            spinner: None,
            sink: None,
        }
    }

    /// Builder preloaded from a validated configuration.
    pub fn from_config(config: &MachineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut builder = Self::new()
            .inventory(config.initial_inventory()?)
            .win_odds(config.win_odds);
        builder.seed = config.seed;
        Ok(builder)
    }

    /// Set the number of items the machine starts with (required).
    pub fn inventory(mut self, count: u32) -> Self {
        self.inventory = Some(count);
        self
    }

    /// Set the number of sides of the crank's draw. Defaults to 10.
    pub fn win_odds(mut self, odds: u8) -> Self {
        self.win_odds = odds;
        self
    }

    /// Seed the default spinner for reproducible draws.
    ///
    /// Ignored when a spinner is supplied with [`Self::spinner`].
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Use a custom source of crank draws.
    pub fn spinner<S: Spinner + 'static>(mut self, spinner: S) -> Self {
        self.spinner = Some(Box::new(spinner));
        self
    }

    /// Send notices somewhere other than `tracing`.
    pub fn sink<K: NoticeSink + 'static>(mut self, sink: K) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    /// Build the machine.
    ///
    /// An inventory of zero builds a machine that starts sold out.
    pub fn build(self) -> Result<GumballMachine, BuildError> {
        if self.inventory.is_none() {
            return Err(BuildError::MissingInventory);
        }
        if self.win_odds == 0 {
            return Err(BuildError::InvalidWinOdds(self.win_odds));
        }
        Ok(self.assemble())
    }

    /// Restore a machine from a checkpoint.
    ///
    /// Inventory, state, odds and history come from the checkpoint; the
    /// spinner and sink come from this builder.
    pub fn resume(mut self, checkpoint: Checkpoint) -> Result<GumballMachine, CheckpointError> {
        checkpoint.validate()?;
        tracing::info!(
            id = %checkpoint.id,
            inventory = checkpoint.inventory,
            state = checkpoint.current_state.name(),
            "resuming gumball machine"
        );
        let spinner = self.take_spinner();
        let sink = self.take_sink();
        Ok(GumballMachine::from_parts(
            StateSet::with_win_odds(checkpoint.win_odds),
            checkpoint.inventory,
            checkpoint.current_state,
            checkpoint.history,
            spinner,
            sink,
        ))
    }

    pub(super) fn assemble(mut self) -> GumballMachine {
        let inventory = self.inventory.unwrap_or(0);
        let initial = if inventory > 0 {
            StateKind::NoPayment
        } else {
            StateKind::SoldOut
        };
        tracing::info!(
            inventory,
            win_odds = self.win_odds,
            state = initial.name(),
            "gumball machine built"
        );
        let spinner = self.take_spinner();
        let sink = self.take_sink();
        GumballMachine::from_parts(
            StateSet::with_win_odds(self.win_odds),
            inventory,
            initial,
            Default::default(),
            spinner,
            sink,
        )
    }

    fn take_spinner(&mut self) -> Box<dyn Spinner> {
        match (self.spinner.take(), self.seed) {
            (Some(spinner), _) => spinner,
            (None, Some(seed)) => Box::new(RandomSpinner::seeded(seed)),
            (None, None) => Box::new(RandomSpinner::from_entropy()),
        }
    }

    fn take_sink(&mut self) -> Box<dyn NoticeSink> {
        self.sink.take().unwrap_or_else(|| Box::new(TracingSink))
    }
}

impl Default for GumballMachineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notice::{Notice, RecordingSink};
    use crate::spinner::ScriptedSpinner;

    #[test]
    fn builder_validates_required_fields() {
        let result = GumballMachineBuilder::new().build();
        assert!(matches!(result, Err(BuildError::MissingInventory)));
    }

    #[test]
    fn builder_rejects_zero_odds() {
        let result = GumballMachineBuilder::new().inventory(3).win_odds(0).build();
        assert!(matches!(result, Err(BuildError::InvalidWinOdds(0))));
    }

    #[test]
    fn empty_inventory_builds_sold_out_machine() {
        let machine = GumballMachineBuilder::new().inventory(0).build().unwrap();
        assert_eq!(machine.state(), StateKind::SoldOut);
        assert_eq!(machine.count(), 0);
    }

    #[test]
    fn custom_spinner_and_sink_are_used() {
        let sink = RecordingSink::new();
        let mut machine = GumballMachineBuilder::new()
            .inventory(4)
            .spinner(ScriptedSpinner::always_wins())
            .sink(sink.clone())
            .build()
            .unwrap();

        machine.insert_payment();
        machine.turn_crank();

        assert_eq!(machine.count(), 2);
        assert_eq!(sink.count(Notice::DoubleWin), 1);
    }

    #[test]
    fn seeded_machines_draw_the_same_outcomes() {
        let run = || {
            let mut machine = GumballMachineBuilder::new()
                .inventory(200)
                .seed(1234)
                .sink(RecordingSink::new())
                .build()
                .unwrap();
            for _ in 0..50 {
                machine.insert_payment();
                machine.turn_crank();
            }
            machine.count()
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn from_config_applies_settings() {
        let config = MachineConfig {
            inventory: 7,
            win_odds: 3,
            seed: Some(9),
        };
        let machine = GumballMachineBuilder::from_config(&config)
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(machine.count(), 7);
        assert_eq!(machine.win_odds(), 3);
    }

    #[test]
    fn resume_restores_checkpointed_machine() {
        let mut machine = GumballMachineBuilder::new()
            .inventory(3)
            .spinner(ScriptedSpinner::never_wins())
            .sink(RecordingSink::new())
            .build()
            .unwrap();
        machine.insert_payment();

        let resumed = GumballMachineBuilder::new()
            .sink(RecordingSink::new())
            .resume(machine.checkpoint())
            .unwrap();

        assert_eq!(resumed.state(), StateKind::HasPayment);
        assert_eq!(resumed.count(), 3);
        assert_eq!(resumed.history(), machine.history());
    }
}
