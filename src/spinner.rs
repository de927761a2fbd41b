//! Randomness behind the crank.
//!
//! Turning the crank draws one value uniformly from `[0, sides)`. A draw of
//! zero is a winning draw. The source is injectable so that tests can force
//! either branch.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of crank draws.
pub trait Spinner: Send {
    /// Draw a value in `[0, sides)`. `sides` is never zero.
    fn spin(&mut self, sides: u8) -> u8;
}

/// Uniform draws from a seedable `StdRng`.
#[derive(Clone, Debug)]
pub struct RandomSpinner {
    rng: StdRng,
}

impl RandomSpinner {
    /// Spinner seeded from operating system entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Spinner producing a reproducible sequence of draws.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomSpinner {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl Spinner for RandomSpinner {
    fn spin(&mut self, sides: u8) -> u8 {
        self.rng.gen_range(0..sides.max(1))
    }
}

/// Replays a fixed list of draws, cycling when it reaches the end.
///
/// Scripted values are reduced into `[0, sides)`. An empty script always
/// draws `sides - 1`, a losing draw whenever more than one side exists.
///
/// # Example
///
/// ```rust
/// use gumball::spinner::{ScriptedSpinner, Spinner};
///
/// let mut spinner = ScriptedSpinner::new([3, 0]);
/// assert_eq!(spinner.spin(10), 3);
/// assert_eq!(spinner.spin(10), 0);
/// assert_eq!(spinner.spin(10), 3);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ScriptedSpinner {
    draws: Vec<u8>,
    next: usize,
}

impl ScriptedSpinner {
    pub fn new(draws: impl IntoIterator<Item = u8>) -> Self {
        Self {
            draws: draws.into_iter().collect(),
            next: 0,
        }
    }

    /// Every draw is a winning draw.
    pub fn always_wins() -> Self {
        Self::new([0])
    }

    /// No draw is a winning draw.
    pub fn never_wins() -> Self {
        Self::new([1])
    }
}

impl Spinner for ScriptedSpinner {
    fn spin(&mut self, sides: u8) -> u8 {
        let sides = sides.max(1);
        if self.draws.is_empty() {
            return sides - 1;
        }
        let draw = self.draws[self.next % self.draws.len()];
        self.next = self.next.wrapping_add(1);
        draw % sides
    }
}
