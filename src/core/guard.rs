//! Guard predicates over the machine's inventory.
//!
//! Guards are pure boolean functions deciding whether a transition may be
//! taken for the current item count.

use std::fmt;

/// Pure predicate over the inventory count.
///
/// # Example
///
/// ```rust
/// use gumball::core::Guard;
///
/// let double_win = Guard::new("more than one item", |count| count > 1);
///
/// assert!(double_win.check(2));
/// assert!(!double_win.check(1));
/// assert!(!double_win.check(0));
/// ```
pub struct Guard {
    label: &'static str,
    predicate: Box<dyn Fn(u32) -> bool + Send + Sync>,
}

impl Guard {
    /// Create a guard from a pure predicate function.
    ///
    /// The label is used in log events when the guard is evaluated.
    pub fn new<F>(label: &'static str, predicate: F) -> Self
    where
        F: Fn(u32) -> bool + Send + Sync + 'static,
    {
        Guard {
            label,
            predicate: Box::new(predicate),
        }
    }

    /// Guard passing when at least `n` items remain.
    pub fn at_least(label: &'static str, n: u32) -> Self {
        Self::new(label, move |count| count >= n)
    }

    /// Check if the guard allows the transition for this inventory.
    pub fn check(&self, count: u32) -> bool {
        (self.predicate)(count)
    }

    pub fn label(&self) -> &'static str {
        self.label
    }
}

impl fmt::Debug for Guard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard").field("label", &self.label).finish()
    }
}
