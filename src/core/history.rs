//! Transition history of a gumball machine.
//!
//! Every state change the machine makes is recorded with the action that
//! triggered it and the inventory at that moment.

use super::state::{Action, StateKind};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single state transition.
///
/// # Example
///
/// ```rust
/// use gumball::core::{Action, StateKind, StateTransition};
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     from: StateKind::NoPayment,
///     to: StateKind::HasPayment,
///     trigger: Some(Action::InsertPayment),
///     inventory: 3,
///     timestamp: Utc::now(),
/// };
/// assert_eq!(transition.to, StateKind::HasPayment);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StateTransition {
    /// The state being transitioned from
    pub from: StateKind,
    /// The state being transitioned to
    pub to: StateKind,
    /// The action during which the transition happened, `None` when the
    /// state was set directly on the machine
    pub trigger: Option<Action>,
    /// Items left in the machine when the transition happened
    pub inventory: u32,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of state transitions.
///
/// `record` returns a new history with the transition added and leaves the
/// original untouched. `push` appends in place and is what a running
/// machine uses.
///
/// # Example
///
/// ```rust
/// use gumball::core::{Action, StateHistory, StateKind, StateTransition};
/// use chrono::Utc;
///
/// let history = StateHistory::new().record(StateTransition {
///     from: StateKind::NoPayment,
///     to: StateKind::HasPayment,
///     trigger: Some(Action::InsertPayment),
///     inventory: 1,
///     timestamp: Utc::now(),
/// });
///
/// let history = history.record(StateTransition {
///     from: StateKind::HasPayment,
///     to: StateKind::OneItemWin,
///     trigger: Some(Action::TurnCrank),
///     inventory: 1,
///     timestamp: Utc::now(),
/// });
///
/// let path = history.get_path();
/// assert_eq!(path, vec![StateKind::NoPayment, StateKind::HasPayment, StateKind::OneItemWin]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StateHistory {
    transitions: Vec<StateTransition>,
}

impl StateHistory {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    pub fn record(&self, transition: StateTransition) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Append a transition to this history.
    pub fn push(&mut self, transition: StateTransition) {
        self.transitions.push(transition);
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    /// Get the path of states traversed.
    ///
    /// Returns the initial state followed by the `to` state of each
    /// transition. Empty if nothing was recorded.
    pub fn get_path(&self) -> Vec<StateKind> {
        let mut path = Vec::with_capacity(self.transitions.len() + 1);
        if let Some(first) = self.transitions.first() {
            path.push(first.from);
        }
        path.extend(self.transitions.iter().map(|t| t.to));
        path
    }

    /// Calculate total duration from first to last transition.
    ///
    /// Returns `None` if there are no transitions.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Count how many times the machine entered `kind`.
    pub fn count_entries(&self, kind: StateKind) -> usize {
        self.transitions.iter().filter(|t| t.to == kind).count()
    }

    /// Get all transitions, oldest first.
    pub fn transitions(&self) -> &[StateTransition] {
        &self.transitions
    }

    pub fn last(&self) -> Option<&StateTransition> {
        self.transitions.last()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transition(from: StateKind, to: StateKind, trigger: Action) -> StateTransition {
        StateTransition {
            from,
            to,
            trigger: Some(trigger),
            inventory: 5,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history = StateHistory::new();
        assert!(history.is_empty());
        assert!(history.get_path().is_empty());
        assert!(history.duration().is_none());
        assert!(history.last().is_none());
    }

    #[test]
    fn record_is_immutable() {
        let history = StateHistory::new();

        let new_history = history.record(transition(
            StateKind::NoPayment,
            StateKind::HasPayment,
            Action::InsertPayment,
        ));

        assert_eq!(history.transitions().len(), 0);
        assert_eq!(new_history.transitions().len(), 1);
    }

    #[test]
    fn push_appends_in_place() {
        let mut history = StateHistory::new();
        history.push(transition(
            StateKind::NoPayment,
            StateKind::HasPayment,
            Action::InsertPayment,
        ));
        history.push(transition(
            StateKind::HasPayment,
            StateKind::NoPayment,
            Action::EjectPayment,
        ));

        assert_eq!(history.len(), 2);
        assert_eq!(
            history.get_path(),
            vec![
                StateKind::NoPayment,
                StateKind::HasPayment,
                StateKind::NoPayment
            ]
        );
    }

    #[test]
    fn push_matches_record() {
        let first = transition(
            StateKind::NoPayment,
            StateKind::HasPayment,
            Action::InsertPayment,
        );
        let mut pushed = StateHistory::new();
        pushed.push(first.clone());

        assert_eq!(pushed, StateHistory::new().record(first));
    }

    #[test]
    fn get_path_returns_state_sequence() {
        let history = StateHistory::new()
            .record(transition(
                StateKind::NoPayment,
                StateKind::HasPayment,
                Action::InsertPayment,
            ))
            .record(transition(
                StateKind::HasPayment,
                StateKind::TwoItemWin,
                Action::TurnCrank,
            ))
            .record(transition(
                StateKind::TwoItemWin,
                StateKind::NoPayment,
                Action::Dispense,
            ));

        assert_eq!(
            history.get_path(),
            vec![
                StateKind::NoPayment,
                StateKind::HasPayment,
                StateKind::TwoItemWin,
                StateKind::NoPayment,
            ]
        );
        assert_eq!(history.count_entries(StateKind::NoPayment), 1);
        assert_eq!(history.count_entries(StateKind::TwoItemWin), 1);
        assert_eq!(history.last().and_then(|t| t.trigger), Some(Action::Dispense));
    }

    #[test]
    fn single_transition_has_duration_zero() {
        let history = StateHistory::new().record(transition(
            StateKind::NoPayment,
            StateKind::HasPayment,
            Action::InsertPayment,
        ));

        assert_eq!(history.duration(), Some(Duration::from_secs(0)));
    }

    #[test]
    fn duration_calculates_elapsed_time() {
        let start = Utc::now();
        let mut first = transition(
            StateKind::NoPayment,
            StateKind::HasPayment,
            Action::InsertPayment,
        );
        first.timestamp = start;
        let mut second = transition(
            StateKind::HasPayment,
            StateKind::NoPayment,
            Action::EjectPayment,
        );
        second.timestamp = start + chrono::Duration::milliseconds(250);

        let history = StateHistory::new().record(first).record(second);

        assert_eq!(history.duration(), Some(Duration::from_millis(250)));
    }

    #[test]
    fn history_serializes_correctly() {
        let history = StateHistory::new().record(transition(
            StateKind::HasPayment,
            StateKind::OneItemWin,
            Action::TurnCrank,
        ));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: StateHistory = serde_json::from_str(&json).unwrap();

        assert_eq!(history, deserialized);
    }
}
