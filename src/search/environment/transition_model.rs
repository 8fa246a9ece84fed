use crate::search::{Action, StateId, ACTION_COUNT};
use strum::IntoEnumIterator;

/// Deterministic transition table: each `(state, action)` pair leads to
/// exactly one next state, or to none when the move is blocked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionModel {
    transitions: Vec<[Option<StateId>; ACTION_COUNT]>,
}

impl TransitionModel {
    /// A table over `num_states` states with every move blocked.
    pub fn new(num_states: usize) -> Self {
        Self {
            transitions: vec![[None; ACTION_COUNT]; num_states],
        }
    }

    pub fn from_fn<F>(num_states: usize, mut f: F) -> Self
    where
        F: FnMut(StateId, Action) -> Option<StateId>,
    {
        let transitions = (0..num_states)
            .map(|index| {
                let state = StateId::new(index);
                let mut row = [None; ACTION_COUNT];
                for action in Action::iter() {
                    row[action.index()] = f(state, action);
                }
                row
            })
            .collect();
        Self { transitions }
    }

    /// Overwrites one entry of the table.
    ///
    /// # Panics
    /// If `state` is not part of the table.
    pub fn set(&mut self, state: StateId, action: Action, next_state: Option<StateId>) {
        self.transitions[state.index()][action.index()] = next_state;
    }

    #[inline(always)]
    pub fn next_state(&self, state: StateId, action: Action) -> Option<StateId> {
        self.transitions
            .get(state.index())
            .and_then(|row| row[action.index()])
    }

    pub fn num_states(&self) -> usize {
        self.transitions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_states_have_no_transitions() {
        let model = TransitionModel::new(2);
        assert_eq!(model.next_state(StateId::new(5), Action::Left), None);
        assert_eq!(model.next_state(StateId::new(1), Action::Left), None);
    }

    #[test]
    fn set_and_from_fn() {
        let mut model = TransitionModel::from_fn(3, |state, action| match action {
            Action::Right if state.index() < 2 => Some(StateId::new(state.index() + 1)),
            _ => None,
        });
        assert_eq!(
            model.next_state(StateId::new(0), Action::Right),
            Some(StateId::new(1))
        );
        assert_eq!(model.next_state(StateId::new(2), Action::Right), None);

        model.set(StateId::new(2), Action::Left, Some(StateId::new(1)));
        assert_eq!(
            model.next_state(StateId::new(2), Action::Left),
            Some(StateId::new(1))
        );
        assert_eq!(model.num_states(), 3);
    }
}
