use crate::search::{environment::TransitionModel, Action, StateId};

/// Enumerates the successors of a state from a deterministic transition
/// model, skipping blocked moves.
#[derive(Debug, Clone)]
pub struct SuccessorGenerator<'a> {
    model: &'a TransitionModel,
    actions: Vec<Action>,
}

impl<'a> SuccessorGenerator<'a> {
    pub fn new(model: &'a TransitionModel, actions: Vec<Action>) -> Self {
        Self { model, actions }
    }

    /// The actions available in every state, in id order.
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    #[inline(always)]
    pub fn generate_successor(&self, state: StateId, action: Action) -> Option<StateId> {
        self.model.next_state(state, action)
    }

    /// `(action, next_state)` pairs of all unblocked moves, in action order.
    pub fn successors(&self, state: StateId) -> impl Iterator<Item = (Action, StateId)> + '_ {
        self.actions.iter().filter_map(move |&action| {
            self.generate_successor(state, action)
                .map(|next_state| (action, next_state))
        })
    }
}
