use crate::search::{Action, Plan, StateId};
use std::collections::HashMap;

/// Parent pointers discovered during a search. Each state other than the
/// root has at most one entry, overwritten when a cheaper path is found. The
/// entries are only read back to extract the plan.
#[derive(Debug, Clone)]
pub struct SearchSpace {
    root: StateId,
    parents: HashMap<StateId, (StateId, Action)>,
}

impl SearchSpace {
    pub fn new(root: StateId) -> Self {
        Self {
            root,
            parents: HashMap::new(),
        }
    }

    /// Records that `state` is reached from `parent` by `action`.
    pub fn set_parent(&mut self, state: StateId, parent: StateId, action: Action) {
        debug_assert_ne!(state, self.root, "the root has no parent");
        self.parents.insert(state, (parent, action));
    }

    pub fn get_parent(&self, state: StateId) -> Option<(StateId, Action)> {
        self.parents.get(&state).copied()
    }

    /// Number of states with a recorded parent.
    pub fn len(&self) -> usize {
        self.parents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    /// Walks the parent pointers back from `goal` to the root. Returns `None`
    /// when the chain breaks off or loops before reaching the root.
    pub fn extract_plan(&self, goal: StateId) -> Option<Plan> {
        let mut steps = vec![];
        let mut current = goal;
        while current != self.root {
            if steps.len() > self.parents.len() {
                return None;
            }
            let (parent, action) = self.get_parent(current)?;
            steps.push(action);
            current = parent;
        }
        steps.reverse();
        Some(Plan::new(steps))
    }
}
