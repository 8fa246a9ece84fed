//! Depth first search with an explicit stack.

use crate::search::{
    search_engines::{SearchEngine, SearchResult, SearchStatistics},
    Action, Plan, StateId, Task,
};
use std::{collections::HashSet, iter};

/// One entry of the explicit stack: a state on the current path, the index
/// of the next action to try from it, and the action that led to it. The
/// stack always holds exactly the current path from the start, so the plan
/// is read off the stack rather than from parent pointers.
#[derive(Debug, Clone, Copy)]
pub(super) struct Frame {
    pub state: StateId,
    pub cursor: usize,
    pub action: Option<Action>,
}

impl Frame {
    pub fn root(state: StateId) -> Self {
        Self {
            state,
            cursor: 0,
            action: None,
        }
    }

    pub fn child(state: StateId, action: Action) -> Self {
        Self {
            state,
            cursor: 0,
            action: Some(action),
        }
    }

    pub fn advanced(self) -> Self {
        Self {
            cursor: self.cursor + 1,
            ..self
        }
    }
}

/// Plan leading to `top`, given the frames still below it on the stack.
pub(super) fn plan_from_stack(stack: &[Frame], top: &Frame) -> Plan {
    Plan::new(
        stack
            .iter()
            .chain(iter::once(top))
            .filter_map(|frame| frame.action)
            .collect(),
    )
}

/// Depth-first search. Only states on the current path are excluded, so a
/// state may be reached again through a different branch. Every pop of a
/// stack frame counts as an expansion, including the pops that only advance
/// to the next action of a state.
#[derive(Debug, Default)]
pub struct DFS {}

impl DFS {
    pub fn new() -> Self {
        Self {}
    }
}

impl SearchEngine for DFS {
    fn search(&mut self, task: &Task) -> (SearchResult, SearchStatistics) {
        let mut statistics = SearchStatistics::new();
        let generator = task.generator();
        let actions = generator.actions();
        let mut stack = vec![Frame::root(task.start)];
        let mut on_current_path = HashSet::from([task.start]);

        while let Some(frame) = stack.pop() {
            statistics.increment_expanded_nodes();
            if task.is_goal(frame.state) {
                return (
                    SearchResult::Success(plan_from_stack(&stack, &frame)),
                    statistics,
                );
            }

            let Some(&action) = actions.get(frame.cursor) else {
                on_current_path.remove(&frame.state);
                continue;
            };
            stack.push(frame.advanced());

            let Some(next_state) = generator.generate_successor(frame.state, action) else {
                continue;
            };
            if !on_current_path.insert(next_state) {
                continue;
            }
            statistics.increment_generated_nodes(1);
            stack.push(Frame::child(next_state, action));
        }

        (SearchResult::ProvablyUnsolvable, statistics)
    }
}
