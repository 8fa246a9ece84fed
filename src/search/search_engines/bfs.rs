//! Breadth first search

use crate::search::{
    search_engines::{plan_to_goal, SearchEngine, SearchResult, SearchStatistics},
    SearchSpace, Task,
};
use std::collections::{HashSet, VecDeque};
use tracing::debug;

/// Breadth-first search. A state is enqueued only the first time it is
/// discovered and the goal test happens when a state is dequeued, so the plan
/// has the fewest possible actions.
#[derive(Debug, Default)]
pub struct BFS {}

impl BFS {
    pub fn new() -> Self {
        Self {}
    }
}

impl SearchEngine for BFS {
    fn search(&mut self, task: &Task) -> (SearchResult, SearchStatistics) {
        let mut statistics = SearchStatistics::new();
        let generator = task.generator();
        let mut search_space = SearchSpace::new(task.start);
        let mut visited = HashSet::from([task.start]);
        let mut queue = VecDeque::from([task.start]);

        while let Some(state) = queue.pop_front() {
            statistics.increment_expanded_nodes();
            if task.is_goal(state) {
                return (plan_to_goal(&search_space, state), statistics);
            }

            for (action, next_state) in generator.successors(state) {
                if visited.insert(next_state) {
                    search_space.set_parent(next_state, state, action);
                    statistics.increment_generated_nodes(1);
                    queue.push_back(next_state);
                }
            }
        }

        debug!(visited = visited.len(), "frontier exhausted");
        (SearchResult::ProvablyUnsolvable, statistics)
    }
}
