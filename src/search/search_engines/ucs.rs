//! Uniform cost search

use crate::search::{
    search_engines::{plan_to_goal, SearchEngine, SearchResult, SearchStatistics},
    Cost, Scenario, SearchSpace, StateId, Task,
};
use std::{
    cmp::Reverse,
    collections::{hash_map::Entry, BinaryHeap, HashMap},
};

/// Uniform-cost (Dijkstra) search. A state is pushed again whenever a
/// strictly cheaper path to it is found; the outdated entries stay in the
/// heap and are skipped when popped. Ties on cost go to the lower state id.
#[derive(Debug)]
pub struct UCS {
    scenario: Scenario,
}

impl UCS {
    pub fn new(scenario: Scenario) -> Self {
        Self { scenario }
    }
}

impl SearchEngine for UCS {
    fn search(&mut self, task: &Task) -> (SearchResult, SearchStatistics) {
        let mut statistics = SearchStatistics::new();
        let generator = task.generator();
        let mut search_space = SearchSpace::new(task.start);
        let mut best_cost: HashMap<StateId, Cost> = HashMap::from([(task.start, Cost::default())]);
        let mut frontier = BinaryHeap::from([Reverse((Cost::default(), task.start))]);

        while let Some(Reverse((g_value, state))) = frontier.pop() {
            if best_cost.get(&state).is_some_and(|&best| g_value > best) {
                statistics.increment_stale_entries();
                continue;
            }
            statistics.increment_expanded_nodes();
            if task.is_goal(state) {
                return (plan_to_goal(&search_space, state), statistics);
            }

            for (action, next_state) in generator.successors(state) {
                let new_cost = g_value + self.scenario.step_cost(action);
                match best_cost.entry(next_state) {
                    Entry::Occupied(entry) if new_cost >= *entry.get() => continue,
                    Entry::Occupied(mut entry) => {
                        entry.insert(new_cost);
                        statistics.increment_reopened_nodes();
                    }
                    Entry::Vacant(entry) => {
                        entry.insert(new_cost);
                        statistics.increment_generated_nodes(1);
                    }
                }
                search_space.set_parent(next_state, state, action);
                frontier.push(Reverse((new_cost, next_state)));
            }
        }

        (SearchResult::ProvablyUnsolvable, statistics)
    }
}
