//! This module implements the A* search algorithm.

use crate::search::{
    search_engines::{plan_to_goal, SearchEngine, SearchResult, SearchStatistics},
    Cost, Heuristic, Scenario, SearchSpace, StateId, Task,
};
use std::{
    cmp::Reverse,
    collections::{hash_map::Entry, BinaryHeap, HashMap},
};

/// A* search ordered by `g + h`, ties broken by lower `g`, then by lower
/// state id. Revisits follow the same relax-on-improve rule as
/// [`crate::search::search_engines::UCS`]. With an admissible heuristic the
/// plan is optimal; with the default consistent heuristic no state is
/// expanded twice.
#[derive(Debug)]
pub struct AStar {
    scenario: Scenario,
    heuristic: Box<dyn Heuristic>,
}

impl AStar {
    pub fn new(scenario: Scenario, heuristic: Box<dyn Heuristic>) -> Self {
        Self {
            scenario,
            heuristic,
        }
    }
}

impl SearchEngine for AStar {
    fn search(&mut self, task: &Task) -> (SearchResult, SearchStatistics) {
        let mut statistics = SearchStatistics::new();
        let generator = task.generator();
        let mut search_space = SearchSpace::new(task.start);
        let mut best_cost: HashMap<StateId, Cost> = HashMap::from([(task.start, Cost::default())]);

        let h_value = self.heuristic.evaluate(task.start, task);
        statistics.register_heuristic_value(h_value);
        let mut frontier = BinaryHeap::from([Reverse((h_value, Cost::default(), task.start))]);

        while let Some(Reverse((_f_value, g_value, state))) = frontier.pop() {
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

                let h_value = self.heuristic.evaluate(next_state, task);
                statistics.register_heuristic_value(h_value);
                frontier.push(Reverse((new_cost + h_value, new_cost, next_state)));
            }
        }

        (SearchResult::ProvablyUnsolvable, statistics)
    }
}
