//! Depth limited search.

use crate::search::{
    search_engines::{
        dfs::{plan_from_stack, Frame},
        SearchEngine, SearchResult, SearchStatistics,
    },
    Task,
};
use std::collections::HashSet;
use tracing::debug;

/// Depth-first search that never goes deeper than `limit` actions. Unlike
/// [`crate::search::search_engines::DFS`] it keeps one visited set for the
/// whole search: a state is pushed at most once, the first time it is
/// discovered, even if that discovery happened deep in a branch that was cut
/// off. Expansions are counted per frame pop, as in DFS.
#[derive(Debug)]
pub struct DLS {
    limit: usize,
}

impl DLS {
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }
}

impl SearchEngine for DLS {
    fn search(&mut self, task: &Task) -> (SearchResult, SearchStatistics) {
        let mut statistics = SearchStatistics::new();
        let generator = task.generator();
        let actions = generator.actions();
        let mut stack = vec![Frame::root(task.start)];
        let mut visited = HashSet::from([task.start]);
        let mut cutoff = false;

        while let Some(frame) = stack.pop() {
            statistics.increment_expanded_nodes();
            if task.is_goal(frame.state) {
                return (
                    SearchResult::Success(plan_from_stack(&stack, &frame)),
                    statistics,
                );
            }

            // Frames below this one are exactly its ancestors.
            let depth = stack.len();
            if depth >= self.limit {
                // Only a frame with an unvisited successor loses part of the
                // search space.
                if generator
                    .successors(frame.state)
                    .any(|(_, next_state)| !visited.contains(&next_state))
                {
                    cutoff = true;
                }
                continue;
            }
            let Some(&action) = actions.get(frame.cursor) else {
                continue;
            };
            stack.push(frame.advanced());

            let Some(next_state) = generator.generate_successor(frame.state, action) else {
                continue;
            };
            if !visited.insert(next_state) {
                continue;
            }
            statistics.increment_generated_nodes(1);
            stack.push(Frame::child(next_state, action));
        }

        if cutoff {
            debug!(limit = self.limit, "depth limit reached");
            (SearchResult::IncompleteUnsolvable, statistics)
        } else {
            (SearchResult::ProvablyUnsolvable, statistics)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{environment::FrozenLake, validate, Action, Endpoint, Plan};
    use crate::test_utils::*;

    fn open_grid_task(env: &FrozenLake) -> Task<'_> {
        Task::resolve(env, Endpoint::Unspecified, Endpoint::Unspecified).unwrap()
    }

    #[test]
    fn finds_plan_within_limit() {
        let env = FrozenLake::new(OPEN_3X3_MAP_TEXT.parse().unwrap());
        let (result, statistics) = DLS::new(4).search(&open_grid_task(&env));
        assert_eq!(
            result,
            SearchResult::Success(Plan::new(vec![
                Action::Down,
                Action::Down,
                Action::Right,
                Action::Right
            ]))
        );
        assert_eq!(statistics.expanded_nodes(), 11);
    }

    #[test]
    fn limit_too_small_is_incomplete() {
        let env = FrozenLake::new(OPEN_3X3_MAP_TEXT.parse().unwrap());
        let (result, _) = DLS::new(3).search(&open_grid_task(&env));
        assert_eq!(result, SearchResult::IncompleteUnsolvable);
        assert!(result.plan().is_empty());
    }

    #[test]
    fn zero_limit_only_checks_the_start() {
        let env = FrozenLake::new(OPEN_3X3_MAP_TEXT.parse().unwrap());
        let (result, statistics) = DLS::new(0).search(&open_grid_task(&env));
        assert_eq!(result, SearchResult::IncompleteUnsolvable);
        assert_eq!(statistics.expanded_nodes(), 1);
    }

    #[test]
    fn terminal_cells_at_the_limit_are_not_a_cutoff() {
        // Both neighbours of the start are holes, so depth 1 is the whole
        // reachable space.
        let env = FrozenLake::new("SH\nHG".parse().unwrap());
        let (result, statistics) = DLS::new(1).search(&open_grid_task(&env));
        assert_eq!(result, SearchResult::ProvablyUnsolvable);
        assert_eq!(statistics.expanded_nodes(), 7);
    }

    #[test]
    fn unvisited_neighbour_at_the_limit_is_a_cutoff() {
        // The goal is walled off. The hole at (0, 2) is only reachable from
        // (0, 1), which sits at depth 3.
        let env = FrozenLake::new("SFH\nFFH\nHHG".parse().unwrap());
        let task = open_grid_task(&env);
        assert_eq!(DLS::new(3).search(&task).0, SearchResult::IncompleteUnsolvable);
        assert_eq!(DLS::new(4).search(&task).0, SearchResult::ProvablyUnsolvable);
    }

    #[test]
    fn enclosed_goal_is_provably_unreachable() {
        let env = FrozenLake::new(ENCLOSED_GOAL_MAP_TEXT.parse().unwrap());
        let (result, _) = DLS::new(50).search(&open_grid_task(&env));
        assert_eq!(result, SearchResult::ProvablyUnsolvable);
    }

    #[test]
    fn plan_on_larger_lake_is_valid() {
        let env = FrozenLake::new(LAKE_8X8_MAP_TEXT.parse().unwrap());
        let task = open_grid_task(&env);
        let (result, _) = DLS::new(1000).search(&task);
        assert!(result.is_success());
        assert!(result.plan().len() <= 1000);
        assert!(validate(&result.plan(), &task).is_ok());
    }
}
