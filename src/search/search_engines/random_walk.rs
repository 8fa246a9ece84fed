//! Random walk baseline.

use crate::search::{
    search_engines::{SearchEngine, SearchResult, SearchStatistics},
    Plan, Task,
};
use rand::{rngs::StdRng, seq::IndexedRandom, SeedableRng};
use tracing::debug;

/// Samples a uniformly random action at every step and follows it, with no
/// memory of where it has been. Blocked actions use up a step but are not
/// added to the plan. The start and every successful move count as
/// expansions. Gives up after `max_steps` steps.
#[derive(Debug)]
pub struct RandomWalk {
    max_steps: usize,
    rng: StdRng,
}

impl RandomWalk {
    pub fn new(max_steps: usize, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self { max_steps, rng }
    }
}

impl SearchEngine for RandomWalk {
    fn search(&mut self, task: &Task) -> (SearchResult, SearchStatistics) {
        let mut statistics = SearchStatistics::new();
        let generator = task.generator();
        let mut state = task.start;
        let mut steps = vec![];
        statistics.increment_expanded_nodes();

        for _ in 0..self.max_steps {
            if task.is_goal(state) {
                return (SearchResult::Success(Plan::new(steps)), statistics);
            }
            let Some(&action) = generator.actions().choose(&mut self.rng) else {
                break;
            };
            let Some(next_state) = generator.generate_successor(state, action) else {
                continue;
            };
            steps.push(action);
            state = next_state;
            statistics.increment_expanded_nodes();
        }

        if task.is_goal(state) {
            return (SearchResult::Success(Plan::new(steps)), statistics);
        }
        debug!(max_steps = self.max_steps, "step cap reached");
        (SearchResult::IncompleteUnsolvable, statistics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{environment::FrozenLake, validate, Endpoint};
    use crate::test_utils::*;

    #[test]
    fn successful_walk_replays_to_the_goal() {
        let env = FrozenLake::new(OPEN_3X3_MAP_TEXT.parse().unwrap());
        let task = Task::resolve(&env, Endpoint::Unspecified, Endpoint::Unspecified).unwrap();
        let mut engine = RandomWalk::new(100_000, Some(3));
        let (result, statistics) = engine.search(&task);
        // The open 3x3 grid has no holes, so the walk cannot get stuck.
        assert!(result.is_success());
        let plan = result.plan();
        assert!(validate(&plan, &task).is_ok());
        assert_eq!(statistics.expanded_nodes(), plan.len() + 1);
    }

    #[test]
    fn same_seed_same_walk() {
        let env = FrozenLake::new(LAKE_4X4_MAP_TEXT.parse().unwrap());
        let task = Task::resolve(&env, Endpoint::Unspecified, Endpoint::Unspecified).unwrap();
        let (first, _) = RandomWalk::new(500, Some(11)).search(&task);
        let (second, _) = RandomWalk::new(500, Some(11)).search(&task);
        assert_eq!(first, second);
    }

    #[test]
    fn zero_steps_gives_up_immediately() {
        let env = FrozenLake::new(OPEN_3X3_MAP_TEXT.parse().unwrap());
        let task = Task::resolve(&env, Endpoint::Unspecified, Endpoint::Unspecified).unwrap();
        let (result, statistics) = RandomWalk::new(0, Some(1)).search(&task);
        assert_eq!(result, SearchResult::IncompleteUnsolvable);
        assert_eq!(statistics.expanded_nodes(), 1);
    }

    #[test]
    fn enclosed_goal_is_never_reached() {
        let env = FrozenLake::new(ENCLOSED_GOAL_MAP_TEXT.parse().unwrap());
        let task = Task::resolve(&env, Endpoint::Unspecified, Endpoint::Unspecified).unwrap();
        let (result, _) = RandomWalk::new(1_000, None).search(&task);
        assert_eq!(result, SearchResult::IncompleteUnsolvable);
    }
}
