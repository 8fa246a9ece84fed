use crate::search::{
    environment::Environment,
    search_engines::{AStar, RandomWalk, SearchStatistics, BFS, DFS, DLS, UCS},
    Endpoint, HeuristicName, Plan, Scenario, SearchError, SearchSpace, StateId, Task,
};
use serde::{Deserialize, Serialize};
use strum_macros::Display;
use tracing::{error, info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResult {
    /// The search was successful
    Success(Plan),
    /// The frontier was exhausted, the goal is unreachable
    ProvablyUnsolvable,
    /// No plan was found, but the engine gave up early (step cap or depth
    /// limit), so the goal may still be reachable
    IncompleteUnsolvable,
    /// There was nothing to search: no transition model, or the start or
    /// goal could not be resolved
    Unresolved(SearchError),
}

impl SearchResult {
    pub fn is_success(&self) -> bool {
        matches!(self, SearchResult::Success(_))
    }

    /// The plan found, or an empty plan if the search failed.
    pub fn plan(&self) -> Plan {
        match self {
            SearchResult::Success(plan) => plan.clone(),
            _ => Plan::empty(),
        }
    }
}

pub trait SearchEngine {
    fn search(&mut self, task: &Task) -> (SearchResult, SearchStatistics);
}

/// Converts the parent pointers of a finished search into its result.
pub(super) fn plan_to_goal(search_space: &SearchSpace, goal: StateId) -> SearchResult {
    match search_space.extract_plan(goal) {
        Some(plan) => SearchResult::Success(plan),
        None => {
            error!(goal = %goal, "no parent chain leads back to the start");
            SearchResult::ProvablyUnsolvable
        }
    }
}

/// Parameters shared by all engines; each engine reads the ones it needs.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct SearchOptions {
    /// Edge-cost model used by UCS and A*
    pub scenario: Scenario,
    /// Depth bound of depth-limited search, in actions
    pub limit: usize,
    /// Step cap of the random walk
    pub max_steps: usize,
    /// Estimate used by A*
    pub heuristic: HeuristicName,
    /// Seed of the random walk, drawn from the OS when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            scenario: Scenario::Uniform,
            limit: 50,
            max_steps: 10_000,
            heuristic: HeuristicName::Manhattan,
            seed: None,
        }
    }
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default, Display, Deserialize, Serialize)]
#[clap(rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "lowercase")]
pub enum SearchEngineName {
    #[clap(name = "random", help = "Random walk, capped at the maximum number of steps.")]
    #[serde(rename = "random")]
    #[strum(serialize = "random")]
    #[default]
    RandomWalk,
    #[clap(help = "Breadth-first search, optimal in number of actions.")]
    Bfs,
    #[clap(help = "Depth-first search with a cycle check on the current path.")]
    Dfs,
    #[clap(help = "Depth-limited search with a global visited set.")]
    Dls,
    #[clap(help = "Uniform-cost search, optimal under the chosen scenario.")]
    Ucs,
    #[clap(help = "A* search, optimal under the chosen scenario.")]
    Astar,
}

impl SearchEngineName {
    pub fn create(&self, options: &SearchOptions) -> Box<dyn SearchEngine> {
        match self {
            SearchEngineName::RandomWalk => {
                Box::new(RandomWalk::new(options.max_steps, options.seed))
            }
            SearchEngineName::Bfs => Box::new(BFS::new()),
            SearchEngineName::Dfs => Box::new(DFS::new()),
            SearchEngineName::Dls => Box::new(DLS::new(options.limit)),
            SearchEngineName::Ucs => Box::new(UCS::new(options.scenario)),
            SearchEngineName::Astar => Box::new(AStar::new(
                options.scenario,
                options.heuristic.create(options.scenario),
            )),
        }
    }

    /// Resolves the task from `env` and runs this engine on it.
    ///
    /// A missing transition model or an unresolvable start or goal is not an
    /// error: the search reports [`SearchResult::Unresolved`] with zero
    /// expansions. Invalid action ids are.
    pub fn search<E>(
        &self,
        env: &E,
        start: Endpoint,
        goal: Endpoint,
        options: &SearchOptions,
    ) -> Result<(SearchResult, SearchStatistics), SearchError>
    where
        E: Environment + ?Sized,
    {
        let task = match Task::resolve(env, start, goal) {
            Ok(task) => task,
            Err(error) if error.is_degradable() => {
                warn!(%error, "nothing to search");
                return Ok((SearchResult::Unresolved(error), SearchStatistics::new()));
            }
            Err(error) => return Err(error),
        };
        info!(
            engine = %self,
            start = %task.start,
            goal = %task.goal,
            scenario = %options.scenario,
        );

        if task.start == task.goal {
            let mut statistics = SearchStatistics::new();
            statistics.increment_expanded_nodes();
            statistics.finalise_search();
            return Ok((SearchResult::Success(Plan::empty()), statistics));
        }

        let mut engine = self.create(options);
        let (result, statistics) = engine.search(&task);
        statistics.finalise_search();
        Ok((result, statistics))
    }
}
