//! Summary of one search run, in the shape the benchmark harness consumes.

use crate::search::{
    search_engines::{SearchEngineName, SearchResult, SearchStatistics},
    Scenario,
};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchReport {
    pub engine: SearchEngineName,
    pub scenario: Scenario,
    pub states_explored: usize,
    pub actions_count: usize,
    pub actions_cost: f64,
    pub solution_found: bool,
    pub search_time_secs: f64,
}

impl SearchReport {
    pub fn new(
        engine: SearchEngineName,
        scenario: Scenario,
        result: &SearchResult,
        statistics: &SearchStatistics,
    ) -> Self {
        let plan = result.plan();
        Self {
            engine,
            scenario,
            states_explored: statistics.expanded_nodes(),
            actions_count: plan.len(),
            actions_cost: plan.cost(scenario).into_inner(),
            solution_found: result.is_success(),
            search_time_secs: statistics.search_duration().as_secs_f64(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// `states, count, cost, found`
impl fmt::Display for SearchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {}, {}",
            self.states_explored, self.actions_count, self.actions_cost, self.solution_found
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{environment::FrozenLake, Endpoint, SearchOptions};
    use crate::test_utils::*;

    fn report(engine: SearchEngineName, map: &str, scenario: Scenario) -> SearchReport {
        let env = FrozenLake::new(map.parse().unwrap());
        let options = SearchOptions {
            scenario,
            ..SearchOptions::default()
        };
        let (result, statistics) = engine
            .search(&env, Endpoint::Unspecified, Endpoint::Unspecified, &options)
            .unwrap();
        SearchReport::new(engine, scenario, &result, &statistics)
    }

    #[test]
    fn harness_line_for_found_plan() {
        let report = report(SearchEngineName::Bfs, OPEN_3X3_MAP_TEXT, Scenario::Anisotropic);
        assert_eq!(report.to_string(), "9, 4, 22, true");
    }

    #[test]
    fn harness_line_for_missing_plan() {
        let report = report(SearchEngineName::Ucs, ENCLOSED_GOAL_MAP_TEXT, Scenario::Uniform);
        assert_eq!(
            report.to_string(),
            format!("{}, 0, 0, false", report.states_explored)
        );
        assert!(!report.solution_found);
    }

    #[test]
    fn json_uses_field_names() {
        let report = report(SearchEngineName::Astar, OPEN_3X3_MAP_TEXT, Scenario::Uniform);
        let value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(value["engine"], "astar");
        assert_eq!(value["scenario"], 1);
        assert_eq!(value["actions_count"], 4);
        assert_eq!(value["actions_cost"], 4.0);
        assert_eq!(value["solution_found"], true);
    }
}
