use crate::search::HeuristicValue;
use ordered_float::Float;
use std::time::{Duration, Instant};
use tracing::info;

/// Counters collected while a search runs, logged periodically and once more
/// when the search finishes. `expanded_nodes` is the figure reported to
/// callers for comparing engines: it counts states taken off the frontier,
/// not states merely discovered.
#[derive(Debug, Clone)]
pub struct SearchStatistics {
    /// Number of states popped and processed
    expanded_nodes: usize,
    /// Number of heuristic evaluations
    evaluated_nodes: usize,
    /// Number of states added to the frontier for the first time
    generated_nodes: usize,
    /// Number of states whose best known cost improved after discovery
    reopened_nodes: usize,
    /// Number of outdated priority queue entries skipped at pop time
    stale_entries: usize,
    /// Best heuristic value found so far
    best_heuristic_value: HeuristicValue,
    /// Time when the search started
    search_start_time: Instant,
    /// Time when the last log was printed, used for periodic logging
    last_log_time: Instant,
}

impl Default for SearchStatistics {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchStatistics {
    pub fn new() -> Self {
        info!("starting search");
        Self {
            expanded_nodes: 0,
            evaluated_nodes: 0,
            generated_nodes: 0,
            reopened_nodes: 0,
            stale_entries: 0,
            best_heuristic_value: HeuristicValue::infinity(),
            search_start_time: Instant::now(),
            last_log_time: Instant::now(),
        }
    }

    pub fn register_heuristic_value(&mut self, heuristic_value: HeuristicValue) {
        self.evaluated_nodes += 1;
        if heuristic_value < self.best_heuristic_value {
            self.best_heuristic_value = heuristic_value;
        }
        self.log_if_needed();
    }

    pub fn increment_expanded_nodes(&mut self) {
        self.expanded_nodes += 1;
        self.log_if_needed();
    }

    pub fn increment_generated_nodes(&mut self, num_nodes: usize) {
        self.generated_nodes += num_nodes;
        self.log_if_needed();
    }

    pub fn increment_reopened_nodes(&mut self) {
        self.reopened_nodes += 1;
        self.log_if_needed();
    }

    pub fn increment_stale_entries(&mut self) {
        self.stale_entries += 1;
        self.log_if_needed();
    }

    pub fn expanded_nodes(&self) -> usize {
        self.expanded_nodes
    }

    pub fn evaluated_nodes(&self) -> usize {
        self.evaluated_nodes
    }

    pub fn generated_nodes(&self) -> usize {
        self.generated_nodes
    }

    pub fn reopened_nodes(&self) -> usize {
        self.reopened_nodes
    }

    pub fn stale_entries(&self) -> usize {
        self.stale_entries
    }

    pub fn search_duration(&self) -> Duration {
        self.search_start_time.elapsed()
    }

    fn log_if_needed(&mut self) {
        if self.last_log_time.elapsed().as_secs() > 10 {
            self.last_log_time = Instant::now();
            self.log();
        }
    }

    fn log(&self) {
        info!(
            expanded_nodes = self.expanded_nodes,
            evaluated_nodes = self.evaluated_nodes,
            generated_nodes = self.generated_nodes,
            reopened_nodes = self.reopened_nodes,
            stale_entries = self.stale_entries,
            best_heuristic_value = self.best_heuristic_value.into_inner(),
        );
    }

    pub fn finalise_search(&self) {
        info!("finalising search");
        self.log();
        info!(
            search_duration = %humantime::format_duration(self.search_duration())
        );
    }
}
