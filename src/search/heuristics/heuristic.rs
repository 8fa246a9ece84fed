use crate::search::{
    heuristics::{ManhattanHeuristic, ZeroHeuristic},
    Scenario, StateId, Task,
};
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

pub type HeuristicValue = OrderedFloat<f64>;

pub trait Heuristic: Debug {
    /// Estimate the cost of reaching the task's goal from `state`.
    fn evaluate(&self, state: StateId, task: &Task) -> HeuristicValue;
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[clap(rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum HeuristicName {
    #[clap(help = "Manhattan distance weighted by the per-direction step cost.")]
    #[default]
    Manhattan,
    #[clap(help = "The zero heuristic, which makes A* order states like UCS.")]
    Zero,
}

impl HeuristicName {
    pub fn create(&self, scenario: Scenario) -> Box<dyn Heuristic> {
        match self {
            HeuristicName::Manhattan => Box::new(ManhattanHeuristic::new(scenario)),
            HeuristicName::Zero => Box::new(ZeroHeuristic::new()),
        }
    }
}
