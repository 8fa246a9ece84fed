use crate::search::{Coordinate, Heuristic, HeuristicValue, Scenario, StateId, Task};
use ordered_float::OrderedFloat;

/// Manhattan distance with each axis weighted by the step cost of moving
/// along it. Every column of horizontal distance needs at least one
/// horizontal move and every row of vertical distance at least one vertical
/// move, so the estimate never exceeds the true cost. It is also consistent:
/// one move changes the estimate by at most that move's cost.
#[derive(Clone, Debug)]
pub struct ManhattanHeuristic {
    scenario: Scenario,
}

impl ManhattanHeuristic {
    pub fn new(scenario: Scenario) -> Self {
        Self { scenario }
    }

    pub fn estimate(&self, from: Coordinate, to: Coordinate) -> HeuristicValue {
        let d_col = from.col.abs_diff(to.col) as f64;
        let d_row = from.row.abs_diff(to.row) as f64;
        OrderedFloat(d_col) * self.scenario.horizontal_weight()
            + OrderedFloat(d_row) * self.scenario.vertical_weight()
    }
}

impl Heuristic for ManhattanHeuristic {
    fn evaluate(&self, state: StateId, task: &Task) -> HeuristicValue {
        self.estimate(task.coordinate(state), task.coordinate(task.goal))
    }
}
