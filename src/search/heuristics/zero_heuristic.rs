use crate::search::{Heuristic, HeuristicValue, StateId, Task};

#[derive(Clone, Debug, Default)]
pub struct ZeroHeuristic {}

impl ZeroHeuristic {
    pub fn new() -> Self {
        ZeroHeuristic {}
    }
}

impl Heuristic for ZeroHeuristic {
    fn evaluate(&self, _state: StateId, _task: &Task) -> HeuristicValue {
        (0.).into()
    }
}
