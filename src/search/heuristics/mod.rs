mod heuristic;
mod manhattan;
mod zero_heuristic;

pub use heuristic::{Heuristic, HeuristicName, HeuristicValue};
pub use manhattan::ManhattanHeuristic;
pub use zero_heuristic::ZeroHeuristic;
