mod action;
mod cost;
pub mod environment;
mod error;
pub mod heuristics;
mod plan;
mod report;
pub mod search_engines;
mod search_space;
mod state;
mod successor_generator;
mod task;
mod validate;
mod verbosity;

pub use action::{Action, ACTION_COUNT};
pub use cost::{step_cost, Cost, Scenario};
pub use error::{EndpointKind, SearchError};
pub use heuristics::{Heuristic, HeuristicName, HeuristicValue};
pub use plan::{Plan, PlanParseError};
pub use report::SearchReport;
pub use search_engines::{SearchEngine, SearchEngineName, SearchOptions, SearchResult};
pub use search_space::SearchSpace;
pub use state::{Coordinate, StateId};
pub use successor_generator::SuccessorGenerator;
pub use task::{Endpoint, ParseEndpointError, Task};
pub use validate::{validate, ValidationError};
pub use verbosity::Verbosity;
