//! Resolution of a search instance from an [`Environment`].
//!
//! Start and goal may be given as a state id, as a `(row, col)` pair, or not
//! at all, in which case the 'S' and 'G' markers of the grid description are
//! used. They are resolved here once; the engines only ever see state ids.

use crate::search::{
    environment::{Environment, GridDescription, GOAL_MARKER, START_MARKER},
    Action, Coordinate, EndpointKind, SearchError, StateId, SuccessorGenerator,
};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// How the caller identifies the start or goal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Endpoint {
    /// Use the grid marker.
    #[default]
    Unspecified,
    State(StateId),
    Coordinate(usize, usize),
}

impl Endpoint {
    pub fn is_unspecified(&self) -> bool {
        matches!(self, Endpoint::Unspecified)
    }

    fn resolve(
        self,
        kind: EndpointKind,
        rows: usize,
        cols: usize,
        description: Option<&GridDescription>,
    ) -> Result<StateId, SearchError> {
        let coordinate = match self {
            Endpoint::Unspecified => {
                let marker = match kind {
                    EndpointKind::Start => START_MARKER,
                    EndpointKind::Goal => GOAL_MARKER,
                };
                description.and_then(|description| description.find(marker))
            }
            Endpoint::State(state) if cols > 0 => Some(Coordinate::from_state(state, cols)),
            Endpoint::State(_) => None,
            Endpoint::Coordinate(row, col) => Some(Coordinate::new(row, col)),
        };
        coordinate
            .filter(|coordinate| coordinate.is_within(rows, cols))
            .map(|coordinate| coordinate.to_state(cols))
            .ok_or(SearchError::GoalUnresolved(kind))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid endpoint {0:?}, expected a state id, \"row,col\" or \"none\"")]
pub struct ParseEndpointError(String);

impl FromStr for Endpoint {
    type Err = ParseEndpointError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let trimmed = text.trim();
        let error = || ParseEndpointError(text.to_string());
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("none") {
            return Ok(Endpoint::Unspecified);
        }
        match trimmed.split_once(',') {
            Some((row, col)) => {
                let row = row.trim().parse().map_err(|_| error())?;
                let col = col.trim().parse().map_err(|_| error())?;
                Ok(Endpoint::Coordinate(row, col))
            }
            None => trimmed
                .parse()
                .map(|index| Endpoint::State(StateId::new(index)))
                .map_err(|_| error()),
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Unspecified => write!(f, "none"),
            Endpoint::State(state) => write!(f, "{}", state),
            Endpoint::Coordinate(row, col) => write!(f, "{},{}", row, col),
        }
    }
}

/// A resolved search instance: canonical start and goal states plus
/// read-only access to the environment's transitions.
#[derive(Debug, Clone)]
pub struct Task<'a> {
    pub start: StateId,
    pub goal: StateId,
    rows: usize,
    cols: usize,
    generator: SuccessorGenerator<'a>,
}

impl<'a> Task<'a> {
    pub fn resolve<E>(env: &'a E, start: Endpoint, goal: Endpoint) -> Result<Self, SearchError>
    where
        E: Environment + ?Sized,
    {
        let model = env.transition_model().ok_or(SearchError::ModelUnavailable)?;
        let actions = (0..env.action_count())
            .map(Action::from_index)
            .collect::<Result<Vec<_>, _>>()?;

        let rows = env.grid_rows();
        let cols = env.grid_cols();
        let description = env.grid_description();
        let start = start.resolve(EndpointKind::Start, rows, cols, description)?;
        let goal = goal.resolve(EndpointKind::Goal, rows, cols, description)?;

        Ok(Self {
            start,
            goal,
            rows,
            cols,
            generator: SuccessorGenerator::new(model, actions),
        })
    }

    pub fn generator(&self) -> &SuccessorGenerator<'a> {
        &self.generator
    }

    pub fn is_goal(&self, state: StateId) -> bool {
        state == self.goal
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn num_states(&self) -> usize {
        self.rows * self.cols
    }

    pub fn coordinate(&self, state: StateId) -> Coordinate {
        Coordinate::from_state(state, self.cols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::environment::{FrozenLake, TransitionModel};

    #[derive(Debug)]
    struct FiveActionWorld {
        model: TransitionModel,
    }

    impl Environment for FiveActionWorld {
        fn transition_model(&self) -> Option<&TransitionModel> {
            Some(&self.model)
        }

        fn grid_rows(&self) -> usize {
            1
        }

        fn grid_cols(&self) -> usize {
            2
        }

        fn action_count(&self) -> usize {
            5
        }
    }

    fn lake() -> FrozenLake {
        FrozenLake::new("FFF\nFSF\nGFF".parse().unwrap())
    }

    #[test]
    fn endpoints_default_to_grid_markers() {
        let env = lake();
        let task = Task::resolve(&env, Endpoint::Unspecified, Endpoint::Unspecified).unwrap();
        assert_eq!(task.start, StateId::new(4));
        assert_eq!(task.goal, StateId::new(6));
        assert_eq!(task.generator().actions().len(), 4);
    }

    #[test]
    fn explicit_endpoints_take_precedence() {
        let env = lake();
        let task = Task::resolve(
            &env,
            Endpoint::Coordinate(0, 2),
            Endpoint::State(StateId::new(8)),
        )
        .unwrap();
        assert_eq!(task.start, StateId::new(2));
        assert_eq!(task.goal, StateId::new(8));
        assert_eq!(task.coordinate(task.goal), Coordinate::new(2, 2));
    }

    #[test]
    fn missing_marker_is_unresolved() {
        let env = FrozenLake::new("SFF\nFFF".parse().unwrap());
        let error = Task::resolve(&env, Endpoint::Unspecified, Endpoint::Unspecified).unwrap_err();
        assert_eq!(error, SearchError::GoalUnresolved(EndpointKind::Goal));
    }

    #[test]
    fn off_grid_endpoints_are_unresolved() {
        let env = lake();
        assert_eq!(
            Task::resolve(&env, Endpoint::State(StateId::new(9)), Endpoint::Unspecified)
                .unwrap_err(),
            SearchError::GoalUnresolved(EndpointKind::Start)
        );
        assert_eq!(
            Task::resolve(&env, Endpoint::Unspecified, Endpoint::Coordinate(1, 3)).unwrap_err(),
            SearchError::GoalUnresolved(EndpointKind::Goal)
        );
    }

    #[test]
    fn missing_model_is_reported_first() {
        let env = FrozenLake::without_model("FFF".parse().unwrap());
        assert_eq!(
            Task::resolve(&env, Endpoint::Unspecified, Endpoint::Unspecified).unwrap_err(),
            SearchError::ModelUnavailable
        );
    }

    #[test]
    fn actions_beyond_the_fixed_set_are_rejected() {
        let env = FiveActionWorld {
            model: TransitionModel::new(2),
        };
        assert_eq!(
            Task::resolve(
                &env,
                Endpoint::State(StateId::new(0)),
                Endpoint::State(StateId::new(1))
            )
            .unwrap_err(),
            SearchError::InvalidAction(4)
        );
    }

    #[test]
    fn parse_endpoints() {
        assert_eq!("".parse::<Endpoint>(), Ok(Endpoint::Unspecified));
        assert_eq!("None".parse::<Endpoint>(), Ok(Endpoint::Unspecified));
        assert_eq!("12".parse::<Endpoint>(), Ok(Endpoint::State(StateId::new(12))));
        assert_eq!("3, 4".parse::<Endpoint>(), Ok(Endpoint::Coordinate(3, 4)));
        assert!("3,x".parse::<Endpoint>().is_err());
        assert!("-1".parse::<Endpoint>().is_err());
        assert_eq!(Endpoint::Coordinate(3, 4).to_string(), "3,4");
    }

    #[test]
    fn deserialize_endpoints() {
        #[derive(Deserialize)]
        struct Endpoints {
            #[serde(default)]
            start: Endpoint,
            #[serde(default)]
            goal: Endpoint,
        }
        let parsed: Endpoints = toml::from_str("goal = [2, 3]").unwrap();
        assert_eq!(parsed.start, Endpoint::Unspecified);
        assert_eq!(parsed.goal, Endpoint::Coordinate(2, 3));
        let parsed: Endpoints = toml::from_str("start = 5").unwrap();
        assert_eq!(parsed.start, Endpoint::State(StateId::new(5)));
    }
}
