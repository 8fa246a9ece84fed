//! Step costs of the two terrain scenarios.

use crate::search::{Action, SearchError};
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// Accumulated or per-step path cost.
pub type Cost = OrderedFloat<f64>;

/// Selects the edge-cost model of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Scenario {
    /// Every move costs 1.
    #[default]
    Uniform = 1,
    /// Left and right cost 1, down and up cost 10.
    Anisotropic = 2,
}

impl Scenario {
    /// Cost of one move along a row.
    pub fn horizontal_weight(self) -> Cost {
        OrderedFloat(1.)
    }

    /// Cost of one move along a column.
    pub fn vertical_weight(self) -> Cost {
        match self {
            Scenario::Uniform => OrderedFloat(1.),
            Scenario::Anisotropic => OrderedFloat(10.),
        }
    }

    pub fn step_cost(self, action: Action) -> Cost {
        if action.is_horizontal() {
            self.horizontal_weight()
        } else {
            self.vertical_weight()
        }
    }
}

impl TryFrom<u8> for Scenario {
    type Error = SearchError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Scenario::Uniform),
            2 => Ok(Scenario::Anisotropic),
            _ => Err(SearchError::InvalidScenario(value)),
        }
    }
}

impl From<Scenario> for u8 {
    fn from(scenario: Scenario) -> Self {
        scenario as u8
    }
}

impl Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", u8::from(*self))
    }
}

/// Cost of taking action `action_id` under scenario `scenario`, for callers
/// holding raw ids. Ids outside the action set and unknown scenarios are
/// contract violations.
pub fn step_cost(action_id: usize, scenario: u8) -> Result<Cost, SearchError> {
    let action = Action::from_index(action_id)?;
    let scenario = Scenario::try_from(scenario)?;
    Ok(scenario.step_cost(action))
}
