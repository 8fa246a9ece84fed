//! A plan is the sequence of actions leading from the start to the goal. An
//! empty plan either means the start already is the goal or that no plan was
//! found; only the search result tells the two apart.

use crate::search::{Action, Cost, Scenario};
use itertools::Itertools;
use std::{fmt, ops::Deref, path::Path, str::FromStr};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlanParseError {
    #[error("line {line}: {token:?} is neither an action name nor an action id")]
    UnknownAction { line: usize, token: String },
    #[error("line {line}: {source}")]
    InvalidAction {
        line: usize,
        source: crate::search::SearchError,
    },
    #[error("failed to read plan file: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Plan {
    steps: Vec<Action>,
}

impl Plan {
    pub fn empty() -> Self {
        Self { steps: vec![] }
    }

    pub fn new(steps: Vec<Action>) -> Self {
        Self { steps }
    }

    pub fn from_path(path: &Path) -> Result<Self, PlanParseError> {
        let contents = std::fs::read_to_string(path)?;
        contents.parse()
    }

    pub fn steps(&self) -> &[Action] {
        &self.steps
    }

    /// Total cost of executing the plan under `scenario`.
    pub fn cost(&self, scenario: Scenario) -> Cost {
        self.steps
            .iter()
            .fold(Cost::default(), |total, &action| {
                total + scenario.step_cost(action)
            })
    }

    /// Action ids, in the encoding used by the transition model.
    pub fn action_ids(&self) -> Vec<usize> {
        self.steps.iter().map(|action| action.index()).collect()
    }
}

impl Deref for Plan {
    type Target = [Action];

    fn deref(&self) -> &Self::Target {
        &self.steps
    }
}

impl IntoIterator for Plan {
    type Item = Action;
    type IntoIter = std::vec::IntoIter<Action>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}

impl From<Vec<Action>> for Plan {
    fn from(steps: Vec<Action>) -> Self {
        Self::new(steps)
    }
}

/// One action per line, by name (`left`) or by id (`0`). Blank lines and
/// lines starting with `;` are skipped.
impl FromStr for Plan {
    type Err = PlanParseError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let mut steps = vec![];
        for (line, token) in text.lines().enumerate() {
            let token = token.trim();
            if token.is_empty() || token.starts_with(';') {
                continue;
            }
            let action = match token.parse::<usize>() {
                Ok(id) => Action::from_index(id).map_err(|source| PlanParseError::InvalidAction {
                    line: line + 1,
                    source,
                })?,
                Err(_) => Action::from_str(token).map_err(|_| PlanParseError::UnknownAction {
                    line: line + 1,
                    token: token.to_string(),
                })?,
            };
            steps.push(action);
        }
        Ok(Self { steps })
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.steps.iter().join("\n"))
    }
}
