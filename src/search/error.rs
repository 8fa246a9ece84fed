use strum_macros::Display;
use thiserror::Error;

/// Which end of the search an unresolved endpoint refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum EndpointKind {
    Start,
    Goal,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The environment has no transition model, so there is nothing to
    /// search.
    #[error("the environment exposes no transition model")]
    ModelUnavailable,
    /// Neither an explicit endpoint nor a grid marker identifies the state.
    #[error("could not resolve the {0} state from the given endpoint or the grid markers")]
    GoalUnresolved(EndpointKind),
    #[error("scenario {0} is not one of 1 (uniform) or 2 (anisotropic)")]
    InvalidScenario(u8),
    #[error("action id {0} is outside the action set 0..4")]
    InvalidAction(usize),
}

impl SearchError {
    /// Errors that mean "nothing to search" rather than a broken contract.
    /// Searches degrade these to an empty result instead of failing.
    pub fn is_degradable(&self) -> bool {
        matches!(
            self,
            SearchError::ModelUnavailable | SearchError::GoalUnresolved(_)
        )
    }
}
