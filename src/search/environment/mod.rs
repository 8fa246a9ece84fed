//! The grid world consumed by the search engines. Engines only ever read from
//! an [`Environment`] through [`crate::search::Task::resolve`].

mod description;
mod frozen_lake;
mod transition_model;

pub use description::{GridDescription, MapError, GOAL_MARKER, HOLE_MARKER, START_MARKER};
pub use frozen_lake::FrozenLake;
pub use transition_model::TransitionModel;

use crate::search::ACTION_COUNT;

/// Read-only capabilities of a grid world.
pub trait Environment {
    /// The deterministic transition table, if the world exposes one.
    fn transition_model(&self) -> Option<&TransitionModel>;

    fn grid_rows(&self) -> usize;

    fn grid_cols(&self) -> usize;

    /// Textual layout of the grid, used to locate the start and goal markers
    /// when no explicit endpoint is given.
    fn grid_description(&self) -> Option<&GridDescription> {
        None
    }

    fn action_count(&self) -> usize {
        ACTION_COUNT
    }

    fn num_states(&self) -> usize {
        self.grid_rows() * self.grid_cols()
    }
}
