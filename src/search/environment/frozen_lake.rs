use crate::search::{
    environment::{Environment, GridDescription, TransitionModel, GOAL_MARKER, HOLE_MARKER},
    Coordinate, StateId,
};

/// A deterministic (non-slippery) frozen lake.
///
/// The agent moves one cell per action. Moves that would leave the grid have
/// no transition. Holes and the goal end the episode, so they have no
/// outgoing transitions: a path can end on them but never pass through them.
#[derive(Debug, Clone)]
pub struct FrozenLake {
    description: GridDescription,
    model: Option<TransitionModel>,
}

impl FrozenLake {
    pub fn new(description: GridDescription) -> Self {
        let model = Self::build_model(&description);
        Self {
            description,
            model: Some(model),
        }
    }

    /// The same lake, but without exposing a transition model.
    pub fn without_model(description: GridDescription) -> Self {
        Self {
            description,
            model: None,
        }
    }

    pub fn description(&self) -> &GridDescription {
        &self.description
    }

    /// Whether the episode ends once the agent stands on `state`.
    pub fn is_terminal(&self, state: StateId) -> bool {
        let coordinate = Coordinate::from_state(state, self.description.cols());
        matches!(
            self.description.get(coordinate),
            Some(HOLE_MARKER) | Some(GOAL_MARKER)
        )
    }

    fn build_model(description: &GridDescription) -> TransitionModel {
        let rows = description.rows();
        let cols = description.cols();
        TransitionModel::from_fn(rows * cols, |state, action| {
            let from = Coordinate::from_state(state, cols);
            if matches!(
                description.get(from),
                Some(HOLE_MARKER) | Some(GOAL_MARKER)
            ) {
                return None;
            }
            let (d_row, d_col) = action.delta();
            let row = from.row.checked_add_signed(d_row)?;
            let col = from.col.checked_add_signed(d_col)?;
            let to = Coordinate::new(row, col);
            to.is_within(rows, cols).then(|| to.to_state(cols))
        })
    }
}

impl Environment for FrozenLake {
    fn transition_model(&self) -> Option<&TransitionModel> {
        self.model.as_ref()
    }

    fn grid_rows(&self) -> usize {
        self.description.rows()
    }

    fn grid_cols(&self) -> usize {
        self.description.cols()
    }

    fn grid_description(&self) -> Option<&GridDescription> {
        Some(&self.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::Action;

    fn lake(text: &str) -> FrozenLake {
        FrozenLake::new(text.parse().unwrap())
    }

    #[test]
    fn moves_inside_the_grid() {
        let env = lake("SFF\nFFF\nFFG");
        let model = env.transition_model().unwrap();
        let centre = StateId::new(4);
        assert_eq!(model.next_state(centre, Action::Left), Some(StateId::new(3)));
        assert_eq!(model.next_state(centre, Action::Down), Some(StateId::new(7)));
        assert_eq!(model.next_state(centre, Action::Right), Some(StateId::new(5)));
        assert_eq!(model.next_state(centre, Action::Up), Some(StateId::new(1)));
    }

    #[test]
    fn moves_off_the_grid_are_blocked() {
        let env = lake("SFF\nFFF\nFFG");
        let model = env.transition_model().unwrap();
        assert_eq!(model.next_state(StateId::new(0), Action::Left), None);
        assert_eq!(model.next_state(StateId::new(0), Action::Up), None);
        assert_eq!(model.next_state(StateId::new(5), Action::Right), None);
        assert_eq!(model.next_state(StateId::new(6), Action::Down), None);
    }

    #[test]
    fn holes_and_goal_are_terminal() {
        let env = lake("SHF\nFFF\nFFG");
        let model = env.transition_model().unwrap();
        // Entering a hole is possible, leaving it is not.
        assert_eq!(model.next_state(StateId::new(0), Action::Right), Some(StateId::new(1)));
        assert!(env.is_terminal(StateId::new(1)));
        assert!(env.is_terminal(StateId::new(8)));
        assert!(!env.is_terminal(StateId::new(0)));
        for action in [Action::Left, Action::Down, Action::Right, Action::Up] {
            assert_eq!(model.next_state(StateId::new(1), action), None);
            assert_eq!(model.next_state(StateId::new(8), action), None);
        }
    }

    #[test]
    fn without_model_exposes_only_the_layout() {
        let env = FrozenLake::without_model("SF\nFG".parse().unwrap());
        assert!(env.transition_model().is_none());
        assert_eq!(env.grid_rows(), 2);
        assert_eq!(env.num_states(), 4);
        assert!(env.grid_description().is_some());
    }
}
