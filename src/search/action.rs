use crate::search::SearchError;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Number of move primitives in a grid world.
pub const ACTION_COUNT: usize = 4;

/// A move on the grid. The discriminant is the action id used by the
/// transition model: 0=left, 1=down, 2=right, 3=up.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Left = 0,
    Down = 1,
    Right = 2,
    Up = 3,
}

impl Action {
    #[inline(always)]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Result<Self, SearchError> {
        match index {
            0 => Ok(Action::Left),
            1 => Ok(Action::Down),
            2 => Ok(Action::Right),
            3 => Ok(Action::Up),
            _ => Err(SearchError::InvalidAction(index)),
        }
    }

    /// Row and column offsets of the move.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Action::Left => (0, -1),
            Action::Down => (1, 0),
            Action::Right => (0, 1),
            Action::Up => (-1, 0),
        }
    }

    /// Left and right moves stay in the same row.
    pub fn is_horizontal(self) -> bool {
        matches!(self, Action::Left | Action::Right)
    }
}

impl TryFrom<usize> for Action {
    type Error = SearchError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::from_index(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn ids_follow_the_fixed_encoding() {
        let actions: Vec<Action> = Action::iter().collect();
        assert_eq!(
            actions,
            vec![Action::Left, Action::Down, Action::Right, Action::Up]
        );
        for (index, action) in actions.into_iter().enumerate() {
            assert_eq!(action.index(), index);
            assert_eq!(Action::from_index(index), Ok(action));
        }
    }

    #[test]
    fn out_of_range_id_is_rejected() {
        assert_eq!(Action::from_index(4), Err(SearchError::InvalidAction(4)));
        assert_eq!(
            Action::try_from(usize::MAX),
            Err(SearchError::InvalidAction(usize::MAX))
        );
    }

    #[test]
    fn names_round_trip() {
        assert_eq!(Action::Down.to_string(), "down");
        assert_eq!(Action::from_str("RIGHT"), Ok(Action::Right));
        assert!(Action::from_str("north").is_err());
    }

    #[test]
    fn horizontal_moves() {
        assert!(Action::Left.is_horizontal());
        assert!(Action::Right.is_horizontal());
        assert!(!Action::Up.is_horizontal());
        assert_eq!(Action::Up.delta(), (-1, 0));
    }
}
