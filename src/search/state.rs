use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// Identifier of one grid cell. States are laid out row-major, so the cell at
/// `(row, col)` of a grid with `cols` columns has id `row * cols + col`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateId(usize);

impl StateId {
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    #[inline(always)]
    pub fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for StateId {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A `(row, col)` position on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

impl Coordinate {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn to_state(self, cols: usize) -> StateId {
        StateId(self.row * cols + self.col)
    }

    pub fn from_state(state: StateId, cols: usize) -> Self {
        Self {
            row: state.0 / cols,
            col: state.0 % cols,
        }
    }

    /// Whether this coordinate lies inside a `rows` x `cols` grid.
    pub fn is_within(self, rows: usize, cols: usize) -> bool {
        self.row < rows && self.col < cols
    }
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinate_state_conversion_is_row_major() {
        let coordinate = Coordinate::new(2, 1);
        assert_eq!(coordinate.to_state(4), StateId::new(9));
        assert_eq!(Coordinate::from_state(StateId::new(9), 4), coordinate);
        assert_eq!(Coordinate::from_state(StateId::new(0), 4), Coordinate::new(0, 0));
    }

    #[test]
    fn coordinate_bounds() {
        assert!(Coordinate::new(2, 3).is_within(3, 4));
        assert!(!Coordinate::new(3, 0).is_within(3, 4));
        assert!(!Coordinate::new(0, 4).is_within(3, 4));
    }
}
