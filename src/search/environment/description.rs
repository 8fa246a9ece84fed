use crate::search::Coordinate;
use itertools::Itertools;
use rand::Rng;
use std::{fmt, path::Path, str::FromStr};
use thiserror::Error;

pub const START_MARKER: char = 'S';
pub const GOAL_MARKER: char = 'G';
pub const HOLE_MARKER: char = 'H';
pub const FROZEN_MARKER: char = 'F';

#[derive(Debug, Error)]
pub enum MapError {
    #[error("the map has no cells")]
    Empty,
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("a {0}x{0} map cannot hold distinct start and goal cells")]
    TooSmall(usize),
    #[error("failed to read map file: {0}")]
    Io(#[from] std::io::Error),
}

/// Rectangular character layout of a grid world, one character per cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridDescription {
    rows: usize,
    cols: usize,
    cells: Vec<char>,
}

impl GridDescription {
    pub fn from_path(path: &Path) -> Result<Self, MapError> {
        let contents = std::fs::read_to_string(path)?;
        contents.parse()
    }

    /// Generates a `size` x `size` lake where each cell is frozen with
    /// probability `p_frozen` and a hole otherwise. The start and goal are
    /// then placed on two distinct cells chosen uniformly at random, so
    /// there is no guarantee that the goal is reachable.
    pub fn random<R: Rng>(
        size: usize,
        p_frozen: f64,
        rng: &mut R,
    ) -> Result<Self, MapError> {
        let num_cells = size * size;
        if num_cells < 2 {
            return Err(MapError::TooSmall(size));
        }
        let mut cells: Vec<char> = (0..num_cells)
            .map(|_| {
                if rng.random::<f64>() < p_frozen {
                    FROZEN_MARKER
                } else {
                    HOLE_MARKER
                }
            })
            .collect();
        let endpoints = rand::seq::index::sample(rng, num_cells, 2);
        cells[endpoints.index(0)] = START_MARKER;
        cells[endpoints.index(1)] = GOAL_MARKER;

        Ok(Self {
            rows: size,
            cols: size,
            cells,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, coordinate: Coordinate) -> Option<char> {
        if coordinate.is_within(self.rows, self.cols) {
            Some(self.cells[coordinate.row * self.cols + coordinate.col])
        } else {
            None
        }
    }

    /// First cell, in row-major order, holding `marker`.
    pub fn find(&self, marker: char) -> Option<Coordinate> {
        self.cells
            .iter()
            .position(|&cell| cell == marker)
            .map(|index| Coordinate::new(index / self.cols, index % self.cols))
    }
}

impl FromStr for GridDescription {
    type Err = MapError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let lines: Vec<Vec<char>> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| line.chars().collect())
            .collect();

        let cols = lines.first().map(Vec::len).ok_or(MapError::Empty)?;
        if let Some((row, line)) = lines.iter().find_position(|line| line.len() != cols) {
            return Err(MapError::RaggedRow {
                row,
                expected: cols,
                found: line.len(),
            });
        }

        Ok(Self {
            rows: lines.len(),
            cols,
            cells: lines.into_iter().flatten().collect(),
        })
    }
}

impl fmt::Display for GridDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self
            .cells
            .chunks(self.cols)
            .map(|row| row.iter().collect::<String>())
            .join("\n");
        write!(f, "{}", text)
    }
}
