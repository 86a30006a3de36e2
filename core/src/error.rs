use core::fmt;
use serde::Serialize;
use thiserror::Error;

use crate::{Cell, Coord2, Direction, MAX_DIM, MIN_DIM};

/// Which measurement of a maze file broke the size bounds.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub enum Dimension {
    Width,
    Height,
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Width => "width",
            Self::Height => "height",
        })
    }
}

/// Reasons a maze file is rejected. None of these are recoverable for the file at hand.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum LoadError {
    #[error("Invalid {which} of maze: {measured}, must be between {min} and {max}", min = MIN_DIM, max = MAX_DIM)]
    Dimension { which: Dimension, measured: usize },
    #[error("Invalid character {symbol:?} at row {row}, column {col}")]
    Alphabet { row: usize, col: usize, symbol: char },
    #[error("Row {row} is {actual} cells wide, all rows must be {expected} cells wide")]
    RowLength {
        row: usize,
        expected: usize,
        actual: usize,
    },
    #[error("Not enough memory to hold the maze")]
    Allocation,
    #[error("Maze has no {:?} cell", .marker.symbol())]
    MissingMarker { marker: Cell },
    #[error("Maze has more than one {:?} cell, at {:?} and {:?}", .marker.symbol(), .first, .second)]
    DuplicateMarker {
        marker: Cell,
        first: Coord2,
        second: Coord2,
    },
    #[error("Grid storage does not match declared size")]
    GridShape,
}

/// Rejected moves. The player stays where it was and the session goes on.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error("You cannot go outside the maze")]
    OutOfBounds { from: Coord2, direction: Direction },
    #[error("You have hit a wall")]
    WallCollision { at: Coord2 },
    #[error("Invalid direction: {0:?}")]
    InvalidDirection(char),
    #[error("Maze already solved, no new moves are accepted")]
    AlreadyWon,
}

pub type LoadResult<T> = core::result::Result<T, LoadError>;

pub type MoveResult<T> = core::result::Result<T, MoveError>;
