//! Maze file validation and the movement rules of the maze game.
//!
//! Loading goes through [`scan_dimensions`] and [`load_grid`] (or [`load_maze`] for both),
//! after which a [`Session`] moves the player until it reaches the grid's end cell.
#![no_std]

extern crate alloc;

use serde::Serialize;

pub use cell::*;
pub use engine::*;
pub use error::*;
pub use grid::*;
pub use loader::*;
pub use scanner::*;
pub use types::*;

mod cell;
mod engine;
mod error;
mod grid;
mod loader;
mod scanner;
mod types;

/// Smallest accepted width or height of a maze.
pub const MIN_DIM: usize = 5;

/// Largest accepted width or height of a maze.
pub const MAX_DIM: usize = 100;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Dimensions {
    pub height: Coord,
    pub width: Coord,
}

impl Dimensions {
    /// Checks both measurements against [`MIN_DIM`]`..=`[`MAX_DIM`], width first.
    pub fn new(height: usize, width: usize) -> LoadResult<Self> {
        let width = check_bound(Dimension::Width, width)?;
        let height = check_bound(Dimension::Height, height)?;
        Ok(Self { height, width })
    }

    pub const fn total_cells(&self) -> usize {
        self.height as usize * self.width as usize
    }
}

fn check_bound(which: Dimension, measured: usize) -> LoadResult<Coord> {
    if !(MIN_DIM..=MAX_DIM).contains(&measured) {
        return Err(LoadError::Dimension { which, measured });
    }
    Coord::try_from(measured).map_err(|_| LoadError::Dimension { which, measured })
}
