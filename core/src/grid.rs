use alloc::vec::Vec;
use core::ops::Index;
use core::str::FromStr;
use ndarray::Array2;
use serde::Serialize;

use crate::*;

/// Validated rectangular maze, fixed after loading.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Grid {
    cells: Array2<Cell>,
    start: Coord2,
    end: Coord2,
}

impl Grid {
    pub(crate) fn from_parts(
        dimensions: Dimensions,
        cells: Vec<Cell>,
        start: Coord2,
        end: Coord2,
    ) -> LoadResult<Self> {
        let shape = (usize::from(dimensions.height), usize::from(dimensions.width));
        let cells = Array2::from_shape_vec(shape, cells).map_err(|_| LoadError::GridShape)?;
        Ok(Self { cells, start, end })
    }

    pub fn dimensions(&self) -> Dimensions {
        let (height, width) = self.size();
        Dimensions { height, width }
    }

    /// Size as `(height, width)`.
    pub fn size(&self) -> Coord2 {
        let dim = self.cells.dim();
        // both axes were checked against MAX_DIM on the way in
        (dim.0 as Coord, dim.1 as Coord)
    }

    pub fn height(&self) -> Coord {
        self.size().0
    }

    pub fn width(&self) -> Coord {
        self.size().1
    }

    pub fn start(&self) -> Coord2 {
        self.start
    }

    pub fn end(&self) -> Coord2 {
        self.end
    }

    pub fn contains(&self, (row, col): Coord2) -> bool {
        let (height, width) = self.size();
        row < height && col < width
    }

    /// Bounds-checked cell lookup.
    pub fn cell_at(&self, coords: Coord2) -> Option<Cell> {
        self.cells.get(coords.to_nd_index()).copied()
    }
}

impl Index<Coord2> for Grid {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

impl FromStr for Grid {
    type Err = LoadError;

    fn from_str(text: &str) -> LoadResult<Self> {
        load_maze(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAZE: &str = "#####\n#S  #\n# # #\n#  E#\n#####\n";

    #[test]
    fn exposes_loaded_layout() {
        let grid: Grid = MAZE.parse().unwrap();

        assert_eq!(grid.size(), (5, 5));
        assert_eq!(
            grid.dimensions(),
            Dimensions {
                height: 5,
                width: 5
            }
        );
        assert_eq!(grid.start(), (1, 1));
        assert_eq!(grid.end(), (3, 3));
        assert_eq!(grid[(1, 1)], Cell::Start);
        assert_eq!(grid[(2, 2)], Cell::Wall);
        assert_eq!(grid[(3, 3)], Cell::End);
    }

    #[test]
    fn cell_at_is_bounds_checked() {
        let grid: Grid = MAZE.parse().unwrap();

        assert_eq!(grid.cell_at((4, 4)), Some(Cell::Wall));
        assert_eq!(grid.cell_at((5, 0)), None);
        assert_eq!(grid.cell_at((0, 5)), None);
        assert!(grid.contains((4, 4)));
        assert!(!grid.contains((4, 5)));
    }

    #[test]
    fn serializes_cells_and_markers() {
        let grid: Grid = MAZE.parse().unwrap();

        let json = serde_json::to_value(&grid).unwrap();

        assert_eq!(json["start"][0], 1);
        assert_eq!(json["start"][1], 1);
        assert_eq!(json["end"][0], 3);
        assert_eq!(json["end"][1], 3);
        assert_eq!(json["cells"]["data"][12], "Wall");
        assert_eq!(json["cells"]["data"][18], "End");
    }
}
