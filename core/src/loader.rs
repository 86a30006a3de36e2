use alloc::vec::Vec;

use crate::*;

/// Position of the `S` or `E` cell found so far.
#[derive(Debug)]
struct MarkerSlot {
    marker: Cell,
    at: Option<Coord2>,
}

impl MarkerSlot {
    const fn new(marker: Cell) -> Self {
        Self { marker, at: None }
    }

    fn record(&mut self, coords: Coord2) -> LoadResult<()> {
        match self.at {
            Some(first) => Err(LoadError::DuplicateMarker {
                marker: self.marker,
                first,
                second: coords,
            }),
            None => {
                self.at = Some(coords);
                Ok(())
            }
        }
    }

    fn found(self) -> LoadResult<Coord2> {
        self.at.ok_or(LoadError::MissingMarker {
            marker: self.marker,
        })
    }
}

/// Builds a [`Grid`] from maze text whose size was already measured by [`scan_dimensions`].
///
/// Every cell must come from the maze alphabet, every row must be exactly
/// `dimensions.width` cells wide, and exactly one `S` and one `E` must appear. Text with
/// more or fewer rows than `dimensions.height` fails with [`LoadError::GridShape`].
///
/// [`LoadError::Allocation`] is only reachable when the allocator refuses the reservation;
/// a 100x100 grid is too small to trigger it from a test.
pub fn load_grid(text: &str, dimensions: Dimensions) -> LoadResult<Grid> {
    let expected = usize::from(dimensions.width);
    let mut cells = Vec::new();
    cells
        .try_reserve_exact(dimensions.total_cells())
        .map_err(|_| LoadError::Allocation)?;

    let mut start = MarkerSlot::new(Cell::Start);
    let mut end = MarkerSlot::new(Cell::End);

    let mut rows = maze_rows(text);
    for row in 0..dimensions.height {
        let line = rows.next().ok_or(LoadError::GridShape)?;
        for (col, symbol) in (0..dimensions.width).zip(line.chars()) {
            let cell = Cell::from_symbol(symbol).ok_or(LoadError::Alphabet {
                row: row.into(),
                col: col.into(),
                symbol,
            })?;
            match cell {
                Cell::Start => start.record((row, col))?,
                Cell::End => end.record((row, col))?,
                Cell::Open | Cell::Wall => {}
            }
            cells.push(cell);
        }

        let actual = line.chars().count();
        if actual != expected {
            return Err(LoadError::RowLength {
                row: row.into(),
                expected,
                actual,
            });
        }
    }
    if rows.next().is_some() {
        return Err(LoadError::GridShape);
    }

    let start = start.found()?;
    let end = end.found()?;
    log::debug!(
        "Loaded {}x{} maze, start {start:?}, end {end:?}",
        dimensions.height,
        dimensions.width
    );

    Grid::from_parts(dimensions, cells, start, end)
}

/// Measures and loads maze text in one go.
pub fn load_maze(text: &str) -> LoadResult<Grid> {
    let dimensions = scan_dimensions(text)?;
    load_grid(text, dimensions)
}
