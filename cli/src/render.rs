use std::io::{self, Write};

use mazerun_core::{Coord2, Grid};

const PLAYER: char = 'X';

/// Draws the grid with the player's cell marked `X`, preceded by a blank line.
pub(crate) fn render(out: &mut impl Write, grid: &Grid, player: Coord2) -> io::Result<()> {
    writeln!(out)?;
    for row in 0..grid.height() {
        let line: String = (0..grid.width())
            .map(|col| {
                if (row, col) == player {
                    PLAYER
                } else {
                    grid[(row, col)].symbol()
                }
            })
            .collect();
        writeln!(out, "{line}")?;
    }
    Ok(())
}
