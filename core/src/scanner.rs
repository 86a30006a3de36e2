use core::str::Lines;

use crate::*;

/// Splits maze text into rows.
///
/// A row ends at `\n` or `\r\n`, and a final row without a terminator still counts, so a
/// file with or without a trailing newline has the same height. Shared by
/// [`scan_dimensions`] and [`load_grid`] so both agree on what a row is.
pub(crate) fn maze_rows(text: &str) -> Lines<'_> {
    text.lines()
}

/// Measures a maze file: width is the length of its first row, height its number of rows.
///
/// Only borrows the text, so the same text can be handed to [`load_grid`] afterwards.
pub fn scan_dimensions(text: &str) -> LoadResult<Dimensions> {
    let width = maze_rows(text)
        .next()
        .map_or(0, |row| row.chars().count());
    let height = maze_rows(text).count();
    log::debug!("Scanned maze text: width {width}, height {height}");

    Dimensions::new(height, width)
}
