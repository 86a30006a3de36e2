//! Process exit statuses of the `mazerun` binary.

/// Reached the exit, passed `--check`, or input ended.
pub const OK: u8 = 0;
/// Wrong arguments, or the terminal could not be read from or written to.
pub const ARG_ERROR: u8 = 1;
/// The maze file could not be opened or read.
pub const FILE_ERROR: u8 = 2;
/// The maze file was read but failed validation.
pub const MAZE_ERROR: u8 = 3;
