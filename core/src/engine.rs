use serde::{Deserialize, Serialize};

use crate::*;

/// Computes the cell one step from `from` in `direction`.
///
/// Bounds are checked before walls, and nothing is mutated either way.
pub fn try_move(grid: &Grid, from: Coord2, direction: Direction) -> MoveResult<Coord2> {
    let candidate = apply_direction(from, direction, grid.size())
        .ok_or(MoveError::OutOfBounds { from, direction })?;

    if grid[candidate].is_wall() {
        return Err(MoveError::WallCollision { at: candidate });
    }

    Ok(candidate)
}

/// Whether `player` stands on the grid's end cell.
pub fn has_won(grid: &Grid, player: Coord2) -> bool {
    player == grid.end()
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    Playing,
    Won,
}

impl SessionState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won)
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::Playing
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved,
    Won,
}

impl MoveOutcome {
    pub const fn is_won(self) -> bool {
        matches!(self, Self::Won)
    }
}

/// One run of the game: the loaded grid and the player walking it.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Session {
    grid: Grid,
    player: Coord2,
    state: SessionState,
}

impl Session {
    pub fn new(grid: Grid) -> Self {
        let player = grid.start();
        Self {
            grid,
            player,
            state: Default::default(),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn player(&self) -> Coord2 {
        self.player
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_won(&self) -> bool {
        self.state.is_finished()
    }

    /// Moves by a raw direction key, see [`Direction::try_from`].
    pub fn step(&mut self, key: char) -> MoveResult<MoveOutcome> {
        let direction = Direction::try_from(key)?;
        self.move_player(direction)
    }

    pub fn move_player(&mut self, direction: Direction) -> MoveResult<MoveOutcome> {
        self.check_playing()?;

        let next = try_move(&self.grid, self.player, direction).inspect_err(|err| {
            log::debug!("Rejected {direction:?} from {:?}: {err}", self.player);
        })?;
        log::trace!("Moved {direction:?} from {:?} to {next:?}", self.player);
        self.player = next;

        if has_won(&self.grid, next) {
            log::debug!("Reached the end at {next:?}");
            self.state = SessionState::Won;
            Ok(MoveOutcome::Won)
        } else {
            Ok(MoveOutcome::Moved)
        }
    }

    fn check_playing(&self) -> MoveResult<()> {
        if self.state.is_finished() {
            Err(MoveError::AlreadyWon)
        } else {
            Ok(())
        }
    }
}
