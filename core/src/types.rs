use serde::{Deserialize, Serialize};

use crate::{MoveError, MoveResult};

/// Single coordinate axis used for grid width, height, and positions.
pub type Coord = u8;

/// Two-dimensional coordinates `(row, column)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Row and column displacement of a single step.
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Self::Up => (-1, 0),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
            Self::Right => (0, 1),
        }
    }

    /// Keyboard symbol the direction is entered with.
    pub const fn key(self) -> char {
        match self {
            Self::Up => 'W',
            Self::Down => 'S',
            Self::Left => 'A',
            Self::Right => 'D',
        }
    }
}

impl TryFrom<char> for Direction {
    type Error = MoveError;

    /// Maps `W`/`A`/`S`/`D` in either case.
    fn try_from(symbol: char) -> MoveResult<Self> {
        match symbol.to_ascii_uppercase() {
            'W' => Ok(Self::Up),
            'S' => Ok(Self::Down),
            'A' => Ok(Self::Left),
            'D' => Ok(Self::Right),
            _ => Err(MoveError::InvalidDirection(symbol)),
        }
    }
}

/// Steps `coords` once in `direction`, returning a value only when it remains in `bounds`.
pub fn apply_direction(coords: Coord2, direction: Direction, bounds: Coord2) -> Option<Coord2> {
    let (row, col) = coords;
    let (d_row, d_col) = direction.delta();
    let (max_row, max_col) = bounds;

    let next_row = row.checked_add_signed(d_row)?;
    if next_row >= max_row {
        return None;
    }

    let next_col = col.checked_add_signed(d_col)?;
    if next_col >= max_col {
        return None;
    }

    Some((next_row, next_col))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_keys_are_case_insensitive() {
        for direction in Direction::ALL {
            let key = direction.key();
            assert_eq!(Direction::try_from(key), Ok(direction));
            assert_eq!(Direction::try_from(key.to_ascii_lowercase()), Ok(direction));
        }
    }

    #[test]
    fn unknown_direction_key_is_rejected() {
        assert_eq!(
            Direction::try_from('M'),
            Err(MoveError::InvalidDirection('M'))
        );
        assert_eq!(
            Direction::try_from('é'),
            Err(MoveError::InvalidDirection('é'))
        );
    }

    #[test]
    fn apply_direction_stays_inside_bounds() {
        let bounds = (5, 7);
        assert_eq!(apply_direction((0, 0), Direction::Up, bounds), None);
        assert_eq!(apply_direction((0, 0), Direction::Left, bounds), None);
        assert_eq!(apply_direction((4, 6), Direction::Down, bounds), None);
        assert_eq!(apply_direction((4, 6), Direction::Right, bounds), None);
        assert_eq!(apply_direction((2, 3), Direction::Up, bounds), Some((1, 3)));
        assert_eq!(apply_direction((2, 3), Direction::Down, bounds), Some((3, 3)));
        assert_eq!(apply_direction((2, 3), Direction::Left, bounds), Some((2, 2)));
        assert_eq!(apply_direction((2, 3), Direction::Right, bounds), Some((2, 4)));
    }
}
