use serde::{Deserialize, Serialize};

/// Classification of a single maze cell, one per symbol of the maze file alphabet.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    Open,
    Wall,
    Start,
    End,
}

impl Cell {
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            ' ' => Some(Self::Open),
            '#' => Some(Self::Wall),
            'S' => Some(Self::Start),
            'E' => Some(Self::End),
            _ => None,
        }
    }

    pub const fn symbol(self) -> char {
        match self {
            Self::Open => ' ',
            Self::Wall => '#',
            Self::Start => 'S',
            Self::End => 'E',
        }
    }

    pub const fn is_wall(self) -> bool {
        matches!(self, Self::Wall)
    }
}
