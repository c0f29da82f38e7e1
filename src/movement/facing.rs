//! Token facings and their grid-axis unit vectors

use clap::ValueEnum;
use std::fmt;

use crate::spatial::tiles::GridPosition;

/// Direction a token looks, and therefore moves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum FacingDirection {
    /// Toward increasing y
    #[default]
    Up,
    /// Toward increasing x
    Right,
    /// Toward decreasing y
    Down,
    /// Toward decreasing x
    Left,
}

impl FacingDirection {
    /// All facings in clockwise order starting from up
    pub const ALL: [Self; 4] = [Self::Up, Self::Right, Self::Down, Self::Left];

    /// Unit vector along this facing
    pub const fn direction(self) -> GridPosition {
        match self {
            Self::Up => [0, 1],
            Self::Right => [1, 0],
            Self::Down => [0, -1],
            Self::Left => [-1, 0],
        }
    }
}

// Unrecognized raw values fall back to up rather than failing
impl From<u8> for FacingDirection {
    fn from(value: u8) -> Self {
        match value {
            1 => Self::Right,
            2 => Self::Down,
            3 => Self::Left,
            _ => Self::Up,
        }
    }
}

impl fmt::Display for FacingDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Up => write!(f, "up"),
            Self::Right => write!(f, "right"),
            Self::Down => write!(f, "down"),
            Self::Left => write!(f, "left"),
        }
    }
}
