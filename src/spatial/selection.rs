//! Outlined tile tracking
//!
//! The selection holds grid coordinates rather than tile references, so it
//! never outlives or aliases the tiles it names. The board validates every
//! coordinate before it is stored.

use std::fmt;
use std::str::FromStr;

use crate::io::error::BoardError;
use crate::spatial::tiles::GridPosition;

/// Axis along which a selection pair straddles a world position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectionOrientation {
    /// Pair of tiles split along the x axis
    Horizontal,
    /// Pair of tiles split along the z axis
    Vertical,
}

impl TryFrom<u8> for SelectionOrientation {
    type Error = BoardError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Horizontal),
            1 => Ok(Self::Vertical),
            _ => Err(BoardError::InvalidOrientation {
                value: value.to_string(),
            }),
        }
    }
}

impl FromStr for SelectionOrientation {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "horizontal" => Ok(Self::Horizontal),
            "vertical" => Ok(Self::Vertical),
            _ => Err(BoardError::InvalidOrientation {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for SelectionOrientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Horizontal => write!(f, "horizontal"),
            Self::Vertical => write!(f, "vertical"),
        }
    }
}

/// Ordered set of currently outlined tiles
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    positions: Vec<GridPosition>,
}

impl SelectionSet {
    /// Create an empty selection
    pub const fn new() -> Self {
        Self {
            positions: Vec::new(),
        }
    }

    /// Drop every outlined tile
    pub fn clear(&mut self) {
        self.positions.clear();
    }

    /// Append a tile coordinate, keeping insertion order
    pub fn push(&mut self, position: GridPosition) {
        self.positions.push(position);
    }

    /// Outlined coordinates in insertion order
    pub fn positions(&self) -> &[GridPosition] {
        &self.positions
    }

    /// Whether `position` is outlined
    pub fn contains(&self, position: GridPosition) -> bool {
        self.positions.contains(&position)
    }

    /// Number of outlined entries
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether nothing is outlined
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
