//! Tile cells and the coordinate types shared across the board
//!
//! A tile knows where it sits in world space and on the grid; both are fixed
//! at construction. Only the highlight color changes afterwards.

use crate::io::configuration::DEFAULT_TILE_COLOR;

/// Integer grid coordinate `[x, y]`, zero-based
pub type GridPosition = [i32; 2];

/// Continuous world-space coordinate `[x, y, z]`; the board lies on `y = 0`
pub type WorldPosition = [f32; 3];

/// RGBA highlight color
pub type Color = [u8; 4];

/// A single board cell
#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    world_position: WorldPosition,
    grid_position: GridPosition,
    color: Color,
}

impl Tile {
    /// Create a tile with the default highlight color
    pub const fn new(world_position: WorldPosition, grid_position: GridPosition) -> Self {
        Self {
            world_position,
            grid_position,
            color: DEFAULT_TILE_COLOR,
        }
    }

    /// World-space center of the tile
    pub const fn world_position(&self) -> WorldPosition {
        self.world_position
    }

    /// Grid coordinate of the tile
    pub const fn grid_position(&self) -> GridPosition {
        self.grid_position
    }

    /// Current highlight color
    pub const fn color(&self) -> Color {
        self.color
    }

    /// Replace the highlight color
    pub const fn set_color(&mut self, color: Color) {
        self.color = color;
    }
}
