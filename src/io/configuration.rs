//! Board constants and runtime configuration defaults

use crate::spatial::tiles::Color;

/// Edge length of the default board
pub const DEFAULT_BOARD_SIZE: i32 = 7;

/// World-space edge length of one tile
pub const DEFAULT_TILE_SIZE: f32 = 1.0;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed board edge length
pub const MAX_BOARD_SIZE: i32 = 4_096;

/// Color of a tile that has never been highlighted (opaque white)
pub const DEFAULT_TILE_COLOR: Color = [255, 255, 255, 255];

/// Number of faces on the movement die
pub const DIE_FACES: u8 = 6;

/// Longest step a single roll can produce after remapping
pub const MAX_STEP_DISTANCE: usize = 4;

// Default values for configurable parameters
/// Fixed seed for reproducible trials
pub const DEFAULT_SEED: u64 = 42;

/// Default number of movement trials for the CLI
pub const DEFAULT_TRIALS: usize = 10_000;

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
/// Trials between progress bar refreshes
pub const PROGRESS_UPDATE_INTERVAL: usize = 512;
