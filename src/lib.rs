//! Square tile board for a dice-driven board game
//!
//! Provides tile lookup by world position or grid coordinate, paired tile
//! outlining for pointer interaction, and a movement rule that advances a
//! token along its facing by a remapped six-sided die roll.

#![forbid(unsafe_code)]

/// Input/output operations, configuration and error handling
pub mod io;
/// Facings, dice and movement resolution
pub mod movement;
/// Board, tiles and selection
pub mod spatial;

pub use io::error::{BoardError, Result};
pub use movement::{BoundaryPolicy, FacingDirection};
pub use spatial::{Board, BoardConfig, SelectionOrientation, Tile};
