//! Board layout and tile bookkeeping
//!
//! This module contains spatial-related functionality including:
//! - The board and its world/grid coordinate conversion
//! - Tile cells and shared coordinate types
//! - The outlined tile selection

/// Board construction, lookup and highlighting
pub mod grid;
/// Outlined tile tracking and selection orientation
pub mod selection;
/// Tile cells and coordinate type aliases
pub mod tiles;

pub use grid::{Board, BoardConfig};
pub use selection::{SelectionOrientation, SelectionSet};
pub use tiles::{Color, GridPosition, Tile, WorldPosition};
