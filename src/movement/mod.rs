//! Dice-driven token movement

/// Movement die and the high-roll remap
pub mod dice;
/// Token facings
pub mod facing;
/// Destination resolution and boundary policies
pub mod resolver;
/// Batched movement trials
pub mod trials;

pub use facing::FacingDirection;
pub use resolver::{BoundaryPolicy, MovementResolver};
