//! Destination arithmetic for die-driven movement

use clap::ValueEnum;
use log::debug;

use crate::io::error::{BoardError, Result, invalid_configuration};
use crate::movement::dice::effective_distance;
use crate::movement::facing::FacingDirection;
use crate::spatial::tiles::GridPosition;

/// What a move does when its destination falls off the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum BoundaryPolicy {
    /// Fail with [`BoardError::OutOfBounds`]
    #[default]
    Reject,
    /// Stop at the last tile on each axis
    Clamp,
    /// Re-enter from the opposite edge
    Wrap,
}

/// Resolves die rolls into destination coordinates on a square board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovementResolver {
    size: i32,
    policy: BoundaryPolicy,
}

impl MovementResolver {
    /// Create a resolver for a board of edge length `size`
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidConfiguration`] if `size` is not positive
    pub fn new(size: i32, policy: BoundaryPolicy) -> Result<Self> {
        if size <= 0 {
            return Err(invalid_configuration(
                "size",
                &size,
                &"board size must be positive",
            ));
        }
        Ok(Self { size, policy })
    }

    /// Boundary policy in effect
    pub const fn policy(&self) -> BoundaryPolicy {
        self.policy
    }

    /// Destination reached from `from` with a raw die `roll`
    ///
    /// Values that are not die faces leave the token where it is.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfBounds`] if the destination is off the board
    /// and the policy is [`BoundaryPolicy::Reject`]
    pub fn resolve(
        &self,
        from: GridPosition,
        roll: u8,
        facing: FacingDirection,
    ) -> Result<GridPosition> {
        let Some(distance) = effective_distance(roll) else {
            debug!("roll {roll} is not a die face, staying at {from:?}");
            return Ok(from);
        };

        let destination = self.step(from, facing, i32::from(distance))?;
        debug!("roll {roll} -> {distance} steps {facing} from {from:?} to {destination:?}");
        Ok(destination)
    }

    /// Move `distance` tiles along `facing`, applying the boundary policy
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfBounds`] if the destination is off the board
    /// and the policy is [`BoundaryPolicy::Reject`], or under any policy if
    /// the destination does not fit in an `i32`
    pub fn step(
        &self,
        from: GridPosition,
        facing: FacingDirection,
        distance: i32,
    ) -> Result<GridPosition> {
        let [dx, dy] = facing.direction();
        let offset = |origin: i32, unit: i32| {
            unit.checked_mul(distance).and_then(|delta| origin.checked_add(delta))
        };
        let (Some(x), Some(y)) = (offset(from[0], dx), offset(from[1], dy)) else {
            return Err(BoardError::OutOfBounds {
                from,
                destination: [
                    from[0].saturating_add(dx.saturating_mul(distance)),
                    from[1].saturating_add(dy.saturating_mul(distance)),
                ],
                size: self.size.unsigned_abs() as usize,
            });
        };
        let target = [x, y];

        match self.policy {
            BoundaryPolicy::Reject => {
                if self.contains(target) {
                    Ok(target)
                } else {
                    Err(BoardError::OutOfBounds {
                        from,
                        destination: target,
                        size: self.size.unsigned_abs() as usize,
                    })
                }
            }
            BoundaryPolicy::Clamp => Ok(target.map(|axis| axis.clamp(0, self.size - 1))),
            BoundaryPolicy::Wrap => Ok(target.map(|axis| axis.rem_euclid(self.size))),
        }
    }

    const fn contains(&self, position: GridPosition) -> bool {
        position[0] >= 0 && position[0] < self.size && position[1] >= 0 && position[1] < self.size
    }
}
