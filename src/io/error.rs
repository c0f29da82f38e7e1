//! Error types for board construction, lookup and movement

use std::fmt;

use crate::spatial::tiles::{GridPosition, WorldPosition};

/// Main error type for all board operations
#[derive(Debug)]
pub enum BoardError {
    /// Board parameters failed validation at construction
    InvalidConfiguration {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Grid coordinate outside `[0, size)` on either axis
    IndexOutOfRange {
        /// The rejected coordinate
        position: GridPosition,
        /// Board edge length
        size: usize,
    },

    /// Raw selection orientation value that names no orientation
    InvalidOrientation {
        /// The unrecognized value as given
        value: String,
    },

    /// Movement destination lies outside the board
    ///
    /// Only raised under the reject boundary policy; clamp and wrap
    /// policies always land on the board.
    OutOfBounds {
        /// Grid coordinate the token moved from
        from: GridPosition,
        /// Computed destination
        destination: GridPosition,
        /// Board edge length
        size: usize,
    },

    /// World position with a NaN component
    NonFiniteCoordinate {
        /// The rejected world position
        position: WorldPosition,
    },

    /// Writing report output failed
    Io {
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfiguration {
                parameter,
                value,
                reason,
            } => {
                write!(
                    f,
                    "Invalid configuration '{parameter}' = '{value}': {reason}"
                )
            }
            Self::IndexOutOfRange { position, size } => {
                write!(
                    f,
                    "Grid position ({}, {}) is out of range for a {size}x{size} board",
                    position[0], position[1]
                )
            }
            Self::InvalidOrientation { value } => {
                write!(f, "Invalid selection orientation '{value}'")
            }
            Self::OutOfBounds {
                from,
                destination,
                size,
            } => {
                write!(
                    f,
                    "Move from ({}, {}) to ({}, {}) leaves the {size}x{size} board",
                    from[0], from[1], destination[0], destination[1]
                )
            }
            Self::NonFiniteCoordinate { position } => {
                write!(
                    f,
                    "World position ({}, {}, {}) is not finite",
                    position[0], position[1], position[2]
                )
            }
            Self::Io { operation, source } => {
                write!(f, "I/O error during {operation}: {source}")
            }
        }
    }
}

impl std::error::Error for BoardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<std::io::Error> for BoardError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            operation: "unknown",
            source: err,
        }
    }
}

/// Convenience type alias for board results
pub type Result<T> = std::result::Result<T, BoardError>;

/// Create an invalid configuration error
pub fn invalid_configuration(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> BoardError {
    BoardError::InvalidConfiguration {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Attach an operation name to I/O failures
pub trait IoContext<T> {
    /// Convert an I/O error into [`BoardError::Io`] tagged with `operation`
    ///
    /// # Errors
    ///
    /// Propagates the original error with the operation context applied
    fn with_operation(self, operation: &'static str) -> Result<T>;
}

impl<T> IoContext<T> for std::result::Result<T, std::io::Error> {
    fn with_operation(self, operation: &'static str) -> Result<T> {
        self.map_err(|source| BoardError::Io { operation, source })
    }
}
