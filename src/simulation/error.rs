//! Error types for the rover simulation

use thiserror::Error;

use super::types::{Heading, PlateauId, Point, RoverId};

/// Every way a plateau, rover or command center operation can be rejected.
///
/// A rejected operation leaves previously committed state untouched, so the
/// caller can retry with corrected input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoverError {
    /// Plateau size is negative or degenerate
    #[error("{0}")]
    InvalidExtent(&'static str),

    #[error("Rover coordinates can't be negative. Please enter a valid Rover position.")]
    NegativeCoordinate,

    #[error("Rover position should not be outside the plateau grid.")]
    OutOfBoundsPlacement,

    #[error("Invalid heading '{0}'. Expected one of N, E, S, W.")]
    InvalidHeading(char),

    /// Empty command string or a character outside L, R, M
    #[error("{0}")]
    InvalidCommand(String),

    /// A forward move would leave the plateau; carries the last committed state
    #[error(
        "Rover cannot move outside the plateau. It now stands at the position {position} \
         facing {heading}. Please modify the instructions."
    )]
    OutOfBoundsMove { position: Point, heading: Heading },

    /// A forward move would land on another rover; carries the last committed state
    #[error(
        "Rover cannot move further. There is a collision ahead. It now stands at the \
         position {position} facing {heading}. Please modify the instructions."
    )]
    Collision { position: Point, heading: Heading },

    #[error("No plateau has been added to the command center")]
    NoPlateau,

    #[error("Plateau {0:?} is not registered with the command center")]
    UnknownPlateau(PlateauId),

    #[error("Rover {0:?} is not registered with the command center")]
    UnknownRover(RoverId),
}

pub type RoverResult<T> = std::result::Result<T, RoverError>;
