//! Standalone rover simulation module
//!
//! This module contains all the plateau, rover and command center logic.
//! It can be driven from tests or from the headless runner.

mod command;
mod command_center;
mod error;
mod plateau;
mod rover;
mod scenario;
mod types;

pub use command::{parse_commands, Command};
pub use command_center::CommandCenter;
pub use error::{RoverError, RoverResult};
pub use plateau::Plateau;
pub use rover::Rover;
pub use scenario::{RoverOutcome, RoverSpec, Scenario};
pub use types::{Heading, PlateauId, Point, RoverId, SimId};
