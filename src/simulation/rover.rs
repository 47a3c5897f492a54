//! Rover state for the rover simulation
//!
//! A rover only knows its own plateau. Checks against other rovers live in
//! the command center.

use super::error::{RoverError, RoverResult};
use super::plateau::Plateau;
use super::types::{Heading, Point};

/// A rover standing on a plateau
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rover {
    plateau: Plateau,
    position: Point,
    heading: Heading,
}

impl Rover {
    /// Place a new rover on `plateau`; see [`Rover::place`] for validation
    pub fn new(plateau: Plateau, x: i32, y: i32, heading: char) -> RoverResult<Self> {
        let (position, heading) = Self::validate_placement(&plateau, x, y, heading)?;
        Ok(Self {
            plateau,
            position,
            heading,
        })
    }

    /// Move the rover to `(x, y)` facing `heading` (N, E, S or W, any case)
    ///
    /// On error the rover keeps its previous placement.
    pub fn place(&mut self, x: i32, y: i32, heading: char) -> RoverResult<()> {
        let (position, heading) = Self::validate_placement(&self.plateau, x, y, heading)?;
        self.position = position;
        self.heading = heading;
        Ok(())
    }

    fn validate_placement(
        plateau: &Plateau,
        x: i32,
        y: i32,
        heading: char,
    ) -> RoverResult<(Point, Heading)> {
        let heading = Heading::from_char(heading).ok_or(RoverError::InvalidHeading(heading))?;
        if x < 0 || y < 0 {
            return Err(RoverError::NegativeCoordinate);
        }
        let position = Point::new(x, y);
        if !plateau.contains(position) {
            return Err(RoverError::OutOfBoundsPlacement);
        }
        Ok((position, heading))
    }

    pub fn plateau(&self) -> &Plateau {
        &self.plateau
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    pub fn turn_left(&mut self) {
        self.heading = self.heading.turn_left();
    }

    pub fn turn_right(&mut self) {
        self.heading = self.heading.turn_right();
    }

    /// The cell one step ahead, without moving
    ///
    /// `None` if that cell cannot be represented.
    pub fn forward(&self) -> Option<Point> {
        self.position.step(self.heading)
    }

    /// Commit a move to a point the caller has already validated
    pub fn apply_move(&mut self, point: Point) {
        self.position = point;
    }

    /// Current state as `"X Y D"`, e.g. `"1 3 N"`
    pub fn report(&self) -> String {
        format!(
            "{} {} {}",
            self.position.x,
            self.position.y,
            self.heading.as_char()
        )
    }
}
