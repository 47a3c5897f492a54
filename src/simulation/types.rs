//! Core types for the rover simulation
//!
//! Plain value types shared by plateaus, rovers and the command center.

use std::fmt;

/// Index of a plateau or rover in the command center's registration order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SimId(pub usize);

/// A wrapper type for plateau IDs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlateauId(pub SimId);

/// A wrapper type for rover IDs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoverId(pub SimId);

/// A cell on a plateau grid
///
/// Signed so that a step off the western or southern edge is representable
/// as a candidate before it gets rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one step towards `heading`
    ///
    /// `None` when the step would overflow `i32`; no plateau contains such a cell.
    pub fn step(&self, heading: Heading) -> Option<Point> {
        let (x, y) = match heading {
            Heading::North => (Some(self.x), self.y.checked_add(1)),
            Heading::East => (self.x.checked_add(1), Some(self.y)),
            Heading::South => (Some(self.x), self.y.checked_sub(1)),
            Heading::West => (self.x.checked_sub(1), Some(self.y)),
        };
        Some(Point::new(x?, y?))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Compass heading of a rover, in clockwise order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Heading {
    North,
    East,
    South,
    West,
}

impl Heading {
    const CLOCKWISE: [Heading; 4] = [Heading::North, Heading::East, Heading::South, Heading::West];

    fn index(self) -> usize {
        match self {
            Heading::North => 0,
            Heading::East => 1,
            Heading::South => 2,
            Heading::West => 3,
        }
    }

    /// Rotate 90 degrees counterclockwise
    pub fn turn_left(self) -> Heading {
        Self::CLOCKWISE[(self.index() + 3) % 4]
    }

    /// Rotate 90 degrees clockwise
    pub fn turn_right(self) -> Heading {
        Self::CLOCKWISE[(self.index() + 1) % 4]
    }

    /// Parse a heading letter (N, E, S, W), ignoring case
    pub fn from_char(c: char) -> Option<Heading> {
        match c.to_ascii_uppercase() {
            'N' => Some(Heading::North),
            'E' => Some(Heading::East),
            'S' => Some(Heading::South),
            'W' => Some(Heading::West),
            _ => None,
        }
    }

    /// The single-letter form used in rover reports
    pub fn as_char(self) -> char {
        match self {
            Heading::North => 'N',
            Heading::East => 'E',
            Heading::South => 'S',
            Heading::West => 'W',
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Heading::North => "North",
            Heading::East => "East",
            Heading::South => "South",
            Heading::West => "West",
        };
        f.write_str(name)
    }
}
