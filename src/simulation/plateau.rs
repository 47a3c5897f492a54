//! Plateau bounds for the rover simulation

use super::error::{RoverError, RoverResult};
use super::types::Point;

/// A rectangular plateau spanning `(0, 0)` to `max` inclusive
///
/// Rovers keep their own copy of the plateau they were placed on, so resizing
/// a plateau after rovers are deployed does not move them onto the new bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Plateau {
    max: Point,
}

impl Plateau {
    pub fn new(max_x: i32, max_y: i32) -> RoverResult<Self> {
        let mut plateau = Self { max: Point::default() };
        plateau.set_extent(max_x, max_y)?;
        Ok(plateau)
    }

    /// Replace the inclusive upper-right corner
    pub fn set_extent(&mut self, max_x: i32, max_y: i32) -> RoverResult<()> {
        if max_x < 0 || max_y < 0 {
            return Err(RoverError::InvalidExtent(
                "Plateau grid coordinates can't be negative. Please enter a valid plateau grid size.",
            ));
        }
        if max_x == 0 && max_y == 0 {
            return Err(RoverError::InvalidExtent(
                "The plateau grid size must be greater than (0, 0)",
            ));
        }
        self.max = Point::new(max_x, max_y);
        Ok(())
    }

    pub fn max(&self) -> Point {
        self.max
    }

    pub fn contains(&self, point: Point) -> bool {
        (0..=self.max.x).contains(&point.x) && (0..=self.max.y).contains(&point.y)
    }

    /// Number of distinct cells, `(max_x + 1) * (max_y + 1)`
    pub fn cell_count(&self) -> usize {
        (self.max.x as usize + 1) * (self.max.y as usize + 1)
    }
}
