//! Plateau and rover validation tests
//!
//! These exercise a single rover on its own plateau, without a command center.

use mars_rover::simulation::{Heading, Plateau, Point, Rover, RoverError};

const GRID_MAX_X: i32 = 5;
const GRID_MAX_Y: i32 = 5;

fn plateau() -> Plateau {
    Plateau::new(GRID_MAX_X, GRID_MAX_Y).unwrap()
}

#[test]
fn test_plateau_size_is_set_as_expected() {
    let plateau = plateau();
    assert_eq!(plateau.max(), Point::new(GRID_MAX_X, GRID_MAX_Y));
}

#[test]
fn test_plateau_can_be_resized_to_rectangle_and_square() {
    let mut plateau = plateau();

    plateau.set_extent(3, 4).unwrap();
    assert_eq!(plateau.max(), Point::new(3, 4));

    plateau.set_extent(3, 3).unwrap();
    assert_eq!(plateau.max(), Point::new(3, 3));
}

#[test]
fn test_plateau_rejects_negative_and_empty_sizes() {
    let err = Plateau::new(-1, 0).unwrap_err();
    assert!(matches!(err, RoverError::InvalidExtent(_)));
    assert_eq!(
        err.to_string(),
        "Plateau grid coordinates can't be negative. Please enter a valid plateau grid size."
    );

    let err = Plateau::new(4, -2).unwrap_err();
    assert!(matches!(err, RoverError::InvalidExtent(_)));

    let err = Plateau::new(0, 0).unwrap_err();
    assert!(matches!(err, RoverError::InvalidExtent(_)));
    assert_eq!(err.to_string(), "The plateau grid size must be greater than (0, 0)");
}

#[test]
fn test_failed_resize_keeps_previous_extent() {
    let mut plateau = plateau();
    assert!(plateau.set_extent(0, 0).is_err());
    assert_eq!(plateau.max(), Point::new(GRID_MAX_X, GRID_MAX_Y));
}

#[test]
fn test_single_row_plateau_is_allowed() {
    let plateau = Plateau::new(0, 3).unwrap();
    assert!(plateau.contains(Point::new(0, 3)));
    assert!(!plateau.contains(Point::new(1, 0)));
}

#[test]
fn test_plateau_bounds_are_inclusive() {
    let plateau = plateau();
    assert!(plateau.contains(Point::new(0, 0)));
    assert!(plateau.contains(Point::new(5, 5)));
    assert!(!plateau.contains(Point::new(6, 5)));
    assert!(!plateau.contains(Point::new(5, 6)));
    assert!(!plateau.contains(Point::new(-1, 0)));
    assert!(!plateau.contains(Point::new(0, -1)));
}

#[test]
fn test_rover_position_and_heading_are_set() {
    let rover = Rover::new(plateau(), 1, 2, 'N').unwrap();
    assert_eq!(rover.position(), Point::new(1, 2));
    assert_eq!(rover.heading(), Heading::North);

    let rover = Rover::new(plateau(), 3, 3, 'E').unwrap();
    assert_eq!(rover.position(), Point::new(3, 3));
    assert_eq!(rover.heading(), Heading::East);
}

#[test]
fn test_lowercase_heading_is_accepted() {
    let rover = Rover::new(plateau(), 1, 2, 'n').unwrap();
    assert_eq!(rover.heading(), Heading::North);

    let rover = Rover::new(plateau(), 3, 3, 'e').unwrap();
    assert_eq!(rover.heading(), Heading::East);

    let rover = Rover::new(plateau(), 0, 0, 's').unwrap();
    assert_eq!(rover.heading(), Heading::South);

    let rover = Rover::new(plateau(), 0, 0, 'w').unwrap();
    assert_eq!(rover.heading(), Heading::West);
}

#[test]
fn test_rover_rejects_negative_coordinates() {
    let err = Rover::new(plateau(), -1, 2, 'N').unwrap_err();
    assert_eq!(err, RoverError::NegativeCoordinate);
    assert_eq!(
        err.to_string(),
        "Rover coordinates can't be negative. Please enter a valid Rover position."
    );

    let err = Rover::new(plateau(), 3, -7, 'E').unwrap_err();
    assert_eq!(err, RoverError::NegativeCoordinate);
}

#[test]
fn test_rover_must_be_placed_within_plateau() {
    let err = Rover::new(plateau(), 5, 6, 'N').unwrap_err();
    assert_eq!(err, RoverError::OutOfBoundsPlacement);
    assert_eq!(
        err.to_string(),
        "Rover position should not be outside the plateau grid."
    );

    let err = Rover::new(plateau(), 7, 5, 'N').unwrap_err();
    assert_eq!(err, RoverError::OutOfBoundsPlacement);
}

#[test]
fn test_rover_rejects_unknown_heading() {
    let err = Rover::new(plateau(), 1, 1, 'X').unwrap_err();
    assert_eq!(err, RoverError::InvalidHeading('X'));
}

#[test]
fn test_failed_place_keeps_previous_placement() {
    let mut rover = Rover::new(plateau(), 1, 2, 'N').unwrap();
    assert!(rover.place(9, 9, 'S').is_err());
    assert_eq!(rover.report(), "1 2 N");

    rover.place(4, 4, 's').unwrap();
    assert_eq!(rover.report(), "4 4 S");
}

#[test]
fn test_turning_never_changes_position() {
    let mut rover = Rover::new(plateau(), 2, 2, 'N').unwrap();

    let start = rover.heading();
    for _ in 0..4 {
        rover.turn_left();
    }
    assert_eq!(rover.heading(), start);

    for _ in 0..4 {
        rover.turn_right();
    }
    assert_eq!(rover.heading(), start);

    rover.turn_right();
    assert_eq!(rover.heading(), Heading::East);
    rover.turn_left();
    rover.turn_left();
    assert_eq!(rover.heading(), Heading::West);

    assert_eq!(rover.position(), Point::new(2, 2));
}

#[test]
fn test_heading_rotation_order() {
    assert_eq!(Heading::North.turn_right(), Heading::East);
    assert_eq!(Heading::East.turn_right(), Heading::South);
    assert_eq!(Heading::South.turn_right(), Heading::West);
    assert_eq!(Heading::West.turn_right(), Heading::North);

    assert_eq!(Heading::North.turn_left(), Heading::West);
    assert_eq!(Heading::West.turn_left(), Heading::South);
}

#[test]
fn test_forward_is_a_query() {
    let mut rover = Rover::new(plateau(), 0, 0, 'W').unwrap();
    assert_eq!(rover.forward(), Some(Point::new(-1, 0)));
    assert_eq!(rover.position(), Point::new(0, 0));

    rover.turn_right();
    assert_eq!(rover.forward(), Some(Point::new(0, 1)));

    rover.apply_move(Point::new(0, 1));
    assert_eq!(rover.report(), "0 1 N");
}

#[test]
fn test_step_past_i32_range_has_no_cell() {
    let edge = Point::new(i32::MAX, i32::MIN);
    assert_eq!(edge.step(Heading::East), None);
    assert_eq!(edge.step(Heading::South), None);
    assert_eq!(edge.step(Heading::West), Some(Point::new(i32::MAX - 1, i32::MIN)));
    assert_eq!(Point::new(0, i32::MAX).step(Heading::North), None);

    let plateau = Plateau::new(i32::MAX, 1).unwrap();
    let rover = Rover::new(plateau, i32::MAX, 0, 'E').unwrap();
    assert_eq!(rover.forward(), None);
}
