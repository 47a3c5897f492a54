//! Mars Rover Library
//!
//! Simulates rovers driving on rectangular plateaus under L/R/M command strings,
//! rejecting moves that leave the plateau or run into another rover.

pub mod simulation;
