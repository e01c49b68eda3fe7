//! Test fixtures for hub-locator.
//!
//! Provides a small set of real Great Britain places plus the unit-square
//! corner scenario used by several tests.

#![allow(dead_code)]

pub mod gb_places;

pub use gb_places::*;

use hub_locator::Point;

/// Four unit-weight points on the corners of a one-degree square.
pub fn unit_square() -> Vec<Point> {
    vec![
        Point::new(0.0, 0.0, 1.0, "south-west"),
        Point::new(0.0, 1.0, 1.0, "south-east"),
        Point::new(1.0, 0.0, 1.0, "north-west"),
        Point::new(1.0, 1.0, 1.0, "north-east"),
    ]
}
