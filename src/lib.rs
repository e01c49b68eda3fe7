//! Population-weighted hub location.
//!
//! Finds one or more facility locations that minimize the sum of weighted
//! great-circle distances to a set of demand points, using a grid hill climb,
//! a partition-and-relocate loop and concurrent random restarts. Tours over
//! each hub's points are built with a nearest-neighbour heuristic.

pub mod config;
pub mod distance;
pub mod domain;
pub mod error;
pub mod evaluation;
pub mod fixtures;
pub mod report;
pub mod setup;
pub mod solver;

pub use config::{ClimbParameters, MultiStartParameters, RunConfig};
pub use domain::types::{Assignment, Bounds, Facility, Point, SearchResult, Tour, TourStop};
pub use error::{HubError, Result};
