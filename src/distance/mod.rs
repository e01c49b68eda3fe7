pub mod haversine;
pub mod matrix;

pub use haversine::{raw_distance, weighted_distance};
pub use matrix::distance_matrix;
