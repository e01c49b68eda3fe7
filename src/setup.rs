pub mod init;
pub mod init_types;

pub use init::{load_points, load_points_from_reader, seed_facilities};
