pub mod fitness;

pub use fitness::{evaluate_assignment, evaluate_single};
