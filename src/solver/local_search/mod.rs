pub mod climb;
pub mod neighbourhood;

pub use climb::*;
pub use neighbourhood::*;
