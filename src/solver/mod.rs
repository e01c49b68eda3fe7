pub mod local_search;
pub mod multi_start;
pub mod partition;
pub mod search;
pub mod single_hub;
pub mod tour;

pub use multi_start::{run_multi_start, select_best, MultiStartResult, RestartSummary};
pub use partition::optimise_partition;
pub use single_hub::{locate_single_hub, SingleHubResult};
pub use tour::{build_tour, build_tours};
