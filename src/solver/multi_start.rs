use std::sync::mpsc;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info, span, warn, Level};

use crate::config::MultiStartParameters;
use crate::domain::types::{Bounds, Point, SearchResult};
use crate::error::{HubError, Result};
use crate::setup::init::seed_facilities;
use crate::solver::partition::optimise_partition;

/// Outcome of one restart, in the order the driver received it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RestartSummary {
    pub restart: usize,
    pub fitness: f64,
    pub iterations: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MultiStartResult {
    pub best: SearchResult,
    pub best_restart: usize,
    pub restarts: Vec<RestartSummary>,
}

/// Deterministic per-restart generator when a base seed is given.
pub fn restart_rng(seed: Option<u64>, restart: usize) -> ChaCha8Rng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed.wrapping_add(restart as u64)),
        None => ChaCha8Rng::from_entropy(),
    }
}

/// Run `params.restarts` independent randomized partition searches on the
/// rayon pool and keep the lowest-fitness result.
///
/// Each restart sends its result over its own clone of a channel sender; the
/// driver drains the channel after every task has finished and folds the
/// results in arrival order, so ties go to the first restart to complete.
pub fn run_multi_start(
    points: &[Point],
    bounds: &Bounds,
    params: &MultiStartParameters,
) -> Result<MultiStartResult> {
    params.validate()?;
    if !bounds.is_valid() {
        return Err(HubError::invalid_parameters(format!(
            "sampling bounds are not a valid region: {:?}",
            bounds
        )));
    }

    info!(
        "Starting {} restarts for {} hubs over {} points",
        params.restarts,
        params.hubs,
        points.len()
    );

    let (sender, receiver) = mpsc::channel::<(usize, Result<SearchResult>)>();

    (0..params.restarts)
        .into_par_iter()
        .for_each_with(sender, |sender, restart| {
            let restart_span = span!(Level::DEBUG, "restart", restart);
            let _guard = restart_span.enter();

            let mut rng = restart_rng(params.seed, restart);
            let seeds = seed_facilities(bounds, params.hubs, points, &mut rng);
            let outcome = optimise_partition(seeds, points, &params.climb, params.max_passes);

            // the receiver outlives the pool, so a send can only fail if the driver is gone
            let _ = sender.send((restart, outcome));
        });

    let outcome = select_best(receiver)?;
    info!(
        "Best of {} restarts: restart {} with fitness {:.3}",
        outcome.restarts.len(),
        outcome.best_restart,
        outcome.best.fitness()
    );
    Ok(outcome)
}

/// Fold restart outcomes in the order given, keeping the lowest fitness.
///
/// Ties keep the earlier result. Failed restarts are logged and skipped; if
/// none succeeded the first error is returned.
pub fn select_best<I>(outcomes: I) -> Result<MultiStartResult>
where
    I: IntoIterator<Item = (usize, Result<SearchResult>)>,
{
    let mut summaries = Vec::new();
    let mut best: Option<(usize, SearchResult)> = None;
    let mut first_error: Option<HubError> = None;

    for (restart, outcome) in outcomes {
        match outcome {
            Ok(result) => {
                debug!(
                    "Restart {} finished with fitness {:.3} after {} passes",
                    restart,
                    result.fitness(),
                    result.iterations
                );
                summaries.push(RestartSummary {
                    restart,
                    fitness: result.fitness(),
                    iterations: result.iterations,
                });
                let replace = match &best {
                    Some((_, current)) => result.fitness() < current.fitness(),
                    None => true,
                };
                if replace {
                    best = Some((restart, result));
                }
            }
            Err(err) => {
                warn!("Restart {} failed: {}", restart, err);
                first_error.get_or_insert(err);
            }
        }
    }

    match best {
        Some((best_restart, best)) => Ok(MultiStartResult {
            best,
            best_restart,
            restarts: summaries,
        }),
        None => Err(first_error
            .unwrap_or_else(|| HubError::invalid_parameters("no restart produced a result"))),
    }
}
