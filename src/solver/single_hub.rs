use rand::Rng;
use tracing::info;

use crate::config::ClimbParameters;
use crate::domain::types::{Bounds, Facility, Point};
use crate::error::{HubError, Result};
use crate::setup::init::seed_facilities;
use crate::solver::local_search::{climb_all, ClimbState};

#[derive(Debug, Clone, PartialEq)]
pub struct SingleHubResult {
    /// Index of the lowest-fitness candidate in `candidates`.
    pub best: usize,
    pub candidates: Vec<Facility>,
    pub rounds: usize,
    pub state: ClimbState,
}

impl SingleHubResult {
    pub fn best_facility(&self) -> &Facility {
        &self.candidates[self.best]
    }
}

/// Find the best single hub by climbing `seeds` random candidates against the
/// whole point set.
pub fn locate_single_hub<R: Rng + ?Sized>(
    points: &[Point],
    bounds: &Bounds,
    seeds: usize,
    params: &ClimbParameters,
    rng: &mut R,
) -> Result<SingleHubResult> {
    if seeds == 0 {
        return Err(HubError::invalid_parameters("single hub search needs at least one seed"));
    }
    params.validate()?;
    if !bounds.is_valid() {
        return Err(HubError::invalid_parameters(format!(
            "sampling bounds are not a valid region: {:?}",
            bounds
        )));
    }

    let candidates = seed_facilities(bounds, seeds, points, rng);
    locate_from(candidates, points, params)
}

/// Climb the given candidates against every point and pick the best.
pub fn locate_from(
    mut candidates: Vec<Facility>,
    points: &[Point],
    params: &ClimbParameters,
) -> Result<SingleHubResult> {
    if candidates.is_empty() {
        return Err(HubError::EmptyFacilitySet);
    }
    params.validate()?;

    let report = climb_all(&mut candidates, points, params);

    let mut best = 0;
    for (index, candidate) in candidates.iter().enumerate().skip(1) {
        if candidate.fitness < candidates[best].fitness {
            best = index;
        }
    }

    info!(
        "Best single hub at ({:.5}, {:.5}) with fitness {:.3} after {} rounds",
        candidates[best].latitude, candidates[best].longitude, candidates[best].fitness, report.rounds
    );

    Ok(SingleHubResult {
        best,
        candidates,
        rounds: report.rounds,
        state: report.state,
    })
}
