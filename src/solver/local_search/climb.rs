use std::borrow::Borrow;

use rayon::prelude::*;
use tracing::{trace, warn};

use super::neighbourhood::{choose_best_candidate, score_neighbours};
use crate::config::ClimbParameters;
use crate::domain::types::{Facility, Point};
use crate::evaluation::fitness::evaluate_single;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClimbState {
    Searching,
    Converged,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClimbReport {
    pub rounds: usize,
    /// `Searching` means the round cap stopped the climb.
    pub state: ClimbState,
}

/// One hill-climb round: move `facility` to the best strictly improving grid location.
///
/// Returns whether the facility moved.
pub fn climb_round<P>(facility: &mut Facility, points: &[P], params: &ClimbParameters) -> bool
where
    P: Borrow<Point> + Sync,
{
    let candidates = score_neighbours(facility, points, params);
    match choose_best_candidate(&candidates, facility.fitness) {
        Some(best) => {
            facility.latitude = best.latitude;
            facility.longitude = best.longitude;
            facility.fitness = best.fitness;
            true
        }
        None => false,
    }
}

/// Climb a single facility against `points` until no grid move improves it.
pub fn climb<P>(facility: &mut Facility, points: &[P], params: &ClimbParameters) -> ClimbReport
where
    P: Borrow<Point> + Sync,
{
    climb_all(std::slice::from_mut(facility), points, params)
}

/// Climb several facilities against the same `points`, one rayon task per facility.
///
/// Every facility's cached fitness is refreshed before the first round. A round
/// counts as improved if any facility moved; the flags are OR-reduced after the
/// tasks join.
pub fn climb_all<P>(facilities: &mut [Facility], points: &[P], params: &ClimbParameters) -> ClimbReport
where
    P: Borrow<Point> + Sync,
{
    for facility in facilities.iter_mut() {
        facility.fitness = evaluate_single(facility.latitude, facility.longitude, points);
    }

    let mut rounds = 0;
    while rounds < params.max_rounds {
        rounds += 1;

        let improved = facilities
            .par_iter_mut()
            .map(|facility| climb_round(facility, points, params))
            .reduce(|| false, |a, b| a || b);

        trace!(round = rounds, improved, "climb round finished");
        if !improved {
            return ClimbReport {
                rounds,
                state: ClimbState::Converged,
            };
        }
    }

    warn!(
        "Hill climb stopped at the round cap ({}) before converging",
        params.max_rounds
    );
    ClimbReport {
        rounds,
        state: ClimbState::Searching,
    }
}
