use std::borrow::Borrow;

use itertools::iproduct;
use rayon::prelude::*;

use crate::config::ClimbParameters;
use crate::domain::types::{Facility, Point};
use crate::evaluation::fitness::evaluate_single;

/// A scored grid location around a facility.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    pub fitness: f64,
    pub latitude: f64,
    pub longitude: f64,
}

/// Grid offsets `(i, j)` for `i, j` in `[-scope, scope]`, row-major, without `(0, 0)`.
pub fn grid_offsets(scope: usize) -> Vec<(i64, i64)> {
    let scope = scope as i64;
    iproduct!(-scope..=scope, -scope..=scope)
        .filter(|&offset| offset != (0, 0))
        .collect()
}

/// Score every grid location around `facility`.
///
/// The parallel map keeps the row-major order of [`grid_offsets`].
pub fn score_neighbours<P>(
    facility: &Facility,
    points: &[P],
    params: &ClimbParameters,
) -> Vec<Candidate>
where
    P: Borrow<Point> + Sync,
{
    grid_offsets(params.scope)
        .par_iter()
        .map(|&(i, j)| {
            let latitude = facility.latitude + i as f64 * params.step;
            let longitude = facility.longitude + j as f64 * params.step;
            Candidate {
                fitness: evaluate_single(latitude, longitude, points),
                latitude,
                longitude,
            }
        })
        .collect()
}

/// First candidate with the lowest fitness, if it strictly beats `current`.
pub fn choose_best_candidate(candidates: &[Candidate], current: f64) -> Option<Candidate> {
    let mut best: Option<Candidate> = None;
    let mut best_fitness = current;
    for candidate in candidates {
        if candidate.fitness < best_fitness {
            best_fitness = candidate.fitness;
            best = Some(*candidate);
        }
    }
    best
}
