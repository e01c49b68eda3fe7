use std::borrow::Borrow;

use rayon::prelude::*;

use crate::distance::haversine::weighted_distance;
use crate::domain::types::{Assignment, Facility, Point};
use crate::error::{HubError, Result};

/// Total weighted distance from one candidate location to every point.
pub fn evaluate_single<P: Borrow<Point>>(latitude: f64, longitude: f64, points: &[P]) -> f64 {
    points
        .iter()
        .map(|p| {
            let p = p.borrow();
            weighted_distance(latitude, longitude, p.latitude, p.longitude, p.weight)
        })
        .sum()
}

/// Assign every point to its nearest facility and total the cost.
///
/// Ties go to the lowest facility index. Points are scored in parallel but
/// summed in point order so the total is reproducible.
pub fn evaluate_assignment(facilities: &[Facility], points: &[Point]) -> Result<Assignment> {
    if facilities.is_empty() {
        return Err(HubError::EmptyFacilitySet);
    }

    let nearest: Vec<(usize, f64)> = points
        .par_iter()
        .map(|point| nearest_facility(facilities, point))
        .collect();

    let fitness = nearest.iter().map(|&(_, cost)| cost).sum();
    let facility_of = nearest.into_iter().map(|(facility, _)| facility).collect();

    Ok(Assignment {
        facility_of,
        fitness,
    })
}

fn nearest_facility(facilities: &[Facility], point: &Point) -> (usize, f64) {
    let cost = |facility: &Facility| {
        weighted_distance(
            facility.latitude,
            facility.longitude,
            point.latitude,
            point.longitude,
            point.weight,
        )
    };

    let mut best = (0, cost(&facilities[0]));
    for (index, facility) in facilities.iter().enumerate().skip(1) {
        let candidate = cost(facility);
        if candidate < best.1 {
            best = (index, candidate);
        }
    }
    best
}
