use rayon::prelude::*;
use tracing::{debug, span, trace, warn, Level};

use crate::config::ClimbParameters;
use crate::domain::types::{Facility, Point, SearchResult};
use crate::error::{HubError, Result};
use crate::evaluation::fitness::evaluate_assignment;
use crate::solver::local_search::{climb, ClimbReport, ClimbState};

/// Alternate nearest-facility reassignment with per-facility hill climbs
/// until the total fitness stops strictly improving.
///
/// The returned facilities and assignment always describe the same geometry.
pub fn optimise_partition(
    facilities: Vec<Facility>,
    points: &[Point],
    params: &ClimbParameters,
    max_passes: usize,
) -> Result<SearchResult> {
    if facilities.is_empty() {
        return Err(HubError::EmptyFacilitySet);
    }
    params.validate()?;
    if max_passes == 0 {
        return Err(HubError::invalid_parameters("pass cap must be at least 1"));
    }

    let mut facilities = facilities;
    let mut standing = evaluate_assignment(&facilities, points)?;
    let initial_fitness = standing.fitness;
    let mut iterations = 0;

    loop {
        iterations += 1;
        let pass_span = span!(Level::DEBUG, "pass", pass = iterations);
        let _guard = pass_span.enter();

        let groups = standing.partition(facilities.len());
        let reports: Vec<ClimbReport> = facilities
            .par_iter_mut()
            .zip(groups.par_iter())
            .map(|(facility, members)| {
                let subset: Vec<&Point> = members.iter().map(|&i| &points[i]).collect();
                climb(facility, &subset, params)
            })
            .collect();

        for (index, report) in reports.iter().enumerate() {
            trace!(
                facility = index,
                rounds = report.rounds,
                served = groups[index].len(),
                "relocated"
            );
            if report.state == ClimbState::Searching {
                warn!("Facility {} hit the round cap during pass {}", index, iterations);
            }
        }

        let new_standing = evaluate_assignment(&facilities, points)?;
        let improved = new_standing.fitness < standing.fitness;
        debug!(
            "Pass {}: fitness {:.3} -> {:.3}",
            iterations, standing.fitness, new_standing.fitness
        );
        standing = new_standing;

        if !improved {
            break;
        }
        if iterations >= max_passes {
            warn!("Partition search stopped at the pass cap ({})", max_passes);
            break;
        }
    }

    debug!(
        "Partition converged after {} passes: {:.3} -> {:.3}",
        iterations, initial_fitness, standing.fitness
    );

    Ok(SearchResult {
        iterations,
        facilities,
        assignment: standing,
    })
}
