use rayon::prelude::*;
use tracing::debug;

use crate::distance::matrix::distance_matrix;
use crate::domain::types::{Facility, Point, SearchResult, Tour, TourStop};

/// Nearest-neighbour circuit from `facility` through the `members` of `points`
/// and back to the facility.
///
/// Matrix row 0 is the depot; row `k` is `members[k - 1]`.
pub fn build_tour(facility: &Facility, points: &[Point], members: &[usize]) -> Tour {
    if members.is_empty() {
        return Tour::depot_only();
    }

    let mut coords = Vec::with_capacity(members.len() + 1);
    coords.push((facility.latitude, facility.longitude));
    coords.extend(members.iter().map(|&i| (points[i].latitude, points[i].longitude)));
    let dm = distance_matrix(&coords);

    let mut visited = vec![false; coords.len()];
    visited[0] = true;

    let mut stops = Vec::with_capacity(coords.len() + 1);
    stops.push(TourStop::Depot);
    let mut length = 0.0;
    let mut current = 0;

    for _ in 0..members.len() {
        let Some(next) = nearest_unvisited(&dm[current], &visited) else {
            break;
        };
        visited[next] = true;
        length += dm[current][next];
        stops.push(TourStop::Point(members[next - 1]));
        current = next;
    }

    length += dm[current][0];
    stops.push(TourStop::Depot);

    Tour { length, stops }
}

/// Closest node not yet visited; `None` once every node has been visited.
fn nearest_unvisited(row: &[f64], visited: &[bool]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (node, (&distance, &seen)) in row.iter().zip(visited).enumerate() {
        if seen {
            continue;
        }
        match best {
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((node, distance)),
        }
    }
    best.map(|(node, _)| node)
}

/// One tour per facility of `result`, built in parallel.
pub fn build_tours(result: &SearchResult, points: &[Point]) -> Vec<Tour> {
    let groups = result.assignment.partition(result.facilities.len());
    let tours: Vec<Tour> = result
        .facilities
        .par_iter()
        .zip(groups.par_iter())
        .map(|(facility, members)| build_tour(facility, points, members))
        .collect();

    for (index, tour) in tours.iter().enumerate() {
        debug!(
            "Tour for hub {}: {} stops, length {:.3}",
            index,
            tour.stops.len(),
            tour.length
        );
    }
    tours
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearest_unvisited_returns_none_when_all_visited() {
        assert_eq!(nearest_unvisited(&[0.0, 1.0, 2.0], &[true, true, true]), None);
    }

    #[test]
    fn nearest_unvisited_prefers_lowest_index_on_ties() {
        let row = [0.0, 3.0, 1.0, 1.0];
        let visited = [true, false, false, false];
        assert_eq!(nearest_unvisited(&row, &visited), Some(2));
    }

    #[test]
    fn nan_distances_do_not_hide_the_fallback() {
        let row = [0.0, f64::NAN];
        let visited = [true, false];
        assert_eq!(nearest_unvisited(&row, &visited), Some(1));
    }
}
