mod fixtures;

use hub_locator::distance::raw_distance;
use hub_locator::evaluation::evaluate_single;
use hub_locator::solver::local_search::{climb, climb_round, ClimbState};
use hub_locator::solver::single_hub::{locate_from, locate_single_hub};
use hub_locator::{Bounds, ClimbParameters, Facility, HubError, Point};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use fixtures::{gb_points, unit_square};

#[test]
fn unit_square_converges_to_the_centre() {
    let points = unit_square();
    let mut facility = Facility::located(0.0, 0.0, &points);
    let report = climb(&mut facility, &points, &ClimbParameters::new(0.1, 5));

    assert_eq!(report.state, ClimbState::Converged);
    assert!((facility.latitude - 0.5).abs() < 1e-6, "lat {}", facility.latitude);
    assert!((facility.longitude - 0.5).abs() < 1e-6, "lon {}", facility.longitude);

    let expected: f64 = points
        .iter()
        .map(|p| raw_distance(0.5, 0.5, p.latitude, p.longitude))
        .sum();
    assert!(
        (facility.fitness - expected).abs() < 1e-6 * expected,
        "fitness {} vs {}",
        facility.fitness,
        expected
    );
}

#[test]
fn cached_fitness_matches_location_after_climb() {
    let points = gb_points();
    let mut facility = Facility::located(56.0, -4.0, &points);
    climb(&mut facility, &points, &ClimbParameters::new(0.05, 3));

    let recomputed = evaluate_single(facility.latitude, facility.longitude, &points);
    assert_eq!(facility.fitness, recomputed);
}

#[test]
fn fitness_never_increases_across_rounds() {
    let mut rng = ChaCha8Rng::seed_from_u64(2018);
    let params = ClimbParameters::new(0.05, 3);

    for _ in 0..10 {
        let points: Vec<Point> = (0..20)
            .map(|i| {
                Point::new(
                    rng.gen_range(50.0..55.0),
                    rng.gen_range(-3.0..1.0),
                    rng.gen_range(0.0..1000.0),
                    format!("p{i}"),
                )
            })
            .collect();
        let mut facility = Facility::located(rng.gen_range(50.0..55.0), rng.gen_range(-3.0..1.0), &points);

        let mut history = vec![facility.fitness];
        let mut rounds = 0;
        while climb_round(&mut facility, &points, &params) {
            history.push(facility.fitness);
            rounds += 1;
            assert!(rounds < 10_000, "climb did not converge");
        }

        for pair in history.windows(2) {
            assert!(pair[1] < pair[0], "fitness went from {} to {}", pair[0], pair[1]);
        }
    }
}

#[test]
fn london_dominates_the_single_hub() {
    // London outweighs every other place combined, so the optimum sits on it
    let points = gb_points();
    let bounds = Bounds::from_points(&points).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(26);
    let result = locate_single_hub(&points, &bounds, 5, &ClimbParameters::new(0.05, 4), &mut rng).unwrap();

    let hub = result.best_facility();
    assert_eq!(result.candidates.len(), 5);
    assert_eq!(result.state, ClimbState::Converged);
    assert!((hub.latitude - 51.5074).abs() < 0.25, "lat {}", hub.latitude);
    assert!((hub.longitude + 0.1278).abs() < 0.25, "lon {}", hub.longitude);
    for candidate in &result.candidates {
        assert!(hub.fitness <= candidate.fitness);
    }
}

#[test]
fn best_candidate_ties_go_to_lowest_index() {
    let points = vec![Point::new(0.0, 0.0, 1.0, "origin")];
    let candidates = vec![
        Facility::located(0.0, 0.0, &points),
        Facility::located(0.0, 0.0, &points),
    ];
    let result = locate_from(candidates, &points, &ClimbParameters::new(0.1, 1)).unwrap();
    assert_eq!(result.best, 0);
    assert_eq!(result.rounds, 1);
}

#[test]
fn single_hub_needs_a_seed() {
    let points = unit_square();
    let bounds = Bounds::from_points(&points).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let result = locate_single_hub(&points, &bounds, 0, &ClimbParameters::new(0.1, 5), &mut rng);
    assert!(matches!(result, Err(HubError::InvalidSearchParameters(_))));
}
