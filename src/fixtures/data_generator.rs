use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::info;

use crate::domain::types::{Bounds, Point};

/// Rough bounding box of Great Britain, used when no place file is available.
pub const GREAT_BRITAIN: Bounds = Bounds {
    min_latitude: 50.0,
    max_latitude: 58.6,
    min_longitude: -5.7,
    max_longitude: 1.8,
};

/// Generate `count` reproducible random places inside `bounds`.
///
/// Populations are drawn log-uniformly between 1 000 and 1 000 000 so a few
/// large towns dominate, like real census data.
pub fn generate_random_points(count: usize, bounds: &Bounds, seed: u64) -> Vec<Point> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let points: Vec<Point> = (0..count)
        .map(|i| {
            let (latitude, longitude) = bounds.sample(&mut rng);
            let population = 10f64.powf(rng.gen_range(3.0..6.0)).round();
            Point::new(latitude, longitude, population, format!("place-{i:04}"))
        })
        .collect();

    info!("Generated {} random places with seed {}", points.len(), seed);
    points
}
