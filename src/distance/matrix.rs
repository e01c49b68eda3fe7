use rayon::prelude::*;
use tracing::debug;

use super::haversine::raw_distance;

/// Symmetric raw-distance matrix over `(latitude, longitude)` pairs,
/// indexed by input order.
pub fn distance_matrix(coords: &[(f64, f64)]) -> Vec<Vec<f64>> {
    let n = coords.len();
    debug!("Building {}x{} distance matrix", n, n);

    let mut matrix: Vec<Vec<f64>> = (0..n)
        .into_par_iter()
        .map(|i| {
            let (from_lat, from_lon) = coords[i];
            let mut row = vec![0.0; n];
            for (j, &(to_lat, to_lon)) in coords.iter().enumerate().skip(i + 1) {
                row[j] = raw_distance(from_lat, from_lon, to_lat, to_lon);
            }
            row
        })
        .collect();

    // mirror the upper triangle
    for i in 0..n {
        for j in (i + 1)..n {
            matrix[j][i] = matrix[i][j];
        }
    }

    matrix
}
