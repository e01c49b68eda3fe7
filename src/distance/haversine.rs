//! Great-circle distances between coordinates given in degrees.

use crate::config::constant::EARTH_RADIUS;

/// Haversine distance between two coordinates, scaled by `weight`.
#[inline]
pub fn weighted_distance(a_lat: f64, a_lon: f64, b_lat: f64, b_lon: f64, weight: f64) -> f64 {
    raw_distance(a_lat, a_lon, b_lat, b_lon) * weight
}

/// Unweighted haversine distance, in the same units as [`EARTH_RADIUS`].
#[inline]
pub fn raw_distance(a_lat: f64, a_lon: f64, b_lat: f64, b_lon: f64) -> f64 {
    let a_lat_rad = a_lat.to_radians();
    let b_lat_rad = b_lat.to_radians();
    let delta_lat = b_lat_rad - a_lat_rad;
    let delta_lon = b_lon.to_radians() - a_lon.to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + a_lat_rad.cos() * b_lat_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS * c
}
