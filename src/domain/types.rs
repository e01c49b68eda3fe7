use serde::Serialize;

/// A weighted demand location.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Point {
    pub latitude: f64,
    pub longitude: f64,
    pub weight: f64,
    pub label: String,
}

impl Point {
    pub fn new(latitude: f64, longitude: f64, weight: f64, label: impl Into<String>) -> Self {
        Self {
            latitude,
            longitude,
            weight,
            label: label.into(),
        }
    }
}

/// A candidate hub location and the objective value cached for it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Facility {
    pub latitude: f64,
    pub longitude: f64,
    pub fitness: f64,
}

/// Nearest-facility partition of a point set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assignment {
    /// Facility index for each point, in point order.
    pub facility_of: Vec<usize>,
    /// Sum of weighted distances from every point to its facility.
    pub fitness: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult {
    pub iterations: usize,
    pub facilities: Vec<Facility>,
    pub assignment: Assignment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TourStop {
    Depot,
    /// Index into the full point set.
    Point(usize),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tour {
    pub length: f64,
    pub stops: Vec<TourStop>,
}

/// Latitude/longitude box used to sample random seeds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    pub min_latitude: f64,
    pub max_latitude: f64,
    pub min_longitude: f64,
    pub max_longitude: f64,
}
