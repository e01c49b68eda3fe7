use std::borrow::Borrow;

use rand::Rng;

use crate::domain::types::{Assignment, Bounds, Facility, Point, SearchResult, Tour, TourStop};
use crate::evaluation::fitness::evaluate_single;

impl Facility {
    /// Place a facility and score it against `points`.
    pub fn located<P: Borrow<Point>>(latitude: f64, longitude: f64, points: &[P]) -> Self {
        Self {
            latitude,
            longitude,
            fitness: evaluate_single(latitude, longitude, points),
        }
    }
}

impl Assignment {
    /// Indices of the points served by `facility`, in point order.
    pub fn members_of(&self, facility: usize) -> Vec<usize> {
        self.facility_of
            .iter()
            .enumerate()
            .filter(|&(_, &assigned)| assigned == facility)
            .map(|(point, _)| point)
            .collect()
    }

    /// Split the point indices into one group per facility.
    pub fn partition(&self, facility_count: usize) -> Vec<Vec<usize>> {
        let mut groups = vec![Vec::new(); facility_count];
        for (point, &facility) in self.facility_of.iter().enumerate() {
            if let Some(group) = groups.get_mut(facility) {
                group.push(point);
            }
        }
        groups
    }

    /// Total demand weight served by `facility`.
    pub fn served_weight(&self, facility: usize, points: &[Point]) -> f64 {
        self.facility_of
            .iter()
            .zip(points)
            .filter(|&(&assigned, _)| assigned == facility)
            .map(|(_, point)| point.weight)
            .sum()
    }
}

impl SearchResult {
    pub fn fitness(&self) -> f64 {
        self.assignment.fitness
    }
}

impl Tour {
    pub fn depot_only() -> Self {
        Self {
            length: 0.0,
            stops: vec![TourStop::Depot, TourStop::Depot],
        }
    }

    /// Point indices in visiting order, without the depot.
    pub fn visited_points(&self) -> Vec<usize> {
        self.stops
            .iter()
            .filter_map(|stop| match stop {
                TourStop::Point(index) => Some(*index),
                TourStop::Depot => None,
            })
            .collect()
    }
}

impl Bounds {
    /// Smallest box containing every point; `None` for an empty set.
    pub fn from_points(points: &[Point]) -> Option<Self> {
        if points.is_empty() {
            return None;
        }

        let mut bounds = Bounds {
            min_latitude: f64::INFINITY,
            max_latitude: f64::NEG_INFINITY,
            min_longitude: f64::INFINITY,
            max_longitude: f64::NEG_INFINITY,
        };
        for point in points {
            bounds.min_latitude = bounds.min_latitude.min(point.latitude);
            bounds.max_latitude = bounds.max_latitude.max(point.latitude);
            bounds.min_longitude = bounds.min_longitude.min(point.longitude);
            bounds.max_longitude = bounds.max_longitude.max(point.longitude);
        }
        Some(bounds)
    }

    /// A non-empty box of real coordinates: latitudes in [-90, 90], longitudes in [-180, 180].
    pub fn is_valid(&self) -> bool {
        let latitudes = -90.0..=90.0;
        let longitudes = -180.0..=180.0;
        latitudes.contains(&self.min_latitude)
            && latitudes.contains(&self.max_latitude)
            && longitudes.contains(&self.min_longitude)
            && longitudes.contains(&self.max_longitude)
            && self.min_latitude <= self.max_latitude
            && self.min_longitude <= self.max_longitude
    }

    pub fn contains(&self, latitude: f64, longitude: f64) -> bool {
        (self.min_latitude..=self.max_latitude).contains(&latitude)
            && (self.min_longitude..=self.max_longitude).contains(&longitude)
    }

    /// Uniformly random coordinate inside the box.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> (f64, f64) {
        (
            rng.gen_range(self.min_latitude..=self.max_latitude),
            rng.gen_range(self.min_longitude..=self.max_longitude),
        )
    }
}
