//! Large towns and cities of Great Britain with approximate populations.

use hub_locator::Point;

/// A named place with coordinates and population.
#[derive(Debug, Clone)]
pub struct Place {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
    pub population: f64,
}

impl Place {
    pub const fn new(name: &'static str, lat: f64, lng: f64, population: f64) -> Self {
        Self {
            name,
            lat,
            lng,
            population,
        }
    }

    pub fn to_point(&self) -> Point {
        Point::new(self.lat, self.lng, self.population, self.name)
    }
}

pub const GB_PLACES: &[Place] = &[
    Place::new("London", 51.5074, -0.1278, 8_908_081.0),
    Place::new("Birmingham", 52.4862, -1.8904, 1_141_816.0),
    Place::new("Leeds", 53.8008, -1.5491, 789_194.0),
    Place::new("Glasgow", 55.8642, -4.2518, 633_120.0),
    Place::new("Sheffield", 53.3811, -1.4701, 584_853.0),
    Place::new("Manchester", 53.4808, -2.2426, 552_858.0),
    Place::new("Edinburgh", 55.9533, -3.1883, 524_930.0),
    Place::new("Liverpool", 53.4084, -2.9916, 498_042.0),
    Place::new("Bristol", 51.4545, -2.5879, 463_400.0),
    Place::new("Cardiff", 51.4816, -3.1791, 362_756.0),
    Place::new("Leicester", 52.6369, -1.1398, 354_224.0),
    Place::new("Nottingham", 52.9548, -1.1581, 331_069.0),
    Place::new("Newcastle upon Tyne", 54.9783, -1.6178, 300_196.0),
    Place::new("Plymouth", 50.3755, -4.1427, 262_100.0),
    Place::new("Southampton", 50.9097, -1.4044, 252_796.0),
    Place::new("York", 53.9600, -1.0873, 210_618.0),
    Place::new("Aberdeen", 57.1497, -2.0943, 198_590.0),
    Place::new("Norwich", 52.6309, 1.2974, 141_137.0),
];

pub fn gb_points() -> Vec<Point> {
    GB_PLACES.iter().map(Place::to_point).collect()
}
