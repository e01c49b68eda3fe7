use serde::Deserialize;

/// One row of a place file: `Place, Type, Population, Latitude, Longitude`.
#[derive(Debug, Deserialize)]
pub struct PlaceRecord {
    pub place: String,
    pub kind: String,
    pub population: f64,
    pub latitude: f64,
    pub longitude: f64,
}
