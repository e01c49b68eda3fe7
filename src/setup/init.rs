use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use rand::Rng;
use tracing::{debug, info};

use crate::domain::types::{Bounds, Facility, Point};
use crate::error::{HubError, Result};
use crate::setup::init_types::PlaceRecord;

/// Read weighted points from a place file on disk.
pub fn load_points(path: impl AsRef<Path>) -> Result<Vec<Point>> {
    let path = path.as_ref();
    info!("Reading places from {}", path.display());
    let file = File::open(path)?;
    let points = load_points_from_reader(file)?;
    info!("Got all {} places", points.len());
    Ok(points)
}

/// Read weighted points from any CSV source with a header row.
///
/// Columns are positional (`Place, Type, Population, Latitude, Longitude`);
/// blank lines are skipped.
pub fn load_points_from_reader<R: Read>(reader: R) -> Result<Vec<Point>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut points = Vec::new();
    for row in reader.records() {
        let record = row?;
        if record.iter().all(|field| field.is_empty()) {
            continue;
        }
        let line = record.position().map_or(0, |pos| pos.line());

        let place: PlaceRecord = record
            .deserialize(None)
            .map_err(|e| HubError::invalid_data(format!("line {line}: {e}")))?;

        if !(place.latitude.is_finite() && place.longitude.is_finite()) {
            return Err(HubError::invalid_data(format!(
                "line {line}: '{}' has non-finite coordinates",
                place.place
            )));
        }
        if !place.population.is_finite() || place.population < 0.0 {
            return Err(HubError::invalid_data(format!(
                "line {line}: '{}' has invalid population {}",
                place.place, place.population
            )));
        }

        points.push(Point::new(
            place.latitude,
            place.longitude,
            place.population,
            place.place,
        ));
    }

    debug!("Parsed {} points", points.len());
    Ok(points)
}

/// Sample `count` facilities uniformly inside `bounds`, each scored against
/// the full point set.
pub fn seed_facilities<R: Rng + ?Sized>(
    bounds: &Bounds,
    count: usize,
    points: &[Point],
    rng: &mut R,
) -> Vec<Facility> {
    (0..count)
        .map(|_| {
            let (latitude, longitude) = bounds.sample(rng);
            Facility::located(latitude, longitude, points)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    const PLACES: &str = "\
Place,Type,Population,Latitude,Longitude
London,City,8908081,51.5074,-0.1278

Birmingham,City,1141816,52.4862,-1.8904
";

    #[test]
    fn parses_rows_and_skips_blank_lines() {
        let points = load_points_from_reader(PLACES.as_bytes()).unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].label, "London");
        assert_eq!(points[0].weight, 8_908_081.0);
        assert_eq!(points[1].latitude, 52.4862);
        assert_eq!(points[1].longitude, -1.8904);
    }

    #[test]
    fn header_only_file_is_empty() {
        let points = load_points_from_reader("Place,Type,Population,Latitude,Longitude\n".as_bytes()).unwrap();
        assert!(points.is_empty());
    }

    #[test]
    fn negative_population_is_rejected() {
        let data = "Place,Type,Population,Latitude,Longitude\nNowhere,Town,-5,50.0,-1.0\n";
        let err = load_points_from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(err, HubError::InvalidData(msg) if msg.contains("line 2")));
    }

    #[test]
    fn unparsable_number_is_rejected() {
        let data = "Place,Type,Population,Latitude,Longitude\nNowhere,Town,12,north,-1.0\n";
        assert!(matches!(
            load_points_from_reader(data.as_bytes()),
            Err(HubError::InvalidData(_))
        ));
    }

    #[test]
    fn seeded_facilities_are_scored_and_inside_bounds() {
        let points = load_points_from_reader(PLACES.as_bytes()).unwrap();
        let bounds = Bounds::from_points(&points).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        let facilities = seed_facilities(&bounds, 4, &points, &mut rng);
        assert_eq!(facilities.len(), 4);
        for facility in &facilities {
            assert!(bounds.contains(facility.latitude, facility.longitude));
            let expected = crate::evaluation::fitness::evaluate_single(
                facility.latitude,
                facility.longitude,
                &points,
            );
            assert_eq!(facility.fitness, expected);
        }
    }
}
