use std::error::Error;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use dotenv::dotenv;
use tracing::{info, span, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::RunConfig;
use crate::domain::types::{Bounds, Point};
use crate::error::HubError;
use crate::fixtures::data_generator::{generate_random_points, GREAT_BRITAIN};
use crate::report::{console_summary, print_single_hub, print_solution, save_json, save_to_csv, RunReport};
use crate::setup::init::load_points;

use super::multi_start::run_multi_start;
use super::single_hub::locate_single_hub;
use super::tour::build_tours;

/// Initialize tracing and environment
fn init_tracing_and_env() -> Result<(), Box<dyn Error>> {
    dotenv().ok();
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_span_events(fmt::format::FmtSpan::NEW | fmt::format::FmtSpan::CLOSE))
        .try_init()?;
    Ok(())
}

fn load_input(config: &RunConfig) -> Result<Vec<Point>, HubError> {
    match config.synthetic_points {
        Some(count) => {
            let seed = config.search.seed.unwrap_or(207224);
            Ok(generate_random_points(count, &GREAT_BRITAIN, seed))
        }
        None => load_points(&config.data_path),
    }
}

pub fn run() -> Result<(), Box<dyn Error>> {
    init_tracing_and_env()?;
    let config = RunConfig::from_env()?;

    let points = load_input(&config)?;
    let bounds = Bounds::from_points(&points)
        .ok_or_else(|| HubError::invalid_data("no places were loaded"))?;
    info!(
        "Min lat: {}; Max lat: {}; Min long: {}; Max long: {}",
        bounds.min_latitude, bounds.max_latitude, bounds.min_longitude, bounds.max_longitude
    );

    let single = {
        let span = span!(Level::INFO, "single_hub");
        let _guard = span.enter();
        let mut rng = match config.search.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        locate_single_hub(
            &points,
            &bounds,
            config.single_hub_seeds,
            &config.search.climb,
            &mut rng,
        )?
    };
    print_single_hub(&single);

    let multi = {
        let span = span!(Level::INFO, "multi_start", hubs = config.search.hubs);
        let _guard = span.enter();
        run_multi_start(&points, &bounds, &config.search)?
    };

    let tours = config.build_tours.then(|| build_tours(&multi.best, &points));
    print_solution(&multi.best, &points, tours.as_deref());

    let report = RunReport::new(&points, Some(&single), &multi, tours.as_deref());
    println!("{}", console_summary(&report));

    if let Some(path) = &config.assignment_csv {
        save_to_csv(&multi.best, &points, path)?;
        info!("Wrote assignment to {}", path);
    }
    if let Some(path) = &config.report_json {
        save_json(&report, path)?;
        info!("Wrote run report to {}", path);
    }

    Ok(())
}
