use std::env;
use std::str::FromStr;

use dotenv::dotenv;
use tracing::{debug, info};

use crate::error::{HubError, Result};

pub mod constant {
    pub const EARTH_RADIUS: f64 = 6371.01;
    pub(crate) const GRID_STEP: f64 = 0.001;
    pub(crate) const GRID_SCOPE: usize = 10;
    pub(crate) const MAX_ROUNDS: usize = 100_000;
    pub(crate) const MAX_PASSES: usize = 1_000;
    pub(crate) const HUB_COUNT: usize = 2;
    pub(crate) const RESTARTS: usize = 20;
    pub(crate) const SINGLE_HUB_SEEDS: usize = 5;
    pub(crate) const DATA_PATH: &str = "GBplaces.csv";
    pub(crate) const ASSIGNMENT_CSV: &str = "hub_assignment.csv";
    pub(crate) const REPORT_JSON: &str = "hub_report.json";
}

/// Neighbourhood grid used by the hill climb.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClimbParameters {
    /// Grid spacing in coordinate degrees.
    pub step: f64,
    /// Half-width of the grid, in steps.
    pub scope: usize,
    /// Hard ceiling on rounds for a single climb.
    pub max_rounds: usize,
}

impl Default for ClimbParameters {
    fn default() -> Self {
        Self {
            step: constant::GRID_STEP,
            scope: constant::GRID_SCOPE,
            max_rounds: constant::MAX_ROUNDS,
        }
    }
}

impl ClimbParameters {
    pub fn new(step: f64, scope: usize) -> Self {
        Self {
            step,
            scope,
            ..Self::default()
        }
    }

    pub fn with_max_rounds(mut self, max_rounds: usize) -> Self {
        self.max_rounds = max_rounds;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.step.is_finite() && self.step > 0.0) {
            return Err(HubError::invalid_parameters(format!(
                "grid step must be a positive number, got {}",
                self.step
            )));
        }
        if self.scope == 0 {
            return Err(HubError::invalid_parameters("grid scope must be at least 1"));
        }
        if self.max_rounds == 0 {
            return Err(HubError::invalid_parameters("round cap must be at least 1"));
        }
        Ok(())
    }
}

/// Parameters for a batch of randomized partition-and-relocate restarts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MultiStartParameters {
    pub hubs: usize,
    pub restarts: usize,
    pub climb: ClimbParameters,
    pub max_passes: usize,
    /// Base seed; restart `i` uses `seed + i`. `None` draws from entropy.
    pub seed: Option<u64>,
}

impl MultiStartParameters {
    pub fn new(hubs: usize, restarts: usize, climb: ClimbParameters) -> Self {
        Self {
            hubs,
            restarts,
            climb,
            max_passes: constant::MAX_PASSES,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_max_passes(mut self, max_passes: usize) -> Self {
        self.max_passes = max_passes;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.hubs == 0 {
            return Err(HubError::invalid_parameters("hub count must be at least 1"));
        }
        if self.restarts == 0 {
            return Err(HubError::invalid_parameters("restart count must be at least 1"));
        }
        if self.max_passes == 0 {
            return Err(HubError::invalid_parameters("pass cap must be at least 1"));
        }
        self.climb.validate()
    }
}

/// Everything the binary needs for one run, read from the environment.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub data_path: String,
    /// When set, replaces the data file with this many generated points.
    pub synthetic_points: Option<usize>,
    pub single_hub_seeds: usize,
    pub search: MultiStartParameters,
    pub build_tours: bool,
    pub assignment_csv: Option<String>,
    pub report_json: Option<String>,
}

impl RunConfig {
    /// Loads `.env`, then reads the `HUB_*` variables. Unset or empty values
    /// fall back to [`constant`]; unparsable ones are a [`HubError::Config`].
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        let climb = ClimbParameters {
            step: env_or("HUB_STEP", constant::GRID_STEP)?,
            scope: env_or("HUB_SCOPE", constant::GRID_SCOPE)?,
            max_rounds: env_or("HUB_MAX_ROUNDS", constant::MAX_ROUNDS)?,
        };

        let search = MultiStartParameters {
            hubs: env_or("HUB_COUNT", constant::HUB_COUNT)?,
            restarts: env_or("HUB_RESTARTS", constant::RESTARTS)?,
            climb,
            max_passes: env_or("HUB_MAX_PASSES", constant::MAX_PASSES)?,
            seed: env_opt("HUB_SEED")?,
        };
        search.validate()?;

        let config = Self {
            data_path: env::var("HUB_DATA_PATH").unwrap_or_else(|_| constant::DATA_PATH.to_string()),
            synthetic_points: env_opt("HUB_SYNTHETIC_POINTS")?,
            single_hub_seeds: env_or("HUB_SINGLE_SEEDS", constant::SINGLE_HUB_SEEDS)?,
            search,
            build_tours: env_or("HUB_BUILD_TOURS", true)?,
            assignment_csv: Some(
                env::var("HUB_ASSIGNMENT_CSV").unwrap_or_else(|_| constant::ASSIGNMENT_CSV.to_string()),
            )
            .filter(|path| !path.is_empty()),
            report_json: Some(
                env::var("HUB_REPORT_JSON").unwrap_or_else(|_| constant::REPORT_JSON.to_string()),
            )
            .filter(|path| !path.is_empty()),
        };

        info!(
            "Loaded run configuration: {} hubs, {} restarts, step {}, scope {}",
            config.search.hubs, config.search.restarts, climb.step, climb.scope
        );
        debug!("{:?}", config);
        Ok(config)
    }
}

fn env_opt<T: FromStr>(key: &str) -> Result<Option<T>> {
    match env::var(key) {
        Ok(raw) if raw.trim().is_empty() => Ok(None),
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| HubError::config(format!("{key} has an unparsable value '{raw}'"))),
        Err(_) => Ok(None),
    }
}

fn env_or<T: FromStr>(key: &str, default: T) -> Result<T> {
    Ok(env_opt(key)?.unwrap_or(default))
}
