use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use chrono::Utc;
use colored::*;
use csv::Writer;
use serde::Serialize;
use tracing::{debug, info};

use crate::domain::types::{Point, SearchResult, Tour};
use crate::error::Result;
use crate::solver::multi_start::{MultiStartResult, RestartSummary};
use crate::solver::single_hub::SingleHubResult;

#[derive(Debug, Clone, Serialize)]
pub struct HubReport {
    pub latitude: f64,
    pub longitude: f64,
    pub served_weight: f64,
    pub served_places: Vec<String>,
    pub tour_length: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SingleHubReport {
    pub latitude: f64,
    pub longitude: f64,
    pub fitness: f64,
    pub rounds: usize,
}

/// Everything a run produced, ready to be written as JSON.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub generated_at: String,
    pub point_count: usize,
    pub single_hub: Option<SingleHubReport>,
    pub fitness: f64,
    pub iterations: usize,
    pub best_restart: usize,
    pub hubs: Vec<HubReport>,
    pub restarts: Vec<RestartSummary>,
}

impl RunReport {
    pub fn new(
        points: &[Point],
        single: Option<&SingleHubResult>,
        multi: &MultiStartResult,
        tours: Option<&[Tour]>,
    ) -> Self {
        let best = &multi.best;
        Self {
            generated_at: Utc::now().to_rfc3339(),
            point_count: points.len(),
            single_hub: single.map(|s| {
                let hub = s.best_facility();
                SingleHubReport {
                    latitude: hub.latitude,
                    longitude: hub.longitude,
                    fitness: hub.fitness,
                    rounds: s.rounds,
                }
            }),
            fitness: best.fitness(),
            iterations: best.iterations,
            best_restart: multi.best_restart,
            hubs: hub_reports(best, points, tours),
            restarts: multi.restarts.clone(),
        }
    }
}

pub fn hub_reports(result: &SearchResult, points: &[Point], tours: Option<&[Tour]>) -> Vec<HubReport> {
    let groups = result.assignment.partition(result.facilities.len());
    result
        .facilities
        .iter()
        .zip(groups)
        .enumerate()
        .map(|(index, (facility, members))| HubReport {
            latitude: facility.latitude,
            longitude: facility.longitude,
            served_weight: members.iter().map(|&i| points[i].weight).sum(),
            served_places: members.iter().map(|&i| points[i].label.clone()).collect(),
            tour_length: tours.and_then(|t| t.get(index)).map(|t| t.length),
        })
        .collect()
}

pub fn print_single_hub(result: &SingleHubResult) {
    let hub = result.best_facility();
    info!(
        "Best single hub found at: {:.5}, {:.5} with a total node length of {:.3}, after {} iterations",
        hub.latitude, hub.longitude, hub.fitness, result.rounds
    );
    for (index, candidate) in result.candidates.iter().enumerate() {
        debug!(
            "Candidate {}: ({:.5}, {:.5}) fitness {:.3}",
            index, candidate.latitude, candidate.longitude, candidate.fitness
        );
    }
}

pub fn print_solution(result: &SearchResult, points: &[Point], tours: Option<&[Tour]>) {
    info!(
        "Hubs: {}, Fitness: {:.3}, Iterations: {}",
        result.facilities.len(),
        result.fitness(),
        result.iterations
    );
    for (index, hub) in hub_reports(result, points, tours).iter().enumerate() {
        info!(
            "Hub {} at ({:.5}, {:.5}) servicing {} across {} places",
            index,
            hub.latitude,
            hub.longitude,
            hub.served_weight,
            hub.served_places.len()
        );
        if let Some(length) = hub.tour_length {
            info!("Hub {} tour length: {:.3}", index, length);
        }
        debug!("Hub {} is connected to: {:?}", index, hub.served_places);
    }
}

/// Human-readable summary for the terminal.
pub fn console_summary(report: &RunReport) -> String {
    let mut out = String::new();
    if let Some(single) = &report.single_hub {
        out.push_str(&format!(
            "{} {:.5}, {:.5} (fitness {:.3})\n",
            "Best single hub:".bold(),
            single.latitude,
            single.longitude,
            single.fitness
        ));
    }
    out.push_str(&format!(
        "{}\n",
        format!(
            "{} hubs, total fitness {:.3} after {} iterations (restart {})",
            report.hubs.len(),
            report.fitness,
            report.iterations,
            report.best_restart
        )
        .green()
    ));
    for (index, hub) in report.hubs.iter().enumerate() {
        out.push_str(&format!(
            "  {} {:.5}, {:.5} servicing {} ({} places)",
            format!("Hub {index}:").cyan(),
            hub.latitude,
            hub.longitude,
            hub.served_weight,
            hub.served_places.len()
        ));
        if let Some(length) = hub.tour_length {
            out.push_str(&format!(", tour {length:.3}"));
        }
        out.push('\n');
    }
    out
}

/// Write one row per point with the hub serving it.
pub fn save_to_csv(result: &SearchResult, points: &[Point], filename: impl AsRef<Path>) -> Result<()> {
    let mut wtr = Writer::from_path(filename)?;

    wtr.write_record(["place", "latitude", "longitude", "weight", "hub"])?;

    for (point, hub) in points.iter().zip(&result.assignment.facility_of) {
        wtr.write_record([
            point.label.clone(),
            point.latitude.to_string(),
            point.longitude.to_string(),
            point.weight.to_string(),
            hub.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

pub fn save_json(report: &RunReport, filename: impl AsRef<Path>) -> Result<()> {
    let file = File::create(filename)?;
    serde_json::to_writer_pretty(BufWriter::new(file), report)?;
    Ok(())
}
