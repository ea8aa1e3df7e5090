//! Export estimates and the illustrative curve to JSON.
//!
//! Exports are the "portable" representation of a run:
//!
//! - an estimate file carries the raw inputs and the full adjustment chain,
//!   so a reader can verify every step offline
//! - a curve file carries the static illustrative grid for plotting
//!
//! Both are stamped with the generation date.

use std::fs::File;
use std::path::Path;

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::app::pipeline::Estimate;
use crate::curve;
use crate::domain::{SalaryBreakdown, UserInput};
use crate::error::{AppError, EXIT_IO};

/// A saved estimate file (JSON).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimateFile {
    pub tool: String,
    pub generated_on: NaiveDate,
    pub input: UserInput,
    pub breakdown: SalaryBreakdown,
}

/// A saved illustrative-curve file (JSON).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurveExport {
    pub tool: String,
    pub generated_on: NaiveDate,
    pub experience_years: Vec<u32>,
    pub salary: Vec<i64>,
}

/// Write an estimate JSON file.
pub fn write_estimate_json(path: &Path, estimate: &Estimate) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| {
        AppError::new(
            EXIT_IO,
            format!("Failed to create estimate JSON '{}': {e}", path.display()),
        )
    })?;

    let out = EstimateFile {
        tool: "pay".to_string(),
        generated_on: Local::now().date_naive(),
        input: estimate.input,
        breakdown: estimate.breakdown,
    };

    serde_json::to_writer_pretty(file, &out)
        .map_err(|e| AppError::new(EXIT_IO, format!("Failed to write estimate JSON: {e}")))?;

    Ok(())
}

/// Write the illustrative curve grid as JSON.
pub fn write_curve_json(path: &Path, max_years: u32) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| {
        AppError::new(
            EXIT_IO,
            format!("Failed to create curve JSON '{}': {e}", path.display()),
        )
    })?;

    let points = curve::curve_points(max_years);
    let out = CurveExport {
        tool: "pay".to_string(),
        generated_on: Local::now().date_naive(),
        experience_years: points.iter().map(|&(exp, _)| exp).collect(),
        salary: points.iter().map(|&(_, salary)| salary).collect(),
    };

    serde_json::to_writer_pretty(file, &out)
        .map_err(|e| AppError::new(EXIT_IO, format!("Failed to write curve JSON: {e}")))?;

    Ok(())
}
