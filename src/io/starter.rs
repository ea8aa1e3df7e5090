//! Starter artifacts for `pay init`.
//!
//! The estimator needs two files to run: a model JSON and a feature list.
//! `pay init` writes a deterministic demo pair so the tool works out of the
//! box; a real deployment replaces both with exported training artifacts.
//!
//! The coefficient table below is ordered exactly like the written feature
//! list (numerics first, then the one-hot columns in the trained layout), so
//! the generated pair always passes the startup width check.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{AppError, EXIT_IO};
use crate::io::load::{DEFAULT_FEATURES_PATH, DEFAULT_MODEL_PATH};
use crate::model::LinearModel;

/// Demo intercept (model output is in hundreds of rupees per month).
const STARTER_INTERCEPT: f64 = 120.0;

/// Demo feature names and coefficients, in schema order.
const STARTER_COEFFICIENTS: &[(&str, f64)] = &[
    ("age", 1.5),
    ("experience", 16.0),
    ("education_Bachelor", 30.0),
    ("education_High School", -60.0),
    ("education_Master", 90.0),
    ("education_PhD", 160.0),
    ("role_Data Analyst", 20.0),
    ("role_Developer", 45.0),
    ("role_Manager", 80.0),
    ("role_Other", -30.0),
    ("role_Researcher", 60.0),
    ("location_Rural", -45.0),
    ("location_Suburban", -10.0),
    ("location_Urban", 35.0),
    ("company_tier_Mid Tier", 25.0),
    ("company_tier_Other", 0.0),
    ("company_tier_Startup", -20.0),
    ("company_tier_Top Tier", 75.0),
];

/// Build the demo model.
pub fn starter_model() -> LinearModel {
    LinearModel {
        name: "paycast-starter".to_string(),
        intercept: STARTER_INTERCEPT,
        coefficients: STARTER_COEFFICIENTS.iter().map(|&(_, c)| c).collect(),
    }
}

/// The feature list matching `starter_model`, in order.
pub fn starter_feature_names() -> Vec<String> {
    STARTER_COEFFICIENTS
        .iter()
        .map(|&(name, _)| name.to_string())
        .collect()
}

/// Write `model.json` + `features.txt` into `dir`.
///
/// Refuses to overwrite existing files unless `force` is set.
pub fn write_starter_files(dir: &Path, force: bool) -> Result<(PathBuf, PathBuf), AppError> {
    fs::create_dir_all(dir).map_err(|e| {
        AppError::new(
            EXIT_IO,
            format!("Failed to create directory '{}': {e}", dir.display()),
        )
    })?;

    let model_path = dir.join(DEFAULT_MODEL_PATH);
    let features_path = dir.join(DEFAULT_FEATURES_PATH);

    if !force {
        for path in [&model_path, &features_path] {
            if path.exists() {
                return Err(AppError::new(
                    EXIT_IO,
                    format!(
                        "'{}' already exists. Re-run with --force to overwrite.",
                        path.display()
                    ),
                ));
            }
        }
    }

    let model_json = serde_json::to_string_pretty(&starter_model())
        .map_err(|e| AppError::new(EXIT_IO, format!("Failed to serialize starter model: {e}")))?;
    fs::write(&model_path, model_json).map_err(|e| {
        AppError::new(
            EXIT_IO,
            format!("Failed to write '{}': {e}", model_path.display()),
        )
    })?;

    fs::write(&features_path, starter_feature_names().join(",")).map_err(|e| {
        AppError::new(
            EXIT_IO,
            format!("Failed to write '{}': {e}", features_path.display()),
        )
    })?;

    Ok((model_path, features_path))
}
