//! Startup loading of the model and the expected feature list.
//!
//! Both artifacts are loaded exactly once, before any input is accepted, and
//! are treated as read-only for the rest of the process. Any failure here is
//! fatal: the interactive session must not start against a missing or
//! inconsistent model.
//!
//! Path resolution order (model and feature list independently):
//!
//! 1. explicit CLI flag
//! 2. `PAY_MODEL` / `PAY_FEATURES` environment variables (`.env` honored)
//! 3. conventional defaults `model.json` / `features.txt`

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::FeatureSchema;
use crate::model::{LinearModel, Predictor};

/// Default model file path.
pub const DEFAULT_MODEL_PATH: &str = "model.json";
/// Default feature-list file path.
pub const DEFAULT_FEATURES_PATH: &str = "features.txt";

/// Environment variable overriding the model path.
pub const MODEL_ENV: &str = "PAY_MODEL";
/// Environment variable overriding the feature-list path.
pub const FEATURES_ENV: &str = "PAY_FEATURES";

/// Fatal startup-loading errors.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid model JSON '{path}': {message}")]
    Parse { path: PathBuf, message: String },
    #[error("feature list '{path}' is empty")]
    EmptySchema { path: PathBuf },
    #[error("model '{model}' has {coefficients} coefficients but feature list has {features} names")]
    Shape {
        model: String,
        coefficients: usize,
        features: usize,
    },
}

/// Resolve the model and feature-list paths from flags, env, and defaults.
pub fn resolve_paths(model: Option<PathBuf>, features: Option<PathBuf>) -> (PathBuf, PathBuf) {
    dotenvy::dotenv().ok();

    let model = model
        .or_else(|| std::env::var(MODEL_ENV).ok().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_MODEL_PATH));
    let features = features
        .or_else(|| std::env::var(FEATURES_ENV).ok().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_FEATURES_PATH));

    (model, features)
}

/// Load the linear model JSON.
pub fn load_model(path: &Path) -> Result<LinearModel, LoadError> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|e| LoadError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load the ordered feature-name list (comma-separated).
pub fn load_schema(path: &Path) -> Result<FeatureSchema, LoadError> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let schema = FeatureSchema::parse(&text);
    if schema.is_empty() {
        return Err(LoadError::EmptySchema {
            path: path.to_path_buf(),
        });
    }
    Ok(schema)
}

/// Load both artifacts and cross-check their widths.
///
/// The width check makes per-request shape mismatches unreachable from the
/// normal pipeline: an encoded vector always has `schema.len()` values.
pub fn load_bundle(
    model_path: &Path,
    features_path: &Path,
) -> Result<(LinearModel, FeatureSchema), LoadError> {
    let model = load_model(model_path)?;
    let schema = load_schema(features_path)?;

    let width = model.feature_len();
    if width != schema.len() {
        return Err(LoadError::Shape {
            model: model.name,
            coefficients: width,
            features: schema.len(),
        });
    }

    Ok((model, schema))
}
