//! Command-line parsing for the salary estimator.
//!
//! The goal of this module is to keep **argument parsing** and **command
//! dispatch** separate from the estimation code.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::{CompanyTier, Education, Location, Role};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "pay", version, about = "Employee salary estimator (linear-model based)")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run one prediction from flags and print the adjusted salary.
    Predict(PredictArgs),
    /// Print the static illustrative salary-growth curve (no model needed).
    Curve(CurveArgs),
    /// Launch the interactive TUI form.
    ///
    /// This uses the same underlying pipeline as `pay predict`, but renders
    /// the form, result, and chart in a terminal UI using Ratatui.
    Tui(TuiArgs),
    /// Write a starter model.json + features.txt into a directory.
    Init(InitArgs),
}

/// Inputs and options for a one-shot prediction.
#[derive(Debug, Parser, Clone)]
pub struct PredictArgs {
    /// Age in years (18-70).
    #[arg(short = 'a', long, default_value_t = 24,
          value_parser = clap::value_parser!(u32).range(18..=70))]
    pub age: u32,

    /// Years of experience (must be at most age - 18).
    #[arg(short = 'e', long, default_value_t = 2)]
    pub experience: u32,

    /// Education level.
    #[arg(long, value_enum, default_value_t = Education::HighSchool)]
    pub education: Education,

    /// Job role.
    #[arg(long, value_enum, default_value_t = Role::Developer)]
    pub role: Role,

    /// Job location.
    #[arg(long, value_enum, default_value_t = Location::Urban)]
    pub location: Location,

    /// Company tier.
    #[arg(long = "tier", value_enum, default_value_t = CompanyTier::TopTier)]
    pub company_tier: CompanyTier,

    /// Model JSON path (default: PAY_MODEL or model.json).
    #[arg(long)]
    pub model: Option<PathBuf>,

    /// Feature-list path (default: PAY_FEATURES or features.txt).
    #[arg(long)]
    pub features: Option<PathBuf>,

    /// Export the estimate (inputs + adjustment chain) to JSON.
    #[arg(long)]
    pub export: Option<PathBuf>,
}

/// Options for the illustrative curve.
#[derive(Debug, Parser)]
pub struct CurveArgs {
    /// Upper end of the experience range (years).
    #[arg(long, default_value_t = crate::curve::MAX_EXPERIENCE_YEARS)]
    pub max_years: u32,

    /// Export the curve grid to JSON.
    #[arg(long)]
    pub export: Option<PathBuf>,
}

/// Options for the interactive TUI.
#[derive(Debug, Parser, Clone)]
pub struct TuiArgs {
    /// Model JSON path (default: PAY_MODEL or model.json).
    #[arg(long)]
    pub model: Option<PathBuf>,

    /// Feature-list path (default: PAY_FEATURES or features.txt).
    #[arg(long)]
    pub features: Option<PathBuf>,
}

/// Options for starter-file generation.
#[derive(Debug, Parser)]
pub struct InitArgs {
    /// Directory to write model.json and features.txt into.
    #[arg(long, default_value = ".")]
    pub dir: PathBuf,

    /// Overwrite existing files.
    #[arg(long)]
    pub force: bool,
}
