//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the closed input enums (`Education`, `Role`, `Location`, `CompanyTier`)
//! - the validated user input (`UserInput`)
//! - the expected feature-name schema (`FeatureSchema`)
//! - adjuster output (`SalaryBreakdown`)

pub mod types;

pub use types::*;
