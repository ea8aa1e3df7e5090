//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory during estimation
//! - exported to JSON
//! - reloaded later for comparisons

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Minimum accepted age (working age).
pub const AGE_MIN: u32 = 18;
/// Maximum accepted age.
pub const AGE_MAX: u32 = 70;

/// Highest education level attained.
///
/// Labels must match the category strings the model was trained with; the
/// one-hot feature names are derived from them (`education_<label>`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Education {
    HighSchool,
    Bachelor,
    Master,
    #[serde(rename = "phd")]
    #[value(name = "phd")]
    PhD,
}

impl Education {
    pub const ALL: [Education; 4] = [
        Education::HighSchool,
        Education::Bachelor,
        Education::Master,
        Education::PhD,
    ];

    /// Training-data category string (also the one-hot suffix).
    pub fn label(self) -> &'static str {
        match self {
            Education::HighSchool => "High School",
            Education::Bachelor => "Bachelor",
            Education::Master => "Master",
            Education::PhD => "PhD",
        }
    }

    pub fn next(self) -> Self {
        cycle(&Self::ALL, self, 1)
    }

    pub fn prev(self) -> Self {
        cycle(&Self::ALL, self, -1)
    }
}

/// Job role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    Developer,
    DataAnalyst,
    Manager,
    Researcher,
    Other,
}

impl Role {
    pub const ALL: [Role; 5] = [
        Role::Developer,
        Role::DataAnalyst,
        Role::Manager,
        Role::Researcher,
        Role::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Role::Developer => "Developer",
            Role::DataAnalyst => "Data Analyst",
            Role::Manager => "Manager",
            Role::Researcher => "Researcher",
            Role::Other => "Other",
        }
    }

    pub fn next(self) -> Self {
        cycle(&Self::ALL, self, 1)
    }

    pub fn prev(self) -> Self {
        cycle(&Self::ALL, self, -1)
    }
}

/// Job location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Location {
    Urban,
    Suburban,
    Rural,
}

impl Location {
    pub const ALL: [Location; 3] = [Location::Urban, Location::Suburban, Location::Rural];

    pub fn label(self) -> &'static str {
        match self {
            Location::Urban => "Urban",
            Location::Suburban => "Suburban",
            Location::Rural => "Rural",
        }
    }

    pub fn next(self) -> Self {
        cycle(&Self::ALL, self, 1)
    }

    pub fn prev(self) -> Self {
        cycle(&Self::ALL, self, -1)
    }
}

/// Company tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum CompanyTier {
    TopTier,
    MidTier,
    Startup,
    Other,
}

impl CompanyTier {
    pub const ALL: [CompanyTier; 4] = [
        CompanyTier::TopTier,
        CompanyTier::MidTier,
        CompanyTier::Startup,
        CompanyTier::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            CompanyTier::TopTier => "Top Tier",
            CompanyTier::MidTier => "Mid Tier",
            CompanyTier::Startup => "Startup",
            CompanyTier::Other => "Other",
        }
    }

    pub fn next(self) -> Self {
        cycle(&Self::ALL, self, 1)
    }

    pub fn prev(self) -> Self {
        cycle(&Self::ALL, self, -1)
    }
}

fn cycle<T: Copy + PartialEq>(all: &[T], current: T, delta: i32) -> T {
    let idx = all.iter().position(|v| *v == current).unwrap_or(0);
    let len = all.len() as i32;
    let next = (idx as i32 + delta).rem_euclid(len);
    all[next as usize]
}

/// One estimation request's raw inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInput {
    pub age: u32,
    pub experience: u32,
    pub education: Education,
    pub role: Role,
    pub location: Location,
    pub company_tier: CompanyTier,
}

impl UserInput {
    /// Maximum plausible experience for this age.
    pub fn max_experience(&self) -> u32 {
        self.age.saturating_sub(AGE_MIN)
    }

    /// Enforce `experience ≤ age − 18`.
    ///
    /// A violation is a recoverable warning (the estimate is simply not
    /// computed), not an error.
    pub fn validate(&self) -> Result<(), InputWarning> {
        if self.experience > self.max_experience() {
            return Err(InputWarning {
                age: self.age,
                experience: self.experience,
            });
        }
        Ok(())
    }
}

/// Recoverable input-validation warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputWarning {
    pub age: u32,
    pub experience: u32,
}

impl std::fmt::Display for InputWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Experience can't be greater than age - 18 (age {} allows at most {} years, got {}).",
            self.age,
            self.age.saturating_sub(AGE_MIN),
            self.experience
        )
    }
}

/// Ordered list of feature names the model expects.
///
/// This is external ground truth: the encoder projects whatever it produces
/// onto exactly these names, in this order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureSchema {
    pub names: Vec<String>,
}

impl FeatureSchema {
    pub fn new(names: Vec<String>) -> Self {
        Self { names }
    }

    /// Parse the comma-separated feature-list format.
    ///
    /// Whitespace around names is trimmed; empty segments (e.g. a trailing
    /// comma) are skipped.
    pub fn parse(text: &str) -> Self {
        let names = text
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        Self { names }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Every intermediate of the salary adjustment chain.
///
/// The fields are listed in application order; keeping all of them makes the
/// step ordering visible in exports and pins it in tests.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SalaryBreakdown {
    /// The model's direct output.
    pub raw_prediction: f64,
    /// `raw_prediction * 100`.
    pub scaled: f64,
    /// `scaled` clamped to [20000, 500000]. The clamp happens here, before
    /// any multiplier, and is never re-applied.
    pub clamped: f64,
    pub tier_factor: f64,
    pub experience_factor: f64,
    pub role_factor: f64,
    /// `clamped * tier_factor * experience_factor * role_factor`.
    pub adjusted: f64,
    /// `adjusted` rounded to the nearest hundred (ties to even).
    pub final_salary: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enum_cycling_wraps() {
        assert_eq!(Education::PhD.next(), Education::HighSchool);
        assert_eq!(Education::HighSchool.prev(), Education::PhD);
        assert_eq!(CompanyTier::TopTier.prev(), CompanyTier::Other);
        assert_eq!(Location::Rural.next(), Location::Urban);
    }

    #[test]
    fn validate_accepts_boundary_experience() {
        let input = UserInput {
            age: 30,
            experience: 12,
            education: Education::Bachelor,
            role: Role::Developer,
            location: Location::Urban,
            company_tier: CompanyTier::MidTier,
        };
        assert!(input.validate().is_ok());
    }

    #[test]
    fn validate_rejects_excess_experience() {
        let input = UserInput {
            age: 30,
            experience: 13,
            education: Education::Bachelor,
            role: Role::Developer,
            location: Location::Urban,
            company_tier: CompanyTier::MidTier,
        };
        let warning = input.validate().unwrap_err();
        assert_eq!(warning.age, 30);
        assert_eq!(warning.experience, 13);
        assert!(warning.to_string().contains("age - 18"));
    }

    #[test]
    fn schema_parse_trims_and_skips_empty() {
        let schema = FeatureSchema::parse("age, experience,education_PhD,\n");
        assert_eq!(schema.names, vec!["age", "experience", "education_PhD"]);
        assert_eq!(schema.len(), 3);
    }
}
