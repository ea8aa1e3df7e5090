//! Salary adjustment: raw model output → final displayed salary.
//!
//! The chain is a fixed sequence; each step feeds the next and no step may
//! be reordered:
//!
//! 1. scale the raw prediction by 100
//! 2. clamp to [20000, 500000]
//! 3. company-tier multiplier
//! 4. experience multiplier
//! 5. role multiplier
//! 6. round to the nearest hundred (ties to even) and convert to integer
//!
//! The clamp runs before the multipliers and is never re-applied, so the
//! final value can land outside the nominal [20000, 500000] band. That is
//! the reference behavior and is preserved as-is.

use crate::domain::{CompanyTier, Role, SalaryBreakdown, UserInput};

/// Scale factor applied to the model's direct output.
pub const SCALE: f64 = 100.0;
/// Lower clamp bound applied to the scaled prediction.
pub const FLOOR: f64 = 20_000.0;
/// Upper clamp bound applied to the scaled prediction.
pub const CEILING: f64 = 500_000.0;

/// Company-tier multiplier (step 3).
pub fn tier_factor(tier: CompanyTier) -> f64 {
    match tier {
        CompanyTier::TopTier => 1.4,
        CompanyTier::Startup => 0.85,
        CompanyTier::MidTier => 1.1,
        CompanyTier::Other => 1.0,
    }
}

/// Experience multiplier (step 4).
pub fn experience_factor(years: u32) -> f64 {
    match years {
        0..=1 => 0.8,
        2..=5 => 1.0,
        6..=10 => 1.2,
        _ => 1.5,
    }
}

/// Role multiplier (step 5).
pub fn role_factor(role: Role) -> f64 {
    match role {
        Role::Manager | Role::Researcher => 1.1,
        Role::Other => 0.9,
        Role::Developer | Role::DataAnalyst => 1.0,
    }
}

/// Round to the nearest multiple of 100, ties to even.
pub fn round_to_hundred(value: f64) -> i64 {
    ((value / 100.0).round_ties_even() * 100.0) as i64
}

/// Run the full adjustment chain.
///
/// Pure: identical `(raw_prediction, input)` always yields an identical
/// breakdown. Callers must not invoke this with a failed or non-finite
/// model output; that is screened at the pipeline boundary.
pub fn adjust(raw_prediction: f64, input: &UserInput) -> SalaryBreakdown {
    let scaled = raw_prediction * SCALE;
    let clamped = scaled.clamp(FLOOR, CEILING);

    let tier = tier_factor(input.company_tier);
    let experience = experience_factor(input.experience);
    let role = role_factor(input.role);

    let adjusted = clamped * tier * experience * role;
    let final_salary = round_to_hundred(adjusted);

    SalaryBreakdown {
        raw_prediction,
        scaled,
        clamped,
        tier_factor: tier,
        experience_factor: experience,
        role_factor: role,
        adjusted,
        final_salary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Education, Location};

    fn input(experience: u32, role: Role, tier: CompanyTier) -> UserInput {
        UserInput {
            age: 40,
            experience,
            education: Education::Bachelor,
            role,
            location: Location::Urban,
            company_tier: tier,
        }
    }

    #[test]
    fn end_to_end_mid_tier_developer() {
        // raw=2000 → scaled=200000 → clamp no-op → ×1.1 → ×1.2 → ×1.0 → 264000
        let b = adjust(2000.0, &input(8, Role::Developer, CompanyTier::MidTier));
        assert_eq!(b.scaled, 200_000.0);
        assert_eq!(b.clamped, 200_000.0);
        assert_eq!(b.tier_factor, 1.1);
        assert_eq!(b.experience_factor, 1.2);
        assert_eq!(b.role_factor, 1.0);
        assert_eq!(b.final_salary, 264_000);
    }

    #[test]
    fn floor_applies_before_multipliers() {
        // raw=100 → scaled=10000 → clamped to 20000 → ×1.4 → 28000.
        // If the multipliers ran on the unclamped value the result would be
        // round(10000 * 1.4) = 14000 instead.
        let b = adjust(100.0, &input(3, Role::Developer, CompanyTier::TopTier));
        assert_eq!(b.clamped, 20_000.0);
        assert_eq!(b.final_salary, 28_000);
    }

    #[test]
    fn ceiling_is_not_reapplied_after_multipliers() {
        // raw=6000 → scaled=600000 → clamped to 500000 → ×1.4 → 700000.
        let b = adjust(6000.0, &input(3, Role::Developer, CompanyTier::TopTier));
        assert_eq!(b.clamped, 500_000.0);
        assert_eq!(b.final_salary, 700_000);
    }

    #[test]
    fn multipliers_can_undershoot_the_floor() {
        // Clamped 20000 × 0.8 (≤1y) × 0.9 (Other role) = 14400, below FLOOR.
        let b = adjust(100.0, &input(1, Role::Other, CompanyTier::Other));
        assert_eq!(b.final_salary, 14_400);
    }

    #[test]
    fn experience_brackets() {
        assert_eq!(experience_factor(0), 0.8);
        assert_eq!(experience_factor(1), 0.8);
        assert_eq!(experience_factor(2), 1.0);
        assert_eq!(experience_factor(5), 1.0);
        assert_eq!(experience_factor(6), 1.2);
        assert_eq!(experience_factor(10), 1.2);
        assert_eq!(experience_factor(11), 1.5);
    }

    #[test]
    fn role_and_tier_factors() {
        assert_eq!(role_factor(Role::Manager), 1.1);
        assert_eq!(role_factor(Role::Researcher), 1.1);
        assert_eq!(role_factor(Role::Other), 0.9);
        assert_eq!(role_factor(Role::Developer), 1.0);
        assert_eq!(role_factor(Role::DataAnalyst), 1.0);
        assert_eq!(tier_factor(CompanyTier::Startup), 0.85);
        assert_eq!(tier_factor(CompanyTier::Other), 1.0);
    }

    #[test]
    fn rounding_is_ties_to_even_at_hundreds() {
        assert_eq!(round_to_hundred(150.0), 200);
        assert_eq!(round_to_hundred(250.0), 200);
        assert_eq!(round_to_hundred(249.99), 200);
        assert_eq!(round_to_hundred(23_450.0), 23_400);
        assert_eq!(round_to_hundred(23_550.0), 23_600);
        assert_eq!(round_to_hundred(0.0), 0);
    }

    #[test]
    fn adjust_is_idempotent() {
        let i = input(7, Role::Manager, CompanyTier::Startup);
        let a = adjust(1234.5, &i);
        let b = adjust(1234.5, &i);
        assert_eq!(a, b);
    }
}
