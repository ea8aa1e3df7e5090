//! Formatting utilities for terminal output.
//!
//! We keep formatting code in one place so:
//! - the estimation code stays clean and testable
//! - output changes are localized (important for future snapshot tests)

use crate::app::pipeline::Estimate;
use crate::domain::{InputWarning, UserInput};

/// Format an integer salary as a currency string: rupee symbol plus western
/// thousands grouping, e.g. `₹264,000`.
pub fn format_currency(value: i64) -> String {
    let negative = value < 0;
    let digits = value.unsigned_abs().to_string();

    let mut grouped = String::new();
    for (i, ch) in digits.chars().enumerate() {
        let remaining = digits.len() - i;
        if i > 0 && remaining % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if negative {
        format!("-₹{grouped}")
    } else {
        format!("₹{grouped}")
    }
}

/// One-line input summary, shared by the CLI report and the TUI header.
pub fn format_input_line(input: &UserInput) -> String {
    format!(
        "age {} | experience {}y | {} | {} | {} | {}",
        input.age,
        input.experience,
        input.education.label(),
        input.role.label(),
        input.location.label(),
        input.company_tier.label(),
    )
}

/// Full estimate report: inputs, the adjustment chain in order, final salary.
pub fn format_estimate(estimate: &Estimate) -> String {
    let b = &estimate.breakdown;
    let mut out = String::new();

    out.push_str("=== pay - salary estimate ===\n");
    out.push_str(&format!("Inputs: {}\n", format_input_line(&estimate.input)));
    out.push('\n');
    out.push_str("Adjustment chain:\n");
    out.push_str(&format!("  raw prediction    {:>12.2}\n", b.raw_prediction));
    out.push_str(&format!("  scaled (x100)     {:>12.2}\n", b.scaled));
    out.push_str(&format!("  clamped           {:>12.2}\n", b.clamped));
    out.push_str(&format!("  tier factor       {:>12}\n", fmt_factor(b.tier_factor)));
    out.push_str(&format!("  experience factor {:>12}\n", fmt_factor(b.experience_factor)));
    out.push_str(&format!("  role factor       {:>12}\n", fmt_factor(b.role_factor)));
    out.push_str(&format!("  adjusted          {:>12.2}\n", b.adjusted));
    out.push('\n');
    out.push_str(&format!(
        "Estimated monthly salary: {}\n",
        format_currency(b.final_salary)
    ));

    out
}

/// Warning line for a rejected input.
pub fn format_warning(warning: &InputWarning) -> String {
    format!("Warning: {warning}")
}

/// Table of the illustrative salary-growth curve.
pub fn format_curve_table(points: &[(u32, i64)]) -> String {
    let mut out = String::new();

    out.push_str("Estimated salary by experience (illustrative):\n");
    out.push_str(&format!("{:>10} {:>14}\n", "experience", "salary"));
    out.push_str(&format!("{:->10} {:->14}\n", "", ""));
    for &(exp, salary) in points {
        out.push_str(&format!("{exp:>9}y {:>14}\n", format_currency(salary)));
    }

    out
}

fn fmt_factor(v: f64) -> String {
    format!("x{v:.2}")
}
