//! Shared estimation pipeline used by both CLI and TUI front-ends.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! validate -> encode -> model predict -> adjust
//!
//! The CLI and the TUI can then focus on presentation (printing vs widgets).

use serde::{Deserialize, Serialize};

use crate::adjust;
use crate::domain::{FeatureSchema, InputWarning, SalaryBreakdown, UserInput};
use crate::encode;
use crate::error::{AppError, EXIT_RUNTIME};
use crate::model::Predictor;

/// One completed estimation run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Estimate {
    pub input: UserInput,
    pub breakdown: SalaryBreakdown,
}

impl Estimate {
    pub fn final_salary(&self) -> i64 {
        self.breakdown.final_salary
    }
}

/// Result of a predict request.
///
/// An invariant violation is not an error: the request is simply not
/// computed and the warning is surfaced to the user.
#[derive(Debug, Clone)]
pub enum Outcome {
    Estimate(Estimate),
    Invalid(InputWarning),
}

/// Execute one predict request.
///
/// The invariant check runs first; a violated input is rejected before any
/// encoding or model call. Model failures come back as an `AppError` whose
/// message names the underlying cause; the caller decides whether that ends
/// the process (one-shot CLI) or just the request (TUI).
pub fn run_predict(
    model: &dyn Predictor,
    schema: &FeatureSchema,
    input: &UserInput,
) -> Result<Outcome, AppError> {
    if let Err(warning) = input.validate() {
        return Ok(Outcome::Invalid(warning));
    }

    let features = encode::encode(input, schema);
    let raw = model.predict(&features)?;

    // The trait contract screens non-finite outputs, but the adjuster must
    // never run on one regardless of the Predictor impl behind the trait.
    if !raw.is_finite() {
        return Err(AppError::new(
            EXIT_RUNTIME,
            "Prediction failed: model produced a non-finite value",
        ));
    }

    Ok(Outcome::Estimate(Estimate {
        input: *input,
        breakdown: adjust::adjust(raw, input),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CompanyTier, Education, Location, Role};
    use crate::model::ModelError;
    use std::cell::Cell;

    struct StubPredictor {
        calls: Cell<usize>,
        result: f64,
        fail: bool,
    }

    impl StubPredictor {
        fn returning(result: f64) -> Self {
            Self {
                calls: Cell::new(0),
                result,
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                calls: Cell::new(0),
                result: 0.0,
                fail: true,
            }
        }
    }

    impl Predictor for StubPredictor {
        fn feature_len(&self) -> usize {
            2
        }

        fn predict(&self, _features: &[f64]) -> Result<f64, ModelError> {
            self.calls.set(self.calls.get() + 1);
            if self.fail {
                return Err(ModelError::ShapeMismatch {
                    expected: 2,
                    actual: 0,
                });
            }
            Ok(self.result)
        }
    }

    fn schema() -> FeatureSchema {
        FeatureSchema::parse("age,experience")
    }

    fn input(age: u32, experience: u32) -> UserInput {
        UserInput {
            age,
            experience,
            education: Education::Bachelor,
            role: Role::Developer,
            location: Location::Urban,
            company_tier: CompanyTier::MidTier,
        }
    }

    #[test]
    fn invalid_input_is_rejected_before_the_model_runs() {
        let stub = StubPredictor::returning(2000.0);
        let outcome = run_predict(&stub, &schema(), &input(30, 13)).unwrap();
        assert!(matches!(outcome, Outcome::Invalid(_)));
        assert_eq!(stub.calls.get(), 0);
    }

    #[test]
    fn boundary_experience_is_accepted() {
        let stub = StubPredictor::returning(2000.0);
        let outcome = run_predict(&stub, &schema(), &input(30, 12)).unwrap();
        assert!(matches!(outcome, Outcome::Estimate(_)));
        assert_eq!(stub.calls.get(), 1);
    }

    #[test]
    fn valid_input_flows_through_the_adjuster() {
        let stub = StubPredictor::returning(2000.0);
        let outcome = run_predict(&stub, &schema(), &input(30, 8)).unwrap();
        let Outcome::Estimate(estimate) = outcome else {
            panic!("expected an estimate");
        };
        // 2000 → 200000 → ×1.1 → ×1.2 → 264000
        assert_eq!(estimate.final_salary(), 264_000);
    }

    #[test]
    fn model_failure_reports_the_cause_and_only_fails_this_request() {
        let stub = StubPredictor::failing();
        let err = run_predict(&stub, &schema(), &input(30, 8)).unwrap_err();
        assert!(err.to_string().starts_with("Prediction failed:"));
        assert!(err.to_string().contains("shape mismatch"));
        assert_eq!(err.exit_code(), EXIT_RUNTIME);
    }

    #[test]
    fn non_finite_model_output_never_reaches_the_adjuster() {
        let stub = StubPredictor::returning(f64::NAN);
        let err = run_predict(&stub, &schema(), &input(30, 8)).unwrap_err();
        assert!(err.to_string().contains("non-finite"));
    }

    #[test]
    fn identical_requests_yield_identical_estimates() {
        let stub = StubPredictor::returning(1234.5);
        let a = run_predict(&stub, &schema(), &input(40, 20)).unwrap();
        let b = run_predict(&stub, &schema(), &input(40, 20)).unwrap();
        let (Outcome::Estimate(a), Outcome::Estimate(b)) = (a, b) else {
            panic!("expected estimates");
        };
        assert_eq!(a.breakdown, b.breakdown);
    }
}
