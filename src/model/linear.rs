//! Linear regression model: `intercept + coefficients · features`.
//!
//! The model file is the portable representation of the trained regression:
//! a name tag, the intercept, and one coefficient per expected feature, in
//! schema order. See `io::load` for the file handling.

use nalgebra::DVector;
use serde::{Deserialize, Serialize};

use super::{ModelError, Predictor};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearModel {
    pub name: String,
    pub intercept: f64,
    pub coefficients: Vec<f64>,
}

impl Predictor for LinearModel {
    fn feature_len(&self) -> usize {
        self.coefficients.len()
    }

    fn predict(&self, features: &[f64]) -> Result<f64, ModelError> {
        if features.len() != self.coefficients.len() {
            return Err(ModelError::ShapeMismatch {
                expected: self.coefficients.len(),
                actual: features.len(),
            });
        }

        let x = DVector::from_row_slice(features);
        let w = DVector::from_row_slice(&self.coefficients);
        let y = self.intercept + w.dot(&x);

        if !y.is_finite() {
            return Err(ModelError::NonFinite);
        }
        Ok(y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> LinearModel {
        LinearModel {
            name: "test".to_string(),
            intercept: 10.0,
            coefficients: vec![2.0, -1.0, 0.5],
        }
    }

    #[test]
    fn predict_is_intercept_plus_dot_product() {
        let y = model().predict(&[3.0, 4.0, 2.0]).unwrap();
        // 10 + 6 - 4 + 1 = 13
        assert!((y - 13.0).abs() < 1e-12);
    }

    #[test]
    fn predict_rejects_wrong_width() {
        let err = model().predict(&[1.0, 2.0]).unwrap_err();
        match err {
            ModelError::ShapeMismatch { expected, actual } => {
                assert_eq!(expected, 3);
                assert_eq!(actual, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn predict_rejects_non_finite_output() {
        let mut m = model();
        m.intercept = f64::INFINITY;
        assert!(matches!(
            m.predict(&[0.0, 0.0, 0.0]),
            Err(ModelError::NonFinite)
        ));
    }
}
