//! Feature encoding: raw user inputs → fixed-width feature vector.
//!
//! The model was trained on one-hot encoded categoricals plus the raw
//! numerics. Encoding therefore has two halves:
//!
//! - build the produced features: `age`/`experience` by their own name, and
//!   `<field>_<label>` = 1 for each categorical value
//! - project onto the schema: every schema name missing from the produced
//!   set is filled with 0, and produced names outside the schema are dropped
//!
//! The schema is ground truth; this function is total and has no error
//! conditions.

use std::collections::HashMap;

use crate::domain::{FeatureSchema, UserInput};

/// Encode `input` against the expected feature-name schema.
///
/// The output has exactly `schema.len()` values, aligned 1:1 with
/// `schema.names`.
pub fn encode(input: &UserInput, schema: &FeatureSchema) -> Vec<f64> {
    let produced = produce_features(input);
    schema
        .names
        .iter()
        .map(|name| produced.get(name.as_str()).copied().unwrap_or(0.0))
        .collect()
}

fn produce_features(input: &UserInput) -> HashMap<String, f64> {
    let mut out = HashMap::new();
    out.insert("age".to_string(), f64::from(input.age));
    out.insert("experience".to_string(), f64::from(input.experience));
    out.insert(format!("education_{}", input.education.label()), 1.0);
    out.insert(format!("role_{}", input.role.label()), 1.0);
    out.insert(format!("location_{}", input.location.label()), 1.0);
    out.insert(format!("company_tier_{}", input.company_tier.label()), 1.0);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CompanyTier, Education, Location, Role};

    fn sample_input() -> UserInput {
        UserInput {
            age: 30,
            experience: 8,
            education: Education::Bachelor,
            role: Role::DataAnalyst,
            location: Location::Urban,
            company_tier: CompanyTier::TopTier,
        }
    }

    #[test]
    fn output_matches_schema_length_and_order() {
        let schema = FeatureSchema::parse(
            "age,experience,education_Bachelor,education_PhD,role_Data Analyst,\
             location_Urban,company_tier_Top Tier",
        );
        let features = encode(&sample_input(), &schema);

        assert_eq!(features.len(), schema.len());
        assert_eq!(features[0], 30.0); // age
        assert_eq!(features[1], 8.0); // experience
        assert_eq!(features[2], 1.0); // education_Bachelor
        assert_eq!(features[3], 0.0); // education_PhD (not selected)
        assert_eq!(features[4], 1.0); // role_Data Analyst
        assert_eq!(features[5], 1.0); // location_Urban
        assert_eq!(features[6], 1.0); // company_tier_Top Tier
    }

    #[test]
    fn schema_names_never_produced_are_zero_filled() {
        let schema = FeatureSchema::parse("age,bonus_target,education_Master");
        let features = encode(&sample_input(), &schema);
        assert_eq!(features, vec![30.0, 0.0, 0.0]);
    }

    #[test]
    fn produced_features_outside_schema_are_dropped() {
        // The schema omits everything but experience; the other produced
        // features (age, the one-hots) must not leak into the output.
        let schema = FeatureSchema::parse("experience");
        let features = encode(&sample_input(), &schema);
        assert_eq!(features, vec![8.0]);
    }

    #[test]
    fn one_hot_labels_use_training_spelling() {
        let produced = produce_features(&sample_input());
        assert_eq!(produced.get("role_Data Analyst"), Some(&1.0));
        assert_eq!(produced.get("company_tier_Top Tier"), Some(&1.0));
        assert!(!produced.contains_key("role_DataAnalyst"));
    }
}
