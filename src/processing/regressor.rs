//! Fitted regression models loaded from a JSON export

use crate::error::{Result, ResumeMatcherError};
use crate::processing::scorer::{FeatureVector, Regressor};
use ndarray::Array1;
use serde::{Deserialize, Serialize};

/// Serialized regressor, tagged by model family.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum RegressorArtifact {
    Linear { coef: Vec<f64>, intercept: f64 },
}

impl RegressorArtifact {
    pub fn into_regressor(self) -> Result<Box<dyn Regressor>> {
        match self {
            RegressorArtifact::Linear { coef, intercept } => {
                Ok(Box::new(LinearRegressor::new(coef, intercept)?))
            }
        }
    }
}

/// `prediction = coef · features + intercept`
#[derive(Debug, Clone)]
pub struct LinearRegressor {
    coef: Array1<f64>,
    intercept: f64,
}

impl LinearRegressor {
    pub fn new(coef: Vec<f64>, intercept: f64) -> Result<Self> {
        if !intercept.is_finite() || coef.iter().any(|c| !c.is_finite()) {
            return Err(ResumeMatcherError::ArtifactLoad(
                "Linear model parameters must be finite".to_string(),
            ));
        }

        Ok(Self {
            coef: Array1::from(coef),
            intercept,
        })
    }
}

impl Regressor for LinearRegressor {
    fn predict(&self, features: &FeatureVector) -> Result<f64> {
        if features.len() != self.coef.len() {
            return Err(ResumeMatcherError::Scoring(format!(
                "Feature vector has {} columns but the model expects {}",
                features.len(),
                self.coef.len()
            )));
        }

        Ok(self.coef.dot(features) + self.intercept)
    }

    fn input_dimension(&self) -> Option<usize> {
        Some(self.coef.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_linear_prediction() {
        let model = LinearRegressor::new(vec![30.0, 20.0, 10.0], 5.0).unwrap();
        let prediction = model.predict(&array![1.0, 0.5, 0.0]).unwrap();
        assert_eq!(prediction, 45.0);
    }

    #[test]
    fn test_shape_mismatch_is_a_scoring_error() {
        let model = LinearRegressor::new(vec![1.0, 2.0], 0.0).unwrap();
        let result = model.predict(&array![1.0, 2.0, 3.0]);
        assert!(matches!(result, Err(ResumeMatcherError::Scoring(_))));
    }

    #[test]
    fn test_non_finite_parameters_are_rejected() {
        assert!(LinearRegressor::new(vec![f64::NAN], 0.0).is_err());
        assert!(LinearRegressor::new(vec![1.0], f64::INFINITY).is_err());
    }

    #[test]
    fn test_artifact_from_json() {
        let json = r#"{"kind": "linear", "coef": [2.0, 3.0], "intercept": -1.0}"#;
        let artifact: RegressorArtifact = serde_json::from_str(json).unwrap();
        let model = artifact.into_regressor().unwrap();

        assert_eq!(model.input_dimension(), Some(2));
        assert_eq!(model.predict(&array![1.0, 1.0]).unwrap(), 4.0);
    }
}
