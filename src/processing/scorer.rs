//! Compatibility scoring over a fitted vectorizer and regressor

use crate::error::{Result, ResumeMatcherError};
use crate::processing::regressor::RegressorArtifact;
use crate::processing::tfidf::TfidfVectorizer;
use log::{debug, info};
use ndarray::Array1;
use std::path::Path;
use std::time::Instant;

pub type FeatureVector = Array1<f64>;

/// Turns normalized text into a fixed-length feature vector.
pub trait Vectorizer: Send + Sync {
    fn transform(&self, text: &str) -> Result<FeatureVector>;

    fn dimension(&self) -> usize;
}

/// Maps a feature vector to a single real-valued prediction.
pub trait Regressor: Send + Sync {
    fn predict(&self, features: &FeatureVector) -> Result<f64>;

    /// Expected feature length, when the model knows it.
    fn input_dimension(&self) -> Option<usize> {
        None
    }
}

/// The two loaded-once, read-many model artifacts.
pub struct CompatibilityScorer {
    vectorizer: Box<dyn Vectorizer>,
    regressor: Box<dyn Regressor>,
}

impl CompatibilityScorer {
    pub fn new(vectorizer: Box<dyn Vectorizer>, regressor: Box<dyn Regressor>) -> Result<Self> {
        if let Some(expected) = regressor.input_dimension() {
            if expected != vectorizer.dimension() {
                return Err(ResumeMatcherError::ArtifactLoad(format!(
                    "Vectorizer produces {} features but the regressor expects {}",
                    vectorizer.dimension(),
                    expected
                )));
            }
        }

        Ok(Self {
            vectorizer,
            regressor,
        })
    }

    /// Load the JSON exports of a fitted TF-IDF vectorizer and regressor.
    pub fn load(vectorizer_path: &Path, regressor_path: &Path) -> Result<Self> {
        let start_time = Instant::now();

        info!("Loading vectorizer from: {}", vectorizer_path.display());
        let vectorizer_json = read_artifact(vectorizer_path)?;
        let vectorizer = TfidfVectorizer::from_json(&vectorizer_json)?;

        info!("Loading regressor from: {}", regressor_path.display());
        let regressor_json = read_artifact(regressor_path)?;
        let artifact: RegressorArtifact = serde_json::from_str(&regressor_json)
            .map_err(|e| ResumeMatcherError::ArtifactLoad(format!("Malformed regressor artifact: {}", e)))?;
        let regressor = artifact.into_regressor()?;

        let scorer = Self::new(Box::new(vectorizer), regressor)?;
        info!("Scoring artifacts loaded in {:.2?}", start_time.elapsed());
        Ok(scorer)
    }

    /// Score already-combined, already-normalized text; rounded to 2 decimals, never clamped.
    pub fn score(&self, combined_text: &str) -> Result<f64> {
        let features = self.vectorizer.transform(combined_text)?;
        let prediction = self.regressor.predict(&features)?;

        if !prediction.is_finite() {
            return Err(ResumeMatcherError::Scoring(format!(
                "Model produced a non-finite prediction: {}",
                prediction
            )));
        }

        debug!("Raw prediction: {}", prediction);
        Ok(round_score(prediction))
    }
}

fn read_artifact(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| {
        ResumeMatcherError::ArtifactLoad(format!("Cannot read {}: {}", path.display(), e))
    })
}

/// Round to two decimal places, ties to even (`0.125` becomes `0.12`).
pub fn round_score(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}
