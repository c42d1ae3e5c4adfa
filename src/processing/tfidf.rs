//! Fitted TF-IDF vectorizer loaded from a JSON export

use crate::error::{Result, ResumeMatcherError};
use crate::processing::scorer::{FeatureVector, Vectorizer};
use ndarray::Array1;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Norm {
    L1,
    L2,
}

fn default_ngram_range() -> (usize, usize) {
    (1, 1)
}

fn default_true() -> bool {
    true
}

fn default_norm() -> Option<Norm> {
    Some(Norm::L2)
}

/// Serialized state of a fitted vectorizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TfidfArtifact {
    pub vocabulary: HashMap<String, usize>,
    pub idf: Vec<f64>,
    #[serde(default = "default_ngram_range")]
    pub ngram_range: (usize, usize),
    #[serde(default = "default_true")]
    pub lowercase: bool,
    #[serde(default)]
    pub sublinear_tf: bool,
    #[serde(default = "default_norm")]
    pub norm: Option<Norm>,
    #[serde(default)]
    pub stop_words: Vec<String>,
}

pub struct TfidfVectorizer {
    vocabulary: HashMap<String, usize>,
    idf: Array1<f64>,
    ngram_range: (usize, usize),
    lowercase: bool,
    sublinear_tf: bool,
    norm: Option<Norm>,
    stop_words: HashSet<String>,
    token_regex: Regex,
}

impl TfidfVectorizer {
    pub fn from_artifact(artifact: TfidfArtifact) -> Result<Self> {
        let (min_n, max_n) = artifact.ngram_range;
        if min_n == 0 || min_n > max_n {
            return Err(ResumeMatcherError::ArtifactLoad(format!(
                "Invalid ngram_range ({}, {})",
                min_n, max_n
            )));
        }

        if artifact.idf.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(ResumeMatcherError::ArtifactLoad(
                "idf weights must be finite and non-negative".to_string(),
            ));
        }

        if let Some((term, column)) = artifact
            .vocabulary
            .iter()
            .find(|(_, column)| **column >= artifact.idf.len())
        {
            return Err(ResumeMatcherError::ArtifactLoad(format!(
                "Term '{}' maps to column {} but only {} idf weights exist",
                term,
                column,
                artifact.idf.len()
            )));
        }

        let token_regex = Regex::new(r"\b\w\w+\b").expect("Invalid token regex");

        Ok(Self {
            vocabulary: artifact.vocabulary,
            idf: Array1::from(artifact.idf),
            ngram_range: artifact.ngram_range,
            lowercase: artifact.lowercase,
            sublinear_tf: artifact.sublinear_tf,
            norm: artifact.norm,
            stop_words: artifact.stop_words.into_iter().collect(),
            token_regex,
        })
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let artifact: TfidfArtifact = serde_json::from_str(json)
            .map_err(|e| ResumeMatcherError::ArtifactLoad(format!("Malformed vectorizer artifact: {}", e)))?;
        Self::from_artifact(artifact)
    }

    /// Word tokens with stop words removed.
    fn tokenize(&self, text: &str) -> Vec<String> {
        let text = if self.lowercase {
            text.to_lowercase()
        } else {
            text.to_string()
        };

        self.token_regex
            .find_iter(&text)
            .map(|m| m.as_str().to_string())
            .filter(|token| !self.stop_words.contains(token))
            .collect()
    }

    /// Word n-grams within the configured range, joined by single spaces.
    fn analyze(&self, text: &str) -> Vec<String> {
        let tokens = self.tokenize(text);
        let (min_n, max_n) = self.ngram_range;
        let mut terms = Vec::new();

        for n in min_n..=max_n {
            if n > tokens.len() {
                break;
            }
            for window in tokens.windows(n) {
                terms.push(window.join(" "));
            }
        }

        terms
    }
}

impl Vectorizer for TfidfVectorizer {
    fn transform(&self, text: &str) -> Result<FeatureVector> {
        let mut features = Array1::<f64>::zeros(self.idf.len());

        for term in self.analyze(text) {
            if let Some(&column) = self.vocabulary.get(&term) {
                features[column] += 1.0;
            }
        }

        if self.sublinear_tf {
            features.mapv_inplace(|tf| if tf > 0.0 { 1.0 + tf.ln() } else { 0.0 });
        }

        features *= &self.idf;

        let length = match self.norm {
            Some(Norm::L2) => features.dot(&features).sqrt(),
            Some(Norm::L1) => features.iter().map(|v| v.abs()).sum(),
            None => 1.0,
        };
        if length > 0.0 {
            features /= length;
        }

        Ok(features)
    }

    fn dimension(&self) -> usize {
        self.idf.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artifact(terms: &[&str], idf: Vec<f64>) -> TfidfArtifact {
        TfidfArtifact {
            vocabulary: terms
                .iter()
                .enumerate()
                .map(|(i, t)| (t.to_string(), i))
                .collect(),
            idf,
            ngram_range: (1, 1),
            lowercase: true,
            sublinear_tf: false,
            norm: Some(Norm::L2),
            stop_words: Vec::new(),
        }
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_l2_normalized_weights() {
        let vectorizer = TfidfVectorizer::from_artifact(artifact(&["python", "sql"], vec![1.0, 2.0])).unwrap();
        let features = vectorizer.transform("Python python SQL").unwrap();

        // tf-idf is [2, 2] before normalisation
        let expected = 1.0 / 2f64.sqrt();
        assert!(close(features[0], expected));
        assert!(close(features[1], expected));
    }

    #[test]
    fn test_single_character_tokens_are_ignored() {
        let vectorizer = TfidfVectorizer::from_artifact(artifact(&["c", "go"], vec![1.0, 1.0])).unwrap();
        let features = vectorizer.transform("c go").unwrap();

        assert_eq!(features[0], 0.0);
        assert!(close(features[1], 1.0));
    }

    #[test]
    fn test_unknown_text_gives_zero_vector() {
        let vectorizer = TfidfVectorizer::from_artifact(artifact(&["rust"], vec![1.5])).unwrap();
        let features = vectorizer.transform("nothing relevant here").unwrap();
        assert_eq!(features.len(), 1);
        assert_eq!(features[0], 0.0);
    }

    #[test]
    fn test_bigrams_and_stop_words() {
        let mut art = artifact(&["machine learning", "machine", "learning"], vec![1.0, 1.0, 1.0]);
        art.ngram_range = (1, 2);
        art.norm = None;
        art.stop_words = vec!["and".to_string()];

        let vectorizer = TfidfVectorizer::from_artifact(art).unwrap();
        // Stop words are dropped before n-grams are formed.
        let features = vectorizer.transform("machine and learning").unwrap();

        assert!(close(features[0], 1.0));
        assert!(close(features[1], 1.0));
        assert!(close(features[2], 1.0));
    }

    #[test]
    fn test_sublinear_tf() {
        let mut art = artifact(&["aws"], vec![1.0]);
        art.sublinear_tf = true;
        art.norm = None;

        let vectorizer = TfidfVectorizer::from_artifact(art).unwrap();
        let features = vectorizer.transform("aws aws aws").unwrap();
        assert!(close(features[0], 1.0 + 3f64.ln()));
    }

    #[test]
    fn test_l1_norm() {
        let mut art = artifact(&["css", "html"], vec![1.0, 3.0]);
        art.norm = Some(Norm::L1);

        let vectorizer = TfidfVectorizer::from_artifact(art).unwrap();
        let features = vectorizer.transform("css html").unwrap();
        assert!(close(features[0], 0.25));
        assert!(close(features[1], 0.75));
    }

    #[test]
    fn test_out_of_range_column_is_rejected() {
        let result = TfidfVectorizer::from_artifact(artifact(&["a1", "b2"], vec![1.0]));
        assert!(matches!(result, Err(ResumeMatcherError::ArtifactLoad(_))));
    }

    #[test]
    fn test_bad_ngram_range_is_rejected() {
        let mut art = artifact(&["x1"], vec![1.0]);
        art.ngram_range = (2, 1);
        assert!(matches!(
            TfidfVectorizer::from_artifact(art),
            Err(ResumeMatcherError::ArtifactLoad(_))
        ));
    }

    #[test]
    fn test_from_json_with_defaults() {
        let json = r#"{"vocabulary": {"python": 0, "sql": 1}, "idf": [1.0, 1.0]}"#;
        let vectorizer = TfidfVectorizer::from_json(json).unwrap();

        assert_eq!(vectorizer.dimension(), 2);
        let features = vectorizer.transform("PYTHON").unwrap();
        assert!(close(features[0], 1.0));
    }

    #[test]
    fn test_malformed_json_is_a_load_error() {
        assert!(matches!(
            TfidfVectorizer::from_json("{\"vocabulary\": 3}"),
            Err(ResumeMatcherError::ArtifactLoad(_))
        ));
    }
}
