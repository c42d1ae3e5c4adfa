//! Resume to job description matching pipeline

use crate::error::{Result, ResumeMatcherError};
use crate::input::manager::RawDocument;
use crate::input::text_extractor::{PdfExtractor, TextExtractor};
use crate::processing::scorer::CompatibilityScorer;
use crate::processing::skill_matcher::SkillMatcher;
use crate::processing::text_processor::{combine_for_scoring, TextNormalizer};
use crate::processing::validator::ResumeValidator;
use crate::processing::vocabulary::Vocabulary;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Scores at or above this are reported as a match.
pub const MATCH_THRESHOLD: f64 = 70.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchStatus {
    Matched,
    #[serde(rename = "Not Matched")]
    NotMatched,
}

impl MatchStatus {
    pub fn from_score(score: f64) -> Self {
        if score >= MATCH_THRESHOLD {
            MatchStatus::Matched
        } else {
            MatchStatus::NotMatched
        }
    }
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchStatus::Matched => write!(f, "Matched"),
            MatchStatus::NotMatched => write!(f, "Not Matched"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompatibilityReport {
    pub match_status: MatchStatus,
    pub compatibility_score: f64,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
}

/// Outcome of one request. A rejected upload carries no report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub is_invalid: bool,
    #[serde(flatten)]
    pub report: Option<CompatibilityReport>,
}

impl MatchResult {
    pub fn rejected() -> Self {
        Self {
            is_invalid: true,
            report: None,
        }
    }

    pub fn completed(report: CompatibilityReport) -> Self {
        Self {
            is_invalid: false,
            report: Some(report),
        }
    }
}

/// Where a request is in the pipeline; used for tracing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Received,
    Extracted,
    Rejected,
    Validated,
    Scored,
    Completed,
}

/// Sequences extraction, screening, scoring and skill matching.
///
/// Cloning is cheap; every clone shares the same vocabularies and scoring
/// artifacts, none of which change after construction.
#[derive(Clone)]
pub struct MatchPipeline {
    extractor: Arc<dyn TextExtractor>,
    normalizer: Arc<TextNormalizer>,
    validator: ResumeValidator,
    skill_matcher: SkillMatcher,
    scorer: Arc<CompatibilityScorer>,
}

impl MatchPipeline {
    pub fn new(scorer: Arc<CompatibilityScorer>) -> Self {
        Self {
            extractor: Arc::new(PdfExtractor),
            normalizer: Arc::new(TextNormalizer::new()),
            validator: ResumeValidator::default(),
            skill_matcher: SkillMatcher::default(),
            scorer,
        }
    }

    pub fn with_extractor(mut self, extractor: Arc<dyn TextExtractor>) -> Self {
        self.extractor = extractor;
        self
    }

    pub fn with_vocabularies(mut self, skills: Arc<Vocabulary>, indicators: Arc<Vocabulary>) -> Self {
        self.skill_matcher = SkillMatcher::new(skills);
        self.validator = ResumeValidator::new(indicators);
        self
    }

    /// Extract text off the async executor; parsing is CPU-bound.
    pub async fn extract(&self, document: RawDocument) -> Result<String> {
        let extractor = Arc::clone(&self.extractor);
        let filename = document.filename.clone();

        let text = tokio::task::spawn_blocking(move || extractor.extract(&document.bytes))
            .await
            .map_err(|e| ResumeMatcherError::Internal(format!("Extraction task failed: {}", e)))??;

        debug!("{:?}: {} ({} chars)", Stage::Extracted, filename, text.chars().count());
        Ok(text)
    }

    /// Run the whole pipeline for one uploaded resume.
    pub async fn run(&self, document: RawDocument, job_description: &str) -> Result<MatchResult> {
        debug!("{:?}: {}", Stage::Received, document.filename);
        let resume_text = self.extract(document).await?;
        self.evaluate(&resume_text, job_description)
    }

    /// Everything after extraction: screening, scoring and skill matching.
    pub fn evaluate(&self, resume_text: &str, job_description: &str) -> Result<MatchResult> {
        if !self.validator.is_valid_resume(resume_text) {
            info!("Upload does not look like a resume; skipping scoring");
            debug!("{:?}", Stage::Rejected);
            return Ok(MatchResult::rejected());
        }
        debug!("{:?}", Stage::Validated);

        let combined = combine_for_scoring(&self.normalizer, resume_text, job_description);
        let compatibility_score = self.scorer.score(&combined)?;

        let gap = self.skill_matcher.compare(resume_text, job_description);
        debug!("{:?}: score {:.2}", Stage::Scored, compatibility_score);

        let match_status = MatchStatus::from_score(compatibility_score);
        info!(
            "{} with score {:.2} ({} matched, {} missing skills)",
            match_status,
            compatibility_score,
            gap.matched.len(),
            gap.missing.len()
        );
        debug!("{:?}", Stage::Completed);

        Ok(MatchResult::completed(CompatibilityReport {
            match_status,
            compatibility_score,
            matched_skills: gap.matched.into_vec(),
            missing_skills: gap.missing.into_vec(),
        }))
    }
}
